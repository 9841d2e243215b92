//! The stored user record.
//!
//! This is the JSON object the backend returns on login (and on anonymous
//! session start) and that the session layer persists verbatim under the
//! `user` / `anonymousUser` slots. Every field is optional: records written
//! by older clients, or by the guest-start flow, routinely omit most of
//! them.

use mindmeter_core::serde::deserialize_optional_string;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record as persisted in session storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredUser {
    pub id: Option<Uuid>,
    /// Empty strings count as absent; anonymous records carry no email.
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
    /// Wire-format role string; parsed at identity resolution.
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub role: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub full_name: Option<String>,
    pub avatar: Option<String>,
}
