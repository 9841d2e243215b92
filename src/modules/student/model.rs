use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestHistoryEntry {
    #[serde(rename = "type")]
    pub test_type: String,
    pub score: i32,
    pub severity: String,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub taken_at: Option<DateTime<Utc>>,
}

// One message in a student-expert conversation; shared with the expert
// module, which sees the same shape from the other side
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub sender_name: String,
    pub from_expert: bool,
    pub content: String,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub sent_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1))]
    pub content: String,
}

// Unread-count payload for the notification badge; defaults to zero so the
// read can fail soft
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnreadCount {
    pub count: i64,
}
