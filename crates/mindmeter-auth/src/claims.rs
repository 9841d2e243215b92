//! Claims embedded in backend-issued credentials.
//!
//! Every field except `exp` is optional: anonymous credentials carry no
//! subject, and older tokens omit name parts and avatar.

use mindmeter_core::serde::deserialize_optional_string;
use serde::{Deserialize, Serialize};

/// The claims record decoded from a bearer credential.
///
/// # Fields
///
/// - `sub`: Subject, the user's email (absent for anonymous credentials)
/// - `role`: Wire-format role string (`"ADMIN"`, `"EXPERT"`, ...)
/// - `first_name` / `last_name`: Optional name parts
/// - `avatar`: Optional avatar URI
/// - `exp` / `iat`: Expiry and issued-at timestamps (Unix seconds)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub sub: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    #[serde(default)]
    pub iat: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_deserialize_full() {
        let json = r#"{"sub":"a@x.com","role":"EXPERT","firstName":"A","lastName":"B","avatar":"https://cdn/x.png","exp":9999999999,"iat":1234567890}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("a@x.com"));
        assert_eq!(claims.role.as_deref(), Some("EXPERT"));
        assert_eq!(claims.first_name.as_deref(), Some("A"));
        assert_eq!(claims.exp, 9999999999);
    }

    #[test]
    fn test_claims_deserialize_anonymous() {
        let json = r#"{"role":"ANONYMOUS","exp":9999999999}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, None);
        assert_eq!(claims.role.as_deref(), Some("ANONYMOUS"));
        assert_eq!(claims.iat, None);
    }

    #[test]
    fn test_claims_empty_sub_is_absent() {
        let json = r#"{"sub":"","exp":9999999999}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, None);
    }

    #[test]
    fn test_claims_serialize_camel_case() {
        let claims = Claims {
            sub: Some("a@x.com".into()),
            role: Some("STUDENT".into()),
            first_name: Some("An".into()),
            last_name: None,
            avatar: None,
            exp: 9999999999,
            iat: Some(1234567890),
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains(r#""firstName":"An""#));
        assert!(json.contains(r#""sub":"a@x.com""#));
    }
}
