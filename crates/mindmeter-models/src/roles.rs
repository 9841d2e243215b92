//! Platform roles.
//!
//! The backend encodes roles as upper-case strings (`"ADMIN"`, `"EXPERT"`,
//! `"STUDENT"`, `"ANONYMOUS"`). Parsing happens once, at identity
//! resolution; after that the role is a closed enum and unknown strings can
//! no longer occur.

use serde::{Deserialize, Serialize};

/// A user's role on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Expert,
    Student,
    Anonymous,
}

impl Role {
    /// Parses a wire-format role string.
    ///
    /// Matching is case-insensitive; unknown strings yield `None` and are
    /// treated by callers the same as an absent role.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Some(Self::Admin),
            "EXPERT" => Some(Self::Expert),
            "STUDENT" => Some(Self::Student),
            "ANONYMOUS" => Some(Self::Anonymous),
            _ => None,
        }
    }

    /// The wire-format string for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Expert => "EXPERT",
            Self::Student => "STUDENT",
            Self::Anonymous => "ANONYMOUS",
        }
    }

    /// The display-name placeholder used when a user has neither a name nor
    /// an email.
    #[must_use]
    pub fn placeholder_name(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Expert => "Expert",
            Self::Student => "Student",
            Self::Anonymous => crate::identity::ANONYMOUS_DISPLAY_NAME,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("EXPERT"), Some(Role::Expert));
        assert_eq!(Role::parse("STUDENT"), Some(Role::Student));
        assert_eq!(Role::parse("ANONYMOUS"), Some(Role::Anonymous));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Expert"), Some(Role::Expert));
        assert_eq!(Role::parse(" student "), Some(Role::Student));
    }

    #[test]
    fn test_parse_unknown_role() {
        assert_eq!(Role::parse("SUPERUSER"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_serde_wire_format() {
        let json = serde_json::to_string(&Role::Expert).unwrap();
        assert_eq!(json, r#""EXPERT""#);

        let role: Role = serde_json::from_str(r#""STUDENT""#).unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn test_round_trip_as_str() {
        for role in [Role::Admin, Role::Expert, Role::Student, Role::Anonymous] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }
}
