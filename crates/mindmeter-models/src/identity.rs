//! The resolved identity.
//!
//! [`Identity`] is the single UI-facing view of the current user. It is
//! produced by the identity resolver and consumed everywhere else; no other
//! code re-derives names, roles, or the anonymous flag from raw storage.

use crate::roles::Role;
use serde::{Deserialize, Serialize};

/// Display name used for anonymous users.
pub const ANONYMOUS_DISPLAY_NAME: &str = "Người dùng Ẩn danh";

/// The resolved, UI-facing user record.
///
/// Created fresh on every resolution; never cached across invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name, derived from name parts with email and role-placeholder
    /// fallbacks.
    pub name: String,
    pub email: Option<String>,
    pub role: Role,
    /// True for guest sessions; anonymous identities always carry the
    /// [`Role::Student`] role.
    pub anonymous: bool,
    pub avatar: Option<String>,
}

impl Identity {
    /// Derives a display name from optional name parts, with email and
    /// role-placeholder fallbacks.
    ///
    /// The rule is `trim(first + " " + last)`, falling back to the email,
    /// falling back to the role's placeholder name.
    #[must_use]
    pub fn derive_name(
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
        role: Role,
    ) -> String {
        let joined = format!(
            "{} {}",
            first_name.unwrap_or_default(),
            last_name.unwrap_or_default()
        );
        let joined = joined.trim();

        if !joined.is_empty() {
            joined.to_string()
        } else if let Some(email) = email {
            email.to_string()
        } else {
            role.placeholder_name().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_name_from_parts() {
        let name = Identity::derive_name(Some("An"), Some("Nguyen"), Some("a@x.com"), Role::Expert);
        assert_eq!(name, "An Nguyen");
    }

    #[test]
    fn test_derive_name_first_only() {
        let name = Identity::derive_name(Some("A"), None, Some("a@x.com"), Role::Expert);
        assert_eq!(name, "A");
    }

    #[test]
    fn test_derive_name_falls_back_to_email() {
        let name = Identity::derive_name(None, None, Some("student@x.com"), Role::Student);
        assert_eq!(name, "student@x.com");
    }

    #[test]
    fn test_derive_name_falls_back_to_role_placeholder() {
        assert_eq!(Identity::derive_name(None, None, None, Role::Admin), "Admin");
        assert_eq!(
            Identity::derive_name(None, None, None, Role::Expert),
            "Expert"
        );
        assert_eq!(
            Identity::derive_name(None, None, None, Role::Student),
            "Student"
        );
    }

    #[test]
    fn test_derive_name_anonymous_placeholder() {
        assert_eq!(
            Identity::derive_name(None, None, None, Role::Anonymous),
            ANONYMOUS_DISPLAY_NAME
        );
    }
}
