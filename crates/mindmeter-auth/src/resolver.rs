//! The canonical identity resolver.
//!
//! Every consumer takes the resolved [`Identity`] from here; no page-level
//! code re-derives names or the anonymous flag. Resolution is a pure read:
//! idempotent, side-effect-free, and performed fresh on every call because
//! storage may have been mutated by another process in the meantime.
//!
//! Resolution order:
//!
//! 1. a stored user record (authenticated slot first, anonymous second);
//! 2. else a stored credential, decoded for display;
//! 3. else no identity.
//!
//! Both paths share the same anonymous normalization: a record whose role is
//! absent, unrecognized, or `ANONYMOUS`, or whose email is absent, resolves
//! to an anonymous student identity.

use tracing::debug;

use mindmeter_models::{Identity, Role, StoredUser};
use mindmeter_session::Session;

use crate::claims::Claims;
use crate::jwt::decode_claims;

/// Resolves the current identity from session storage.
///
/// Returns `None` when no session exists or the stored credential cannot be
/// decoded. Decoding failures are logged and swallowed; resolution never
/// fails loudly.
#[must_use]
pub fn resolve_identity(session: &Session) -> Option<Identity> {
    if let Some(user) = session.current_user() {
        return Some(identity_from_stored(&user));
    }

    let token = session.current_token()?;
    match decode_claims(&token) {
        Ok(claims) => Some(identity_from_claims(&claims)),
        Err(e) => {
            debug!(error = %e, "Stored credential undecodable, resolving to no identity");
            None
        }
    }
}

/// Builds an identity from a stored user record.
#[must_use]
pub fn identity_from_stored(user: &StoredUser) -> Identity {
    build_identity(
        user.role.as_deref(),
        user.email.as_deref(),
        user.full_name.as_deref(),
        user.first_name.as_deref(),
        user.last_name.as_deref(),
        user.avatar.clone(),
    )
}

/// Builds an identity from decoded credential claims.
#[must_use]
pub fn identity_from_claims(claims: &Claims) -> Identity {
    build_identity(
        claims.role.as_deref(),
        claims.sub.as_deref(),
        None,
        claims.first_name.as_deref(),
        claims.last_name.as_deref(),
        claims.avatar.clone(),
    )
}

fn build_identity(
    role: Option<&str>,
    email: Option<&str>,
    full_name: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
    avatar: Option<String>,
) -> Identity {
    let parsed_role = role.and_then(Role::parse);

    // An unrecognized role string normalizes the same way as an absent one.
    let anonymous =
        matches!(parsed_role, None | Some(Role::Anonymous)) || email.is_none();

    let display_role = if anonymous {
        Role::Anonymous
    } else {
        parsed_role.unwrap_or(Role::Student)
    };

    let name = match full_name {
        Some(full_name) => full_name.to_string(),
        None => Identity::derive_name(first_name, last_name, email, display_role),
    };

    Identity {
        name,
        email: email.map(str::to_string),
        // Anonymous identities share the student experience.
        role: if anonymous { Role::Student } else { display_role },
        anonymous,
        avatar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindmeter_models::ANONYMOUS_DISPLAY_NAME;

    #[test]
    fn test_expert_with_first_name_only() {
        let claims = Claims {
            sub: Some("a@x.com".into()),
            role: Some("EXPERT".into()),
            first_name: Some("A".into()),
            last_name: None,
            avatar: None,
            exp: 9999999999,
            iat: None,
        };

        let identity = identity_from_claims(&claims);

        assert_eq!(identity.name, "A");
        assert_eq!(identity.email.as_deref(), Some("a@x.com"));
        assert_eq!(identity.role, Role::Expert);
        assert!(!identity.anonymous);
    }

    #[test]
    fn test_student_without_names_falls_back_to_email() {
        let user = StoredUser {
            email: Some("student@x.com".into()),
            role: Some("STUDENT".into()),
            ..Default::default()
        };

        let identity = identity_from_stored(&user);

        assert_eq!(identity.name, "student@x.com");
        assert_eq!(identity.role, Role::Student);
        assert!(!identity.anonymous);
    }

    #[test]
    fn test_null_email_forces_anonymous_regardless_of_role() {
        let user = StoredUser {
            email: None,
            role: Some("EXPERT".into()),
            ..Default::default()
        };

        let identity = identity_from_stored(&user);

        assert!(identity.anonymous);
        assert_eq!(identity.role, Role::Student);
    }

    #[test]
    fn test_anonymous_role_forces_anonymous() {
        let user = StoredUser {
            email: Some("ghost@x.com".into()),
            role: Some("ANONYMOUS".into()),
            ..Default::default()
        };

        let identity = identity_from_stored(&user);

        assert!(identity.anonymous);
        assert_eq!(identity.role, Role::Student);
    }

    #[test]
    fn test_unrecognized_role_normalizes_to_anonymous() {
        let user = StoredUser {
            email: Some("who@x.com".into()),
            role: Some("SUPERUSER".into()),
            ..Default::default()
        };

        let identity = identity_from_stored(&user);

        assert!(identity.anonymous);
        assert_eq!(identity.role, Role::Student);
    }

    #[test]
    fn test_bare_anonymous_record_gets_default_name() {
        let user = StoredUser::default();

        let identity = identity_from_stored(&user);

        assert_eq!(identity.name, ANONYMOUS_DISPLAY_NAME);
        assert_eq!(identity.role, Role::Student);
        assert!(identity.anonymous);
    }

    #[test]
    fn test_full_name_wins_over_parts() {
        let user = StoredUser {
            email: Some("a@x.com".into()),
            role: Some("ADMIN".into()),
            full_name: Some("Dr. An Nguyen".into()),
            first_name: Some("An".into()),
            last_name: Some("Nguyen".into()),
            ..Default::default()
        };

        let identity = identity_from_stored(&user);

        assert_eq!(identity.name, "Dr. An Nguyen");
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn test_admin_placeholder_name() {
        let user = StoredUser {
            email: None,
            role: Some("ADMIN".into()),
            ..Default::default()
        };

        // Email absent forces anonymous even for an admin-tagged record.
        let identity = identity_from_stored(&user);
        assert!(identity.anonymous);
        assert_eq!(identity.name, ANONYMOUS_DISPLAY_NAME);
    }
}
