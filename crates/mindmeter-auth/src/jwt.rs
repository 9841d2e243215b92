//! Display-only JWT decoding.
//!
//! The client never verifies signatures; the backend is the authority on
//! token validity and rejects tampered tokens on every request. Decoding
//! here only extracts claims for display and routing, so the signature check
//! is disabled. Expiry is still honored: an expired credential is as good as
//! no credential.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use mindmeter_core::{Error, Result};

use crate::claims::Claims;

/// Decodes a bearer credential into its claims without verifying the
/// signature.
///
/// # Errors
///
/// Returns [`Error::Credential`] if the token is malformed or expired.
/// Callers map this to "no identity"; it must never crash the flow.
pub fn decode_claims(token: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_aud = false;

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(Error::credential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn mint(claims: &Claims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(b"any-secret-the-client-never-knows"),
        )
        .unwrap()
    }

    fn claims_expiring_at(exp: usize) -> Claims {
        Claims {
            sub: Some("a@x.com".into()),
            role: Some("EXPERT".into()),
            first_name: Some("A".into()),
            last_name: None,
            avatar: None,
            exp,
            iat: None,
        }
    }

    fn future_exp() -> usize {
        chrono::Utc::now().timestamp() as usize + 3600
    }

    #[test]
    fn test_decode_without_knowing_the_secret() {
        let token = mint(&claims_expiring_at(future_exp()));
        let claims = decode_claims(&token).unwrap();

        assert_eq!(claims.sub.as_deref(), Some("a@x.com"));
        assert_eq!(claims.role.as_deref(), Some("EXPERT"));
        assert_eq!(claims.first_name.as_deref(), Some("A"));
    }

    #[test]
    fn test_decode_malformed_token_is_err() {
        assert!(decode_claims("not-a-jwt").is_err());
        assert!(decode_claims("").is_err());
        assert!(decode_claims("a.b").is_err());
    }

    #[test]
    fn test_decode_expired_token_is_err() {
        // Well past the default decoding leeway.
        let token = mint(&claims_expiring_at(1_000_000));
        assert!(decode_claims(&token).is_err());
    }

    #[test]
    fn test_decode_anonymous_token() {
        let token = mint(&Claims {
            sub: None,
            role: Some("ANONYMOUS".into()),
            first_name: None,
            last_name: None,
            avatar: None,
            exp: future_exp(),
            iat: None,
        });
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, None);
        assert_eq!(claims.role.as_deref(), Some("ANONYMOUS"));
    }
}
