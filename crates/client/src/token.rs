//! Local decoding of session tokens.
//!
//! The payload is read without checking the signature. The result is only
//! good for display and for deciding whether a stored token has expired;
//! the server verifies every token it receives.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use motorhub_core::session::SessionClaims;

use crate::error::ClientError;

/// Decode a token's claims without verifying its signature or expiry.
pub fn decode_unverified(token: &str) -> Result<SessionClaims, ClientError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<SessionClaims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use jsonwebtoken::{encode, EncodingKey, Header};

    use super::*;

    fn claims(exp: i64) -> SessionClaims {
        SessionClaims {
            user_id: 5,
            name: "Jordan".into(),
            email: "jordan@example.com".into(),
            role: "superadmin".into(),
            exp,
            iat: 0,
        }
    }

    #[test]
    fn decodes_token_signed_with_unknown_secret() {
        let token = encode(
            &Header::default(),
            &claims(4_000_000_000),
            &EncodingKey::from_secret(b"server-only-secret"),
        )
        .unwrap();

        assert_eq!(decode_unverified(&token).unwrap(), claims(4_000_000_000));
    }

    #[test]
    fn expired_token_still_decodes() {
        let token = encode(
            &Header::default(),
            &claims(1),
            &EncodingKey::from_secret(b"k"),
        )
        .unwrap();

        assert!(decode_unverified(&token).unwrap().is_expired_at(2));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_matches!(decode_unverified("not-a-token"), Err(ClientError::Token(_)));
        assert_matches!(decode_unverified("a.b.c"), Err(ClientError::Token(_)));
    }
}
