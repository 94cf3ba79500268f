//! Non-authoritative token claims extraction.
//!
//! The backend issues tokens in JWT compact form. During the login
//! handshake the client needs the subject id before it can fetch the user
//! record, so it base64url-decodes the payload segment and reads the `sub`
//! claim — **without verifying the signature**. Nothing security-relevant
//! hangs off this decode: the token is trusted only insofar as the
//! subsequent authenticated request made with it succeeds, and real
//! authorization stays server-enforced.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::ApiError;

/// Extract the `sub` claim from a compact-form token as a user id.
///
/// Accepts the claim as a JSON number or a numeric string; backends differ
/// on which they emit.
pub fn subject(token: &str) -> Result<i64, ApiError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| ApiError::Claims("token is not in compact form".to_string()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|err| ApiError::Claims(format!("payload is not base64url: {err}")))?;

    let claims: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|err| ApiError::Claims(format!("payload is not JSON: {err}")))?;

    match claims.get("sub") {
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| ApiError::Claims("sub claim is not an integer".to_string())),
        Some(serde_json::Value::String(s)) => s
            .parse()
            .map_err(|_| ApiError::Claims("sub claim is not numeric".to_string())),
        _ => Err(ApiError::Claims("missing sub claim".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn test_numeric_sub() {
        let token = token_with_payload(r#"{"sub":42,"iss":"backend"}"#);
        assert_eq!(subject(&token).unwrap(), 42);
    }

    #[test]
    fn test_string_sub() {
        let token = token_with_payload(r#"{"sub":"42"}"#);
        assert_eq!(subject(&token).unwrap(), 42);
    }

    #[test]
    fn test_missing_sub_is_rejected() {
        let token = token_with_payload(r#"{"iss":"backend"}"#);
        assert!(matches!(subject(&token), Err(ApiError::Claims(_))));
    }

    #[test]
    fn test_non_numeric_sub_is_rejected() {
        let token = token_with_payload(r#"{"sub":"alice"}"#);
        assert!(matches!(subject(&token), Err(ApiError::Claims(_))));
    }

    #[test]
    fn test_opaque_token_is_rejected() {
        assert!(matches!(subject("not-a-jwt"), Err(ApiError::Claims(_))));
    }

    #[test]
    fn test_garbage_payload_is_rejected() {
        assert!(matches!(
            subject("aGVhZGVy.!!!not-base64!!!.sig"),
            Err(ApiError::Claims(_))
        ));
    }
}
