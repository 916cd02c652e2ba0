//! Mock session-token codec.
//!
//! A token is the claims payload serialized to JSON and Base64-encoded.
//! There is no signature and no secret: anyone holding a token can read
//! and forge it. This mirrors a client-only demo login and must not be
//! reused anywhere real authentication is required.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::user::UserRecord;

/// Token lifetime.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Identity and expiry carried inside a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsPayload {
    pub id: u32,
    pub email: String,
    pub name: String,
    /// Expiry as epoch milliseconds.
    pub exp: i64,
}

impl ClaimsPayload {
    /// Claims for a freshly authenticated user, expiring
    /// [`TOKEN_TTL_HOURS`] after `now_ms`.
    pub fn issue(user: &UserRecord, now_ms: i64) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            exp: now_ms + Duration::hours(TOKEN_TTL_HOURS).num_milliseconds(),
        }
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.exp <= now_ms
    }
}

/// Current wall clock as epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Encodes claims into the opaque token string.
pub fn encode_token(claims: &ClaimsPayload) -> String {
    // A plain struct of strings and integers cannot fail to serialize.
    let json = serde_json::to_string(claims).unwrap_or_default();
    STANDARD.encode(json)
}

/// Decodes and validates a token against the current wall clock.
pub fn decode_token(token: &str) -> Option<ClaimsPayload> {
    decode_token_at(token, now_ms())
}

/// Decodes a token, rejecting malformed input and anything already
/// expired at `now_ms`. Every failure maps to `None`.
pub fn decode_token_at(token: &str, now_ms: i64) -> Option<ClaimsPayload> {
    let bytes = STANDARD.decode(token).ok()?;
    let json = String::from_utf8(bytes).ok()?;
    let claims: ClaimsPayload = serde_json::from_str(&json).ok()?;
    if claims.is_expired(now_ms) {
        return None;
    }
    Some(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserRecord {
        UserRecord {
            id: 7,
            name: "Jane Tester".to_string(),
            email: "jane@example.com".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[test]
    fn test_issue_sets_24h_expiry() {
        let claims = ClaimsPayload::issue(&sample_user(), 1_000);
        assert_eq!(claims.exp, 1_000 + 24 * 60 * 60 * 1_000);
        assert_eq!(claims.id, 7);
        assert_eq!(claims.email, "jane@example.com");
    }

    #[test]
    fn test_round_trip_before_expiry() {
        let claims = ClaimsPayload::issue(&sample_user(), 1_000);
        let token = encode_token(&claims);
        let decoded = decode_token_at(&token, 2_000).expect("token should decode");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let claims = ClaimsPayload::issue(&sample_user(), 0);
        let token = encode_token(&claims);
        let past_expiry = claims.exp + 1;
        assert_eq!(decode_token_at(&token, past_expiry), None);
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let claims = ClaimsPayload::issue(&sample_user(), 0);
        let token = encode_token(&claims);
        // exp == now counts as expired.
        assert_eq!(decode_token_at(&token, claims.exp), None);
        assert!(decode_token_at(&token, claims.exp - 1).is_some());
    }

    #[test]
    fn test_malformed_base64_is_invalid() {
        assert_eq!(decode_token_at("not%%base64", 0), None);
    }

    #[test]
    fn test_non_utf8_payload_is_invalid() {
        let token = STANDARD.encode([0xff, 0xfe, 0xfd]);
        assert_eq!(decode_token_at(&token, 0), None);
    }

    #[test]
    fn test_junk_json_is_invalid() {
        let token = STANDARD.encode("{\"id\": \"seven\"}");
        assert_eq!(decode_token_at(&token, 0), None);
    }

    #[test]
    fn test_decode_never_panics_on_empty_input() {
        assert_eq!(decode_token_at("", 0), None);
    }
}
