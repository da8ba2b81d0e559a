/**
 * Session Tokens
 *
 * This module issues and validates the signed, time-bound bearer tokens
 * that prove a caller's identity. Tokens are HS256 JWTs; nothing about a
 * session is stored server-side.
 *
 * A token is Valid while `now < exp` and its signature verifies against the
 * configured secret, and Invalid otherwise. There is no revocation.
 */

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID, as a decimal string
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Why a token was rejected
///
/// Callers see all of these as "unauthorized"; the distinction is for logs
/// and tests.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Not a JWT, wrong algorithm, missing claims, or non-numeric subject
    #[error("malformed token")]
    Malformed,

    /// Signature does not match the server secret
    #[error("bad token signature")]
    BadSignature,

    /// Current time is at or past `exp`
    #[error("token expired")]
    Expired,

    /// Signing a new token failed
    #[error("token signing failed: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

/// A freshly issued token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and validates session tokens
///
/// The secret is injected at construction and never changes afterwards, so
/// the service can be cloned into every request freely.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service signing with `secret`; tokens live for `ttl`
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a token for `user_id`, expiring `ttl` from now
    pub fn issue(&self, user_id: i64) -> Result<IssuedToken, TokenError> {
        self.issue_at(user_id, unix_now())
    }

    /// Create a token as if the current time were `now` (Unix seconds)
    pub fn issue_at(&self, user_id: i64, now: u64) -> Result<IssuedToken, TokenError> {
        let exp = now.saturating_add(self.ttl.as_secs());
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
            iat: now,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)?;

        Ok(IssuedToken {
            token,
            expires_at: timestamp_to_datetime(exp),
        })
    }

    /// Verify a token and return the user ID it was issued for
    pub fn validate(&self, token: &str) -> Result<i64, TokenError> {
        self.validate_at(token, unix_now())
    }

    /// Verify a token as if the current time were `now` (Unix seconds)
    pub fn validate_at(&self, token: &str, now: u64) -> Result<i64, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against `now`, with no leeway.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed,
            }
        })?;

        if now >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        data.claims.sub.parse::<i64>().map_err(|_| TokenError::Malformed)
    }
}

fn unix_now() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}

fn timestamp_to_datetime(secs: u64) -> DateTime<Utc> {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
