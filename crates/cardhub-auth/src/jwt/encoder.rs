//! Access token creation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use cardhub_core::config::AuthConfig;
use cardhub_core::error::AppError;
use cardhub_core::types::UserId;

use super::claims::Claims;

/// Creates signed HS256 access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

/// A freshly signed token and when it stops being accepted.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact JWT string.
    pub token: String,
    /// Expiration time.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Fails when `token_ttl_days` does not fit in a `chrono::Duration`.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let ttl = i64::try_from(config.token_ttl_days)
            .ok()
            .and_then(Duration::try_days)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.token_ttl_days is out of range: {}",
                    config.token_ttl_days
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl,
        })
    }

    /// Issues a token for the user, valid from now.
    pub fn generate_token(&self, user_id: UserId, username: &str) -> Result<IssuedToken, AppError> {
        self.generate_token_at(user_id, username, Utc::now())
    }

    /// Issues a token as if it had been signed at `issued_at`.
    pub fn generate_token_at(
        &self,
        user_id: UserId,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::internal("Access token expiry overflows"))?;
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
