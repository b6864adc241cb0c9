//! Account registration, credential login, and bearer token verification.

use std::sync::Arc;

use tracing::{debug, info};

use cardhub_auth::jwt::{JwtDecoder, JwtEncoder};
use cardhub_auth::password::PasswordHasher;
use cardhub_core::config::AuthConfig;
use cardhub_core::error::AppError;
use cardhub_database::UserStore;
use cardhub_entity::user::{CreateUser, User};

use crate::context::RequestContext;

/// Message returned for every failed login, whichever part was wrong.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Handles account creation and authentication.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Credential store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token signer.
    encoder: Arc<JwtEncoder>,
    /// Token verifier.
    decoder: Arc<JwtDecoder>,
}

/// Fields submitted to create an account.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    /// Desired username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// Email address.
    pub email: String,
}

/// A successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Signed bearer token.
    pub access_token: String,
    /// The authenticated username.
    pub username: String,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(users: Arc<dyn UserStore>, config: &AuthConfig) -> Result<Self, AppError> {
        Ok(Self {
            users,
            hasher: Arc::new(PasswordHasher::new()),
            encoder: Arc::new(JwtEncoder::new(config)?),
            decoder: Arc::new(JwtDecoder::new(config)),
        })
    }

    /// Creates an account. No token is issued.
    pub async fn register(&self, registration: Registration) -> Result<User, AppError> {
        let Registration {
            username,
            password,
            email,
        } = registration;

        if username.is_empty() || password.is_empty() || email.is_empty() {
            return Err(AppError::validation("Missing required fields"));
        }

        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict("Username already exists"));
        }

        let password_hash = self.hasher.hash_password(&password)?;

        // A concurrent registration can still win the race; the store
        // reports that as a conflict naming the column.
        let user = self
            .users
            .create(&CreateUser {
                username,
                password_hash,
                email,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Verifies credentials and issues an access token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            debug!(username, "Login for unknown user");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            debug!(user_id = %user.id, "Login with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let issued = self.encoder.generate_token(user.id, &user.username)?;

        info!(user_id = %user.id, expires_at = %issued.expires_at, "User logged in");
        Ok(LoginResult {
            access_token: issued.token,
            username: user.username,
        })
    }

    /// Resolves a bearer token to the calling user.
    ///
    /// The subject must still name a stored account.
    pub async fn authenticate(&self, token: &str) -> Result<RequestContext, AppError> {
        if token.is_empty() {
            return Err(AppError::unauthorized("Missing access token"));
        }

        let claims = self.decoder.decode(token)?;
        let user_id = claims.user_id()?;

        let Some(user) = self.users.find_by_id(user_id).await? else {
            debug!(user_id = %user_id, "Token for unknown user");
            return Err(AppError::unauthorized("Unknown user"));
        };

        Ok(RequestContext::new(user.id, user.username))
    }
}
