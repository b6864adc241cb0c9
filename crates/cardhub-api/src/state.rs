//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use cardhub_core::config::AppConfig;
use cardhub_core::error::AppError;
use cardhub_database::Stores;
use cardhub_service::{AuthService, CardService};
use cardhub_storage::FileManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Credential and card stores
    pub stores: Stores,
    /// Upload storage
    pub files: Arc<FileManager>,
    /// Registration, login, and token verification
    pub auth_service: Arc<AuthService>,
    /// Card management
    pub card_service: Arc<CardService>,
}

impl AppState {
    /// Wires the services on top of already opened stores and storage.
    ///
    /// Fails when the auth settings cannot produce a token signer.
    pub fn new(config: AppConfig, stores: Stores, files: FileManager) -> Result<Self, AppError> {
        let files = Arc::new(files);
        let auth_service = Arc::new(AuthService::new(stores.users.clone(), &config.auth)?);
        let card_service = Arc::new(CardService::new(stores.cards.clone(), Arc::clone(&files)));

        Ok(Self {
            config: Arc::new(config),
            stores,
            files,
            auth_service,
            card_service,
        })
    }
}
