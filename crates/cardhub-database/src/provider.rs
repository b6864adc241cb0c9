//! Store selection: PostgreSQL repositories or the in-memory store,
//! depending on `database.provider`.

use std::sync::Arc;

use tracing::info;

use cardhub_core::config::{DatabaseConfig, DatabaseProvider};
use cardhub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{CardRepository, UserRepository};
use crate::store::{CardStore, UserStore};

/// The credential and card stores used by the services.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Credential store.
    pub users: Arc<dyn UserStore>,
    /// Card store.
    pub cards: Arc<dyn CardStore>,
    /// Present only for the PostgreSQL provider.
    pool: Option<DatabasePool>,
}

impl Stores {
    /// Connect the configured provider, running migrations when enabled.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self {
                    users: Arc::new(UserRepository::new(pool.pool().clone())),
                    cards: Arc::new(CardRepository::new(pool.pool().clone())),
                    pool: Some(pool),
                })
            }
            DatabaseProvider::Memory => {
                info!("Using in-memory store; data will not survive a restart");
                Ok(Self::in_memory())
            }
        }
    }

    /// Stores backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            cards: store,
            pool: None,
        }
    }

    /// Check that the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release pooled connections, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
