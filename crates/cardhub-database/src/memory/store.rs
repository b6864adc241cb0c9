//! In-memory implementation of [`UserStore`] and [`CardStore`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use cardhub_core::error::AppError;
use cardhub_core::result::AppResult;
use cardhub_core::types::{CardId, UserId};
use cardhub_entity::card::{Card, CardUpdate, NewCard};
use cardhub_entity::user::{CreateUser, User};

use crate::store::{CardStore, UserStore};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    cards: Vec<Card>,
}

/// Both tables behind one lock, mirroring the constraints of the
/// PostgreSQL schema (unique username/email, card owner must exist).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.username == data.username) {
            return Err(AppError::conflict(format!(
                "Username '{}' already exists",
                data.username
            )));
        }
        if tables.users.iter().any(|u| u.email == data.email) {
            return Err(AppError::conflict("Email already in use"));
        }

        let user = User {
            id: UserId::new(),
            username: data.username.clone(),
            password_hash: data.password_hash.clone(),
            email: data.email.clone(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        debug!(user_id = %user.id, "Inserted user");
        Ok(user)
    }
}

#[async_trait]
impl CardStore for MemoryStore {
    async fn list_by_owner(&self, user_id: UserId) -> AppResult<Vec<Card>> {
        let tables = self.tables.read().await;
        Ok(tables
            .cards
            .iter()
            .filter(|c| c.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: CardId) -> AppResult<Option<Card>> {
        let tables = self.tables.read().await;
        Ok(tables.cards.iter().find(|c| c.id == id).cloned())
    }

    async fn find_owned(&self, id: CardId, user_id: UserId) -> AppResult<Option<Card>> {
        let tables = self.tables.read().await;
        Ok(tables
            .cards
            .iter()
            .find(|c| c.id == id && c.is_owned_by(user_id))
            .cloned())
    }

    async fn create(&self, data: &NewCard) -> AppResult<Card> {
        let mut tables = self.tables.write().await;

        if !tables.users.iter().any(|u| u.id == data.user_id) {
            return Err(AppError::database(format!(
                "Card owner {} does not exist",
                data.user_id
            )));
        }

        let now = Utc::now();
        let fields = data.fields.clone();
        let card = Card {
            id: CardId::new(),
            user_id: data.user_id,
            name: fields.name,
            email: fields.email,
            birthday: fields.birthday,
            avatar: data.avatar.clone(),
            profession: fields.profession,
            created_at: now,
            updated_at: now,
            fb_link: fields.fb_link,
            line_link: fields.line_link,
            vcf_path: data.vcf_path.clone(),
        };
        tables.cards.push(card.clone());
        debug!(card_id = %card.id, user_id = %card.user_id, "Inserted card");
        Ok(card)
    }

    async fn update(&self, data: &CardUpdate) -> AppResult<Option<Card>> {
        let mut tables = self.tables.write().await;
        let Some(card) = tables
            .cards
            .iter_mut()
            .find(|c| c.id == data.id && c.is_owned_by(data.user_id))
        else {
            return Ok(None);
        };

        let fields = data.fields.clone();
        card.name = fields.name;
        card.email = fields.email;
        card.birthday = fields.birthday;
        card.avatar = data.avatar.clone();
        card.profession = fields.profession;
        card.fb_link = fields.fb_link;
        card.line_link = fields.line_link;
        card.vcf_path = data.vcf_path.clone();
        card.updated_at = Utc::now();
        Ok(Some(card.clone()))
    }

    async fn delete_owned(&self, id: CardId, user_id: UserId) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.cards.len();
        tables
            .cards
            .retain(|c| !(c.id == id && c.is_owned_by(user_id)));
        Ok(tables.cards.len() < before)
    }
}
