//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use cardhub_core::types::CardId;
use cardhub_entity::card::Card;

/// Body of every message-only response, success or error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub msg: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for the `Authorization` header.
    pub access_token: String,
    /// Authenticated username.
    pub username: String,
}

/// A card as returned by the list and public get endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardResponse {
    pub id: CardId,
    pub name: Option<String>,
    pub email: Option<String>,
    /// `YYYY-MM-DD` or null.
    pub birthday: Option<NaiveDate>,
    pub avatar: Option<String>,
    pub profession: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub fb_link: Option<String>,
    pub line_link: Option<String>,
    pub vcf_path: Option<String>,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            name: card.name,
            email: card.email,
            birthday: card.birthday,
            avatar: card.avatar,
            profession: card.profession,
            created_at: card.created_at,
            updated_at: card.updated_at,
            fb_link: card.fb_link,
            line_link: card.line_link,
            vcf_path: card.vcf_path,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when every dependency is healthy, otherwise `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Store status.
    pub database: String,
    /// Upload storage status.
    pub storage: String,
}
