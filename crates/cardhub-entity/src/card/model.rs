//! Card entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cardhub_core::types::{CardId, UserId};

/// A contact card owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Card {
    /// Unique card identifier.
    pub id: CardId,
    /// The owning user. Never changes after creation.
    pub user_id: UserId,
    /// Display name on the card.
    pub name: Option<String>,
    /// Contact email printed on the card.
    pub email: Option<String>,
    /// Birthday (date only).
    pub birthday: Option<NaiveDate>,
    /// Public avatar path (`/static/avatars/<file>`).
    pub avatar: Option<String>,
    /// Job title or profession.
    pub profession: Option<String>,
    /// When the card was created.
    pub created_at: DateTime<Utc>,
    /// When the card was last updated.
    pub updated_at: DateTime<Utc>,
    /// Facebook profile link.
    pub fb_link: Option<String>,
    /// LINE profile link.
    pub line_link: Option<String>,
    /// Public vCard export path (`/static/vcf/<owner>.vcf`).
    pub vcf_path: Option<String>,
}

impl Card {
    /// Whether the given user owns this card.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Text fields submitted with a card form.
///
/// On update every field here overwrites the stored value, so an omitted
/// field clears the column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardFields {
    /// Display name.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Birthday, already normalized.
    pub birthday: Option<NaiveDate>,
    /// Profession.
    pub profession: Option<String>,
    /// Facebook link.
    pub fb_link: Option<String>,
    /// LINE link.
    pub line_link: Option<String>,
}

/// Data required to insert a new card row.
#[derive(Debug, Clone)]
pub struct NewCard {
    /// Owner of the card.
    pub user_id: UserId,
    /// Submitted text fields.
    pub fields: CardFields,
    /// Public avatar path, if an avatar was saved.
    pub avatar: Option<String>,
    /// Public vCard path, if a vCard was saved.
    pub vcf_path: Option<String>,
}

/// Full replacement values for an owned card.
///
/// `avatar` and `vcf_path` are already resolved by the caller: either the
/// newly saved path or the previously stored one.
#[derive(Debug, Clone)]
pub struct CardUpdate {
    /// Card being updated.
    pub id: CardId,
    /// Caller; the update only applies when this user owns the card.
    pub user_id: UserId,
    /// Overwriting text fields.
    pub fields: CardFields,
    /// Resolved avatar path.
    pub avatar: Option<String>,
    /// Resolved vCard path.
    pub vcf_path: Option<String>,
}
