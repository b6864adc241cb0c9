//! Store traits implemented by the PostgreSQL repositories and the
//! in-memory store.

use async_trait::async_trait;

use cardhub_core::result::AppResult;
use cardhub_core::types::{CardId, UserId};
use cardhub_entity::card::{Card, CardUpdate, NewCard};
use cardhub_entity::user::{CreateUser, User};

/// Unique constraint on `users.username`.
pub const USERNAME_CONSTRAINT: &str = "users_username_key";

/// Unique constraint on `users.email`.
pub const EMAIL_CONSTRAINT: &str = "users_email_key";

/// Persists login credentials.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a new user.
    ///
    /// Uniqueness violations surface as conflict errors whose message
    /// names the field that collided.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;
}

/// Persists contact cards.
#[async_trait]
pub trait CardStore: Send + Sync + std::fmt::Debug + 'static {
    /// All cards owned by a user, in store order.
    async fn list_by_owner(&self, user_id: UserId) -> AppResult<Vec<Card>>;

    /// Find a card by id regardless of owner.
    async fn find_by_id(&self, id: CardId) -> AppResult<Option<Card>>;

    /// Find a card by id only if `user_id` owns it.
    async fn find_owned(&self, id: CardId, user_id: UserId) -> AppResult<Option<Card>>;

    /// Insert a new card.
    async fn create(&self, data: &NewCard) -> AppResult<Card>;

    /// Overwrite an owned card. Returns `None` when no card with that id
    /// is owned by `data.user_id`.
    async fn update(&self, data: &CardUpdate) -> AppResult<Option<Card>>;

    /// Delete an owned card. Returns `true` if a row was removed.
    async fn delete_owned(&self, id: CardId, user_id: UserId) -> AppResult<bool>;
}
