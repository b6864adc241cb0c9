//! Card repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use cardhub_core::error::{AppError, ErrorKind};
use cardhub_core::result::AppResult;
use cardhub_core::types::{CardId, UserId};
use cardhub_entity::card::{Card, CardUpdate, NewCard};

use crate::store::CardStore;

/// PostgreSQL-backed card store.
#[derive(Debug, Clone)]
pub struct CardRepository {
    pool: PgPool,
}

impl CardRepository {
    /// Create a new card repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardStore for CardRepository {
    async fn list_by_owner(&self, user_id: UserId) -> AppResult<Vec<Card>> {
        sqlx::query_as::<_, Card>("SELECT * FROM cards WHERE user_id = $1 ORDER BY created_at, id")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list cards", e))
    }

    async fn find_by_id(&self, id: CardId) -> AppResult<Option<Card>> {
        sqlx::query_as::<_, Card>("SELECT * FROM cards WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find card", e))
    }

    async fn find_owned(&self, id: CardId, user_id: UserId) -> AppResult<Option<Card>> {
        sqlx::query_as::<_, Card>("SELECT * FROM cards WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find owned card", e)
            })
    }

    async fn create(&self, data: &NewCard) -> AppResult<Card> {
        let fields = &data.fields;
        sqlx::query_as::<_, Card>(
            "INSERT INTO cards \
                (user_id, name, email, birthday, profession, avatar, vcf_path, line_link, fb_link) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(fields.birthday)
        .bind(&fields.profession)
        .bind(&data.avatar)
        .bind(&data.vcf_path)
        .bind(&fields.line_link)
        .bind(&fields.fb_link)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create card", e))
    }

    async fn update(&self, data: &CardUpdate) -> AppResult<Option<Card>> {
        let fields = &data.fields;
        sqlx::query_as::<_, Card>(
            "UPDATE cards SET name = $3, email = $4, birthday = $5, avatar = $6, \
                              profession = $7, fb_link = $8, line_link = $9, vcf_path = $10, \
                              updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING *",
        )
        .bind(data.id)
        .bind(data.user_id)
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(fields.birthday)
        .bind(&data.avatar)
        .bind(&fields.profession)
        .bind(&fields.fb_link)
        .bind(&fields.line_link)
        .bind(&data.vcf_path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update card", e))
    }

    async fn delete_owned(&self, id: CardId, user_id: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete card", e))?;

        Ok(result.rows_affected() > 0)
    }
}
