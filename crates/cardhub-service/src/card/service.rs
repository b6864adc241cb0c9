//! Card CRUD scoped to the owning user.

use std::sync::Arc;

use tracing::{debug, info};

use cardhub_core::error::{AppError, ErrorKind};
use cardhub_core::types::CardId;
use cardhub_database::CardStore;
use cardhub_entity::card::{Card, CardFields, CardUpdate, NewCard};
use cardhub_storage::{FileManager, StagedUploads, UploadedFile, validate_extension};

use crate::card::submission::CardSubmission;
use crate::context::RequestContext;

/// Manages cards and their uploaded files.
#[derive(Debug, Clone)]
pub struct CardService {
    /// Card store.
    cards: Arc<dyn CardStore>,
    /// Upload storage.
    files: Arc<FileManager>,
}

impl CardService {
    /// Creates a new card service.
    pub fn new(cards: Arc<dyn CardStore>, files: Arc<FileManager>) -> Self {
        Self { cards, files }
    }

    /// Every card owned by the caller.
    pub async fn list_for_owner(&self, ctx: &RequestContext) -> Result<Vec<Card>, AppError> {
        self.cards.list_by_owner(ctx.user_id).await
    }

    /// Any card by id. No ownership check.
    pub async fn get_public(&self, card_id: CardId) -> Result<Card, AppError> {
        self.cards
            .find_by_id(card_id)
            .await?
            .ok_or_else(|| AppError::not_found("Card not found"))
    }

    /// Creates a card owned by the caller.
    ///
    /// Both files are checked before anything is written. Saved files are
    /// removed again if a later step fails.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        submission: CardSubmission,
    ) -> Result<Card, AppError> {
        if let Some(avatar) = &submission.avatar {
            validate_extension(&avatar.filename)
                .map_err(|_| AppError::validation("Invalid image file"))?;
        }
        if let Some(vcf) = &submission.vcf {
            validate_extension(&vcf.filename)
                .map_err(|_| AppError::validation("Invalid vcf file"))?;
        }
        let fields = submission.fields()?;

        let mut staged = self.files.stage();
        match self.insert_with_files(&mut staged, ctx, fields, &submission).await {
            Ok(card) => {
                staged.commit();
                info!(user_id = %ctx.user_id, card_id = %card.id, "Card created");
                Ok(card)
            }
            Err(e) => {
                debug!(user_id = %ctx.user_id, files = staged.len(), "Rolling back card uploads");
                staged.rollback().await;
                Err(e)
            }
        }
    }

    async fn insert_with_files(
        &self,
        staged: &mut StagedUploads<'_>,
        ctx: &RequestContext,
        fields: CardFields,
        submission: &CardSubmission,
    ) -> Result<Card, AppError> {
        let avatar = match &submission.avatar {
            Some(file) => Some(staged.save_avatar(file).await.map_err(save_failed)?),
            None => None,
        };
        let vcf_path = match &submission.vcf {
            Some(file) => Some(staged.save_vcf(file, ctx.user_id).await.map_err(save_failed)?),
            None => None,
        };

        self.cards
            .create(&NewCard {
                user_id: ctx.user_id,
                fields,
                avatar,
                vcf_path,
            })
            .await
    }

    /// Overwrites an owned card.
    ///
    /// Text fields are replaced as submitted. The avatar and vCard are
    /// replaced only by a new upload with an allowed extension; otherwise
    /// the stored paths stay.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        card_id: CardId,
        submission: CardSubmission,
    ) -> Result<Card, AppError> {
        let existing = self
            .cards
            .find_owned(card_id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Card not found"))?;
        let fields = submission.fields()?;

        let avatar = match accepted(submission.avatar.as_ref()) {
            Some(file) => Some(self.files.save_avatar(file).await.map_err(save_failed)?.public_path),
            None => existing.avatar,
        };
        let vcf_path = match accepted(submission.vcf.as_ref()) {
            Some(file) => Some(
                self.files
                    .save_vcf(file, ctx.user_id)
                    .await
                    .map_err(save_failed)?
                    .public_path,
            ),
            None => existing.vcf_path,
        };

        let card = self
            .cards
            .update(&CardUpdate {
                id: card_id,
                user_id: ctx.user_id,
                fields,
                avatar,
                vcf_path,
            })
            .await?
            .ok_or_else(|| AppError::not_found("Card not found"))?;

        info!(user_id = %ctx.user_id, card_id = %card_id, "Card updated");
        Ok(card)
    }

    /// Deletes an owned card and its avatar file. The vCard export is
    /// kept. Deleting a missing or foreign card does nothing.
    pub async fn delete(&self, ctx: &RequestContext, card_id: CardId) -> Result<(), AppError> {
        let Some(card) = self.cards.find_owned(card_id, ctx.user_id).await? else {
            debug!(user_id = %ctx.user_id, card_id = %card_id, "Delete of missing or foreign card");
            return Ok(());
        };

        if let Some(avatar) = &card.avatar {
            self.files.remove_avatar(avatar).await;
        }
        self.cards.delete_owned(card_id, ctx.user_id).await?;

        info!(user_id = %ctx.user_id, card_id = %card_id, "Card deleted");
        Ok(())
    }
}

/// Uploads with a disallowed extension are ignored on update.
fn accepted(file: Option<&UploadedFile>) -> Option<&UploadedFile> {
    file.filter(|f| validate_extension(&f.filename).is_ok())
}

fn save_failed(e: AppError) -> AppError {
    if e.is(ErrorKind::Validation) {
        return e;
    }
    let message = format!("File save failed: {}", e.message);
    AppError::with_source(ErrorKind::Storage, message, e)
}
