//! Multipart card form extractor.

use axum::extract::{FromRequest, Multipart, Request};
use axum::extract::multipart::{Field, MultipartError};
use axum::http::StatusCode;

use cardhub_core::error::AppError;
use cardhub_service::CardSubmission;
use cardhub_storage::UploadedFile;

use crate::error::ApiError;

/// Text fields and file parts of a card create/update form.
///
/// File parts sent without a filename are treated as absent, which is how
/// browsers submit an empty file input.
#[derive(Debug, Clone, Default)]
pub struct CardForm(pub CardSubmission);

impl<S> FromRequest<S> for CardForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid multipart body: {}", e.body_text())))?;

        let mut form = CardSubmission::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(multipart_error)?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "name" => form.name = Some(read_text(field).await?),
                "email" => form.email = Some(read_text(field).await?),
                "birthday" => form.birthday = Some(read_text(field).await?),
                "profession" => form.profession = Some(read_text(field).await?),
                "fb_link" => form.fb_link = Some(read_text(field).await?),
                "line_link" => form.line_link = Some(read_text(field).await?),
                "avatar" => form.avatar = read_file(field).await?,
                "cardVcf" => form.vcf = read_file(field).await?,
                _ => {}
            }
        }

        Ok(CardForm(form))
    }
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(multipart_error)
}

async fn read_file(field: Field<'_>) -> Result<Option<UploadedFile>, AppError> {
    let Some(filename) = field.file_name().filter(|n| !n.is_empty()).map(String::from) else {
        return Ok(None);
    };
    let data = field.bytes().await.map_err(multipart_error)?;

    Ok(Some(UploadedFile { filename, data }))
}

/// Maps a multipart read failure. Hitting the body limit is a 413.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(format!("Upload too large: {}", err.body_text()))
    } else {
        AppError::validation(format!("Multipart error: {}", err.body_text()))
    }
}
