//! Uploaded file downloads.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use cardhub_core::error::AppError;
use cardhub_storage::StoredFile;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /static/avatars/{filename}
pub async fn serve_avatar(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<Response> {
    let file = state.files.open_avatar(&filename).await?;
    file_response(file, false).map_err(Into::into)
}

/// GET /static/vcf/{filename}
///
/// Always sent as a `text/vcard` attachment.
pub async fn serve_vcf(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<Response> {
    let file = state.files.open_vcf(&filename).await?;
    file_response(file, true).map_err(Into::into)
}

fn file_response(file: StoredFile, attachment: bool) -> Result<Response, AppError> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, file.content_type)
        .header(header::CONTENT_LENGTH, file.data.len());

    if attachment {
        builder = builder.header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.filename),
        );
    }

    builder
        .body(Body::from(file.data))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))
}
