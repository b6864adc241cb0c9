//! Auth handlers: register and login.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use validator::Validate;

use cardhub_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, MessageResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()
        .map_err(|_| AppError::validation("Missing required fields"))?;

    state.auth_service.register(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registered successfully")),
    ))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;

    let result = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(LoginResponse {
        access_token: result.access_token,
        username: result.username,
    }))
}
