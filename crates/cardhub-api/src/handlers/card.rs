//! Card handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::response::{CardResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, CardForm, parse_card_id};
use crate::state::AppState;

/// GET /api/cards
pub async fn list_cards(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CardResponse>>> {
    let cards = state.card_service.list_for_owner(&auth).await?;
    Ok(Json(cards.into_iter().map(CardResponse::from).collect()))
}

/// POST /api/cards
pub async fn create_card(
    State(state): State<AppState>,
    auth: AuthUser,
    CardForm(form): CardForm,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    state.card_service.create(&auth, form).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new("Card created"))))
}

/// GET /api/cards/{id}
///
/// Public: no token required.
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CardResponse>> {
    let card_id = parse_card_id(&id)?;
    let card = state.card_service.get_public(card_id).await?;
    Ok(Json(card.into()))
}

/// PUT /api/cards/{id}
pub async fn update_card(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    CardForm(form): CardForm,
) -> ApiResult<Json<MessageResponse>> {
    let card_id = parse_card_id(&id)?;
    state.card_service.update(&auth, card_id, form).await?;
    Ok(Json(MessageResponse::new("Card updated")))
}

/// DELETE /api/cards/{id}
pub async fn delete_card(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let card_id = parse_card_id(&id)?;
    state.card_service.delete(&auth, card_id).await?;
    Ok(Json(MessageResponse::new("Card deleted")))
}
