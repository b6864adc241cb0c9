//! Route definitions for the CardHub HTTP API.
//!
//! JSON routes are mounted under `/api`; uploaded files are served under
//! `/static`. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route and the upload size limit.
pub fn build_router(state: AppState) -> Router {
    let max_upload = usize::try_from(state.config.storage.max_upload_size_bytes).unwrap_or(usize::MAX);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(card_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(static_routes())
        .layer(DefaultBodyLimit::max(max_upload))
        .with_state(state)
}

/// Registration and login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

/// Card CRUD; `GET /cards/{id}` is public
fn card_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cards",
            get(handlers::card::list_cards).post(handlers::card::create_card),
        )
        .route(
            "/cards/{id}",
            get(handlers::card::get_card)
                .put(handlers::card::update_card)
                .delete(handlers::card::delete_card),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Uploaded avatars and vCard exports
fn static_routes() -> Router<AppState> {
    Router::new()
        .route("/static/avatars/{filename}", get(handlers::static_files::serve_avatar))
        .route("/static/vcf/{filename}", get(handlers::static_files::serve_vcf))
}
