//! # cardhub-api
//!
//! HTTP API layer for CardHub built on Axum.
//!
//! Provides the REST endpoints, the static upload routes, middleware
//! (CORS, request logging), extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
