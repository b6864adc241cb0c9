//! # cardhub-service
//!
//! Business logic service layer for CardHub. Services orchestrate the
//! stores, the file manager, and the auth primitives.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod card;
pub mod context;

pub use auth::{AuthService, LoginResult, Registration};
pub use card::{CardService, CardSubmission};
pub use context::RequestContext;
