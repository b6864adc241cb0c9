//! Custom Axum extractors.

pub mod auth;
pub mod card_form;
pub mod path;

pub use auth::AuthUser;
pub use card_form::CardForm;
pub use path::parse_card_id;
