//! Owner-scoped card management.

pub mod service;
pub mod submission;

pub use service::CardService;
pub use submission::CardSubmission;
