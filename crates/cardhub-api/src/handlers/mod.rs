//! Route handlers organized by domain.

pub mod auth;
pub mod card;
pub mod health;
pub mod static_files;
