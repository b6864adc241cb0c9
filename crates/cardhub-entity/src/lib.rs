//! # cardhub-entity
//!
//! Domain entity models for CardHub. Every struct in this crate
//! represents a database table row or the payload used to write one.
//! Row types additionally derive `sqlx::FromRow`.

pub mod card;
pub mod user;
