//! Shared value types used across CardHub crates.

pub mod id;

pub use id::{CardId, UserId};
