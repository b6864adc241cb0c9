//! Typed path parameter helpers.

use cardhub_core::error::AppError;
use cardhub_core::types::CardId;

/// Parses a card id from a path segment.
pub fn parse_card_id(s: &str) -> Result<CardId, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid card id: {s}")))
}
