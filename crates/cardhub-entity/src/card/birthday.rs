//! Birthday normalization.

use chrono::NaiveDate;

use cardhub_core::error::AppError;

/// Number of leading characters that make up an ISO `YYYY-MM-DD` date.
const DATE_PREFIX_LEN: usize = 10;

/// Normalizes a submitted birthday to a calendar date.
///
/// Clients send either a bare date or a full timestamp
/// (`1990-05-17T00:00:00`); only the 10-character date prefix is kept.
/// A missing or blank value means "no birthday".
pub fn normalize_birthday(raw: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let prefix: String = raw.chars().take(DATE_PREFIX_LEN).collect();
    NaiveDate::parse_from_str(&prefix, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AppError::validation(format!("Invalid birthday: {raw}")))
}
