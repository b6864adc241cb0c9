//! Convenience result type alias for CardHub.

use crate::error::AppError;

/// A specialized `Result` type for CardHub operations.
pub type AppResult<T> = Result<T, AppError>;
