//! Upload filename checks.

use cardhub_core::error::AppError;

/// Extensions accepted for avatar and vCard uploads (compared lowercase).
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "vcf"];

/// Reject filenames whose extension is not in [`ALLOWED_EXTENSIONS`].
pub fn validate_extension(filename: &str) -> Result<(), AppError> {
    let allowed = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));

    if allowed {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Invalid file type: {filename}"
        )))
    }
}

/// Reduce a client-supplied filename to a safe single path segment.
///
/// Path components are dropped, whitespace becomes `_`, anything other
/// than ASCII alphanumerics and `._-` is removed, and leading/trailing
/// `.`/`_` are stripped. Returns `None` when nothing usable is left.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
