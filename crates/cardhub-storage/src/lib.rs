//! # cardhub-storage
//!
//! Upload storage for CardHub: the local filesystem provider, the
//! [`FileManager`] that knows the avatar and vCard layouts, filename
//! sanitizing, and the [`StagedUploads`] guard that removes partially
//! saved files when a request fails.

pub mod files;
pub mod providers;
pub mod sanitize;
pub mod staged;

pub use files::{FileManager, SavedFile, StoredFile, UploadedFile};
pub use sanitize::{ALLOWED_EXTENSIONS, sanitize_filename, validate_extension};
pub use staged::StagedUploads;
