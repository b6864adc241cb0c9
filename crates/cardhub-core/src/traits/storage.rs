//! Storage provider trait for the upload backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for file storage backends.
///
/// Paths are relative to the provider root and use `/` separators
/// (`avatars/me.png`). The only implementation today is the local
/// filesystem provider in `cardhub-storage`.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a file into memory. Missing files map to a not-found error.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Write bytes to a file, replacing any existing content.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Delete a file. Deleting a missing file succeeds.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Delete a file with blocking I/O. Only for `Drop` impls, which
    /// cannot await. Callers keep this to a handful of small files.
    fn delete_sync(&self, path: &str) -> AppResult<()>;

    /// Check whether a file exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Create a directory (and any missing parents).
    async fn create_dir(&self, path: &str) -> AppResult<()>;
}
