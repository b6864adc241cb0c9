//! Scoped cleanup for uploads saved during a single request.

use tracing::warn;

use cardhub_core::result::AppResult;
use cardhub_core::types::UserId;

use crate::files::{FileManager, UploadedFile};

/// Tracks files saved while handling one request.
///
/// Finish with [`StagedUploads::commit`] or [`StagedUploads::rollback`].
/// A guard dropped without either (a cancelled request) still deletes what
/// it recorded, through the provider's blocking `delete_sync`.
#[derive(Debug)]
pub struct StagedUploads<'a> {
    files: &'a FileManager,
    written: Vec<String>,
}

impl<'a> StagedUploads<'a> {
    pub(crate) fn new(files: &'a FileManager) -> Self {
        Self {
            files,
            written: Vec::new(),
        }
    }

    /// Save an avatar and record it. Returns the public path.
    pub async fn save_avatar(&mut self, file: &UploadedFile) -> AppResult<String> {
        let saved = self.files.save_avatar(file).await?;
        self.written.push(saved.storage_path);
        Ok(saved.public_path)
    }

    /// Save a vCard for `owner` and record it. Returns the public path.
    pub async fn save_vcf(&mut self, file: &UploadedFile, owner: UserId) -> AppResult<String> {
        let saved = self.files.save_vcf(file, owner).await?;
        self.written.push(saved.storage_path);
        Ok(saved.public_path)
    }

    /// Number of files recorded so far.
    pub fn len(&self) -> usize {
        self.written.len()
    }

    /// Whether nothing has been saved yet.
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    /// Keep every recorded file.
    pub fn commit(mut self) {
        self.written.clear();
    }

    /// Delete every recorded file. Failures are logged, not returned.
    pub async fn rollback(mut self) {
        for path in std::mem::take(&mut self.written) {
            if let Err(e) = self.files.provider().delete(&path).await {
                warn!(path = %path, error = %e, "Failed to roll back staged upload");
            }
        }
    }
}

impl Drop for StagedUploads<'_> {
    fn drop(&mut self) {
        for path in self.written.drain(..) {
            if let Err(e) = self.files.provider().delete_sync(&path) {
                warn!(path = %path, error = %e, "Failed to roll back staged upload");
            }
        }
    }
}
