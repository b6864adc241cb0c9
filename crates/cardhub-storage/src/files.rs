//! Avatar and vCard file layout on top of a [`StorageProvider`].

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, warn};

use cardhub_core::config::StorageConfig;
use cardhub_core::error::AppError;
use cardhub_core::result::AppResult;
use cardhub_core::traits::storage::StorageProvider;
use cardhub_core::types::UserId;
use cardhub_entity::card::{AVATAR_URL_PREFIX, VCF_URL_PREFIX};

use crate::providers::LocalStorageProvider;
use crate::providers::local::mime_from_path;
use crate::sanitize::sanitize_filename;
use crate::staged::StagedUploads;

/// A file part received from a client.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Filename as sent by the client (unsanitized).
    pub filename: String,
    /// File contents.
    pub data: Bytes,
}

/// Where a saved upload ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    /// Path clients use to fetch the file (`/static/avatars/me.png`).
    pub public_path: String,
    /// Path relative to the storage root (`avatars/me.png`).
    pub storage_path: String,
}

/// A stored file read back for serving.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Bare filename.
    pub filename: String,
    /// MIME type guessed from the extension.
    pub content_type: &'static str,
    /// File contents.
    pub data: Bytes,
}

/// Saves, removes, and reads back avatar and vCard uploads.
#[derive(Debug, Clone)]
pub struct FileManager {
    provider: Arc<dyn StorageProvider>,
    avatar_dir: String,
    vcf_dir: String,
}

impl FileManager {
    /// Open the local storage root and create both upload directories.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let provider = LocalStorageProvider::new(&config.root).await?;
        Self::with_provider(Arc::new(provider), config).await
    }

    /// Use an existing provider with the directory layout from `config`.
    pub async fn with_provider(
        provider: Arc<dyn StorageProvider>,
        config: &StorageConfig,
    ) -> AppResult<Self> {
        let avatar_dir = config.avatar_dir.trim_matches('/').to_string();
        let vcf_dir = config.vcf_dir.trim_matches('/').to_string();
        provider.create_dir(&avatar_dir).await?;
        provider.create_dir(&vcf_dir).await?;

        info!(
            provider = provider.provider_type(),
            avatar_dir = %avatar_dir,
            vcf_dir = %vcf_dir,
            "Upload storage ready"
        );
        Ok(Self {
            provider,
            avatar_dir,
            vcf_dir,
        })
    }

    /// Start a group of uploads that is rolled back unless committed.
    pub fn stage(&self) -> StagedUploads<'_> {
        StagedUploads::new(self)
    }

    pub(crate) fn provider(&self) -> &dyn StorageProvider {
        self.provider.as_ref()
    }

    /// Save an avatar under its sanitized original name, replacing any
    /// file of the same name.
    pub async fn save_avatar(&self, file: &UploadedFile) -> AppResult<SavedFile> {
        let name = sanitize_filename(&file.filename)
            .ok_or_else(|| AppError::validation(format!("Invalid file name: {}", file.filename)))?;

        let storage_path = format!("{}/{}", self.avatar_dir, name);
        self.provider.write(&storage_path, file.data.clone()).await?;

        debug!(path = %storage_path, "Saved avatar");
        Ok(SavedFile {
            public_path: format!("{AVATAR_URL_PREFIX}{name}"),
            storage_path,
        })
    }

    /// Save a vCard as `<owner>.vcf`, replacing the owner's previous export.
    pub async fn save_vcf(&self, file: &UploadedFile, owner: UserId) -> AppResult<SavedFile> {
        let name = format!("{owner}.vcf");
        let storage_path = format!("{}/{}", self.vcf_dir, name);
        self.provider.write(&storage_path, file.data.clone()).await?;

        debug!(path = %storage_path, user_id = %owner, "Saved vCard");
        Ok(SavedFile {
            public_path: format!("{VCF_URL_PREFIX}{name}"),
            storage_path,
        })
    }

    /// Remove the avatar behind a public path. Paths outside the avatar
    /// prefix are left alone. Failures are logged, never returned.
    pub async fn remove_avatar(&self, public_path: &str) {
        let Some(name) = public_path.strip_prefix(AVATAR_URL_PREFIX) else {
            return;
        };
        if sanitize_filename(name).as_deref() != Some(name) {
            warn!(path = public_path, "Refusing to remove avatar with unsafe name");
            return;
        }

        let storage_path = format!("{}/{}", self.avatar_dir, name);
        if let Err(e) = self.provider.delete(&storage_path).await {
            warn!(path = %storage_path, error = %e, "Failed to remove avatar");
        }
    }

    /// Read an avatar by bare filename.
    pub async fn open_avatar(&self, name: &str) -> AppResult<StoredFile> {
        self.open(&self.avatar_dir, name).await
    }

    /// Read a vCard export by bare filename.
    pub async fn open_vcf(&self, name: &str) -> AppResult<StoredFile> {
        self.open(&self.vcf_dir, name).await
    }

    async fn open(&self, dir: &str, name: &str) -> AppResult<StoredFile> {
        // Only names we could have written are served.
        if sanitize_filename(name).as_deref() != Some(name) {
            return Err(AppError::not_found(format!("File not found: {name}")));
        }

        let data = self.provider.read_bytes(&format!("{dir}/{name}")).await?;
        Ok(StoredFile {
            filename: name.to_string(),
            content_type: mime_from_path(name),
            data,
        })
    }

    /// Check that the storage root is usable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }
}
