//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// Where uploaded avatars and vCard exports are kept on local disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory that holds both upload directories.
    #[serde(default = "default_root")]
    pub root: String,
    /// Avatar sub-directory under `root`, served at `/static/avatars`.
    #[serde(default = "default_avatar_dir")]
    pub avatar_dir: String,
    /// vCard sub-directory under `root`, served at `/static/vcf`.
    #[serde(default = "default_vcf_dir")]
    pub vcf_dir: String,
    /// Maximum request body size in bytes for multipart uploads (default 10 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            avatar_dir: default_avatar_dir(),
            vcf_dir: default_vcf_dir(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_root() -> String {
    "./static".to_string()
}

fn default_avatar_dir() -> String {
    "avatars".to_string()
}

fn default_vcf_dir() -> String {
    "vcf".to_string()
}

fn default_max_upload() -> u64 {
    10_485_760 // 10 MB
}
