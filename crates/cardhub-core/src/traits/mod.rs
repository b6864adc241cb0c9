//! Core traits defined in `cardhub-core` and implemented by other crates.

pub mod storage;

pub use storage::StorageProvider;
