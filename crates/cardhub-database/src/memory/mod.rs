//! Process-local store used for development runs and tests.

pub mod store;

pub use store::MemoryStore;
