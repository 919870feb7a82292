//! # Savefile Storage
//!
//! Filesystem side of the crate: the [`StorageProvider`] abstraction and its
//! local implementation, the persistence dispatcher (`save`, `list_entries`,
//! `delete_entry`), configuration, the long-lived [`SaveManager`] and the
//! read-back helpers in [`loader`].
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod loader;
pub mod local;
pub mod manager;
pub mod provider;
pub mod target;

/// Re-export key types
pub use config::{ConfigFormat, StoreConfig};
pub use dispatcher::{DeleteOutcome, delete_entry, list_entries, save};
pub use error::StorageSystemError;
pub use local::LocalStorageProvider;
pub use manager::SaveManager;
pub use provider::StorageProvider;
pub use target::TargetDescriptor;

// Test module declaration
#[cfg(test)]
mod tests;
