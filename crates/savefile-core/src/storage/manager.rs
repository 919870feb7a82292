use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use crate::kernel::error::Result;
use crate::storage::config::StoreConfig;
use crate::storage::dispatcher::{self, DeleteOutcome};
use crate::storage::local::LocalStorageProvider;
use crate::storage::provider::StorageProvider;
use crate::value::StorableValue;

/// Long-lived context for saving into a configured default directory.
///
/// Created once at startup; creating it creates the default directory.
#[derive(Clone)]
pub struct SaveManager {
    provider: Arc<dyn StorageProvider>,
    config: StoreConfig,
}

impl SaveManager {
    /// Create a manager over the local filesystem
    pub fn new(config: StoreConfig) -> Result<Self> {
        Self::with_provider(Arc::new(LocalStorageProvider::default()), config)
    }

    /// Create a manager with a custom provider
    pub fn with_provider(provider: Arc<dyn StorageProvider>, config: StoreConfig) -> Result<Self> {
        let manager = Self { provider, config };
        manager.ensure_directories()?;
        Ok(manager)
    }

    /// Get the underlying provider
    pub fn provider(&self) -> &Arc<dyn StorageProvider> {
        &self.provider
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get the default save directory
    pub fn base_dir(&self) -> &Path {
        &self.config.base_dir
    }

    /// Ensure the default save directory exists
    pub fn ensure_directories(&self) -> Result<()> {
        if !self.provider.is_dir(&self.config.base_dir) {
            debug!("Creating default save directory {}", self.config.base_dir.display());
            self.provider.create_dir_all(&self.config.base_dir)?;
        }
        Ok(())
    }

    /// Save into the default directory, compressing if the config says so.
    pub fn save(&self, value: impl Into<StorableValue>, name: &str) -> Result<PathBuf> {
        self.save_in(value, name, &self.config.base_dir, self.config.compress)
    }

    /// Save into the default directory with an explicit compress flag.
    pub fn save_with_compression(&self, value: impl Into<StorableValue>, name: &str, compress: bool) -> Result<PathBuf> {
        self.save_in(value, name, &self.config.base_dir, compress)
    }

    pub fn save_in(
        &self,
        value: impl Into<StorableValue>,
        name: &str,
        base_dir: &Path,
        compress: bool,
    ) -> Result<PathBuf> {
        dispatcher::save_with(self.provider.as_ref(), value.into(), name, base_dir, compress)
    }

    /// List files in the default directory
    pub fn list_entries(&self) -> Result<Vec<String>> {
        self.list_entries_in(&self.config.base_dir)
    }

    pub fn list_entries_in(&self, base_dir: &Path) -> Result<Vec<String>> {
        dispatcher::list_entries_with(self.provider.as_ref(), base_dir)
    }

    /// Delete a file from the default directory
    pub fn delete_entry(&self, name: &str) -> Result<DeleteOutcome> {
        self.delete_entry_in(name, &self.config.base_dir)
    }

    pub fn delete_entry_in(&self, name: &str, base_dir: &Path) -> Result<DeleteOutcome> {
        dispatcher::delete_entry_with(self.provider.as_ref(), name, base_dir)
    }
}

impl Debug for SaveManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveManager")
            .field("provider", &self.provider.name()) // Show provider name
            .field("config", &self.config)
            .finish()
    }
}
