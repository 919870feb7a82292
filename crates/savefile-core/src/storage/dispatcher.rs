//! # Persistence Dispatcher
//!
//! Saving runs in a fixed order: ensure the base directory exists, split the
//! target name, classify the value, check the extension against the kind,
//! encode, write, and optionally wrap the file into a zip archive. Listing
//! and deleting are independent single-pass operations on one directory.
//!
//! The functions here take the directory and the [`StorageProvider`]
//! explicitly; [`SaveManager`](crate::storage::SaveManager) supplies the
//! configured defaults.
use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::codec;
use crate::kernel::constants::ARCHIVE_EXTENSION;
use crate::kernel::error::Result;
use crate::storage::local::LocalStorageProvider;
use crate::storage::provider::StorageProvider;
use crate::storage::target::TargetDescriptor;
use crate::value::StorableValue;

/// Result of [`delete_entry`]. A missing file is an expected outcome, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { name: String, base_dir: PathBuf },
    NotFound { name: String, base_dir: PathBuf },
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::Deleted { name, base_dir } => {
                write!(f, "File '{}' has been deleted from '{}'.", name, base_dir.display())
            }
            DeleteOutcome::NotFound { name, base_dir } => {
                write!(f, "File '{}' does not exist in '{}'.", name, base_dir.display())
            }
        }
    }
}

/// Save `value` as `base_dir/name` on the local filesystem and return the
/// final path (the archive path when `compress` is set).
pub fn save(value: impl Into<StorableValue>, name: &str, base_dir: impl AsRef<Path>, compress: bool) -> Result<PathBuf> {
    save_with(&LocalStorageProvider::default(), value.into(), name, base_dir.as_ref(), compress)
}

/// Names of the regular files directly under `base_dir`. Files whose names
/// are not valid UTF-8 are skipped.
pub fn list_entries(base_dir: impl AsRef<Path>) -> Result<Vec<String>> {
    list_entries_with(&LocalStorageProvider::default(), base_dir.as_ref())
}

/// Remove `base_dir/name` if it is a regular file.
pub fn delete_entry(name: &str, base_dir: impl AsRef<Path>) -> Result<DeleteOutcome> {
    delete_entry_with(&LocalStorageProvider::default(), name, base_dir.as_ref())
}

/// [`save`] through an arbitrary provider.
pub fn save_with(
    provider: &dyn StorageProvider,
    value: StorableValue,
    name: &str,
    base_dir: &Path,
    compress: bool,
) -> Result<PathBuf> {
    if !provider.is_dir(base_dir) {
        debug!("Creating save directory {}", base_dir.display());
        provider.create_dir_all(base_dir)?;
    }

    let target = TargetDescriptor::parse(name)?;
    let kind = value.classify()?;
    let extension = target.resolve_extension(kind)?.to_string();
    debug!("Saving {} '{}' as '{}'", kind, target.base_name(), extension);

    let file_name = target.file_name(&extension);
    let path = base_dir.join(&file_name);
    let contents = codec::encode(value, &extension)?;
    provider.write_bytes(&path, &contents)?;

    if !compress {
        info!("File successfully saved at: {}", path.display());
        return Ok(path);
    }

    let archive_path = base_dir.join(format!("{}.{}", file_name, ARCHIVE_EXTENSION));
    let archive = codec::archive::wrap_single(&archive_path, &file_name, &contents)?;
    provider.write_bytes(&archive_path, &archive)?;
    provider.remove_file(&path)?;

    info!("File successfully zipped at: {}", archive_path.display());
    Ok(archive_path)
}

/// [`list_entries`] through an arbitrary provider.
pub fn list_entries_with(provider: &dyn StorageProvider, base_dir: &Path) -> Result<Vec<String>> {
    if !provider.exists(base_dir) {
        info!("Directory '{}' does not exist.", base_dir.display());
        return Ok(Vec::new());
    }

    // Names that are not valid UTF-8 could not be handed back to
    // `delete_entry`, so they are left out.
    let names = provider
        .read_dir(base_dir)?
        .into_iter()
        .filter(|path| provider.is_file(path))
        .filter_map(|path| match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => Some(name.to_string()),
            None => {
                warn!("Skipping file with a non UTF-8 name: {}", path.display());
                None
            }
        })
        .collect();

    Ok(names)
}

/// [`delete_entry`] through an arbitrary provider.
pub fn delete_entry_with(provider: &dyn StorageProvider, name: &str, base_dir: &Path) -> Result<DeleteOutcome> {
    let path = base_dir.join(name);

    if provider.is_file(&path) {
        provider.remove_file(&path)?;
        debug!("Deleted {}", path.display());
        Ok(DeleteOutcome::Deleted {
            name: name.to_string(),
            base_dir: base_dir.to_path_buf(),
        })
    } else {
        Ok(DeleteOutcome::NotFound {
            name: name.to_string(),
            base_dir: base_dir.to_path_buf(),
        })
    }
}
