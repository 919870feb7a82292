use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::kernel::error::Result;

/// Filesystem operations the dispatcher needs.
///
/// Implementations resolve the paths they are given themselves, so the same
/// dispatcher code can run against the real filesystem or a rooted view of it.
pub trait StorageProvider: Send + Sync + Debug {
    /// Short name shown in debug output
    fn name(&self) -> &str;

    fn exists(&self, path: &Path) -> bool;

    /// True only for regular files
    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents. Fails with
    /// `StorageSystemError::DirectoryCreationFailure`.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    fn read_to_string(&self, path: &Path) -> Result<String>;

    fn read_to_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the file at `path` with `contents` in one step; readers never
    /// see a partially written file.
    fn write_bytes(&self, path: &Path, contents: &[u8]) -> Result<()>;

    fn remove_file(&self, path: &Path) -> Result<()>;

    /// Entries directly under `path`, in enumeration order.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;
}
