//! Persist in-memory values (tables, numeric arrays, JSON, text, binary
//! blobs, figures) to files in a directory, optionally zipped, and list or
//! delete what is there.
//!
//! ```no_run
//! use savefile_core::{save, list_entries, Table};
//!
//! let table = Table::new().with_column("A", [1, 2])?.with_column("B", [3, 4])?;
//! let path = save(table, "frame.csv", "/tmp/saved", false)?;
//! assert!(list_entries("/tmp/saved")?.contains(&"frame.csv".to_string()));
//! # let _ = path;
//! # Ok::<(), savefile_core::Error>(())
//! ```
pub mod codec;
pub mod kernel;
pub mod storage;
pub mod value;

// Re-export key public types for the binary and library users
pub use kernel::error::{Error, Result};
pub use storage::loader::{
    load_array, load_blob, load_json, load_table_csv, load_table_pickle, load_text, read_archive_entry,
};
pub use storage::{
    DeleteOutcome, SaveManager, StorageProvider, StorageSystemError, StoreConfig, delete_entry, list_entries, save,
};
pub use value::{Cell, Figure, Kind, Rgb, StorableValue, Table};

/// Help text listing the call shape and the extensions accepted per kind.
pub fn usage() -> &'static str {
    kernel::constants::USAGE
}
