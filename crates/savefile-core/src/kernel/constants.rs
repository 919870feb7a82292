use std::path::PathBuf;

/// Application name
pub const APP_NAME: &str = "savefile";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the default save directory
pub const DIR_ENV_VAR: &str = "SAVEFILE_DIR";

/// Default save directory, relative to the user's home directory
pub const DEFAULT_DIR_RELATIVE: &str = ".cache/.local/.trash";

/// Extension appended to a saved file when it is compressed
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Default save directory: `$HOME/.cache/.local/.trash`, or the same path
/// under the system temp dir when no home directory is set.
pub fn default_dir() -> PathBuf {
    let home = std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    home.join(DEFAULT_DIR_RELATIVE)
}

/// Usage text listing the call shape and the extensions each kind accepts.
pub const USAGE: &str = "\
Usage:
------
save(value, name, base_dir = <default dir>, compress = false)

The extension of `name` must match the kind of `value`. When it is left
out, the kind's default (first listed) extension is used:
  - Table         -> .csv, .pkl, .pickle
  - NumericArray  -> .npy
  - JSONValue     -> .json   (arrays and objects only)
  - Text          -> .txt
  - BinaryBlob    -> .pkl, .pickle
  - Figure        -> .png, .jpg, .jpeg, .pdf, .svg, .tif, .tiff

With compress = true the file is wrapped into `<name>.<ext>.zip` and the
uncompressed file is removed.

Additional operations:
----------------------
  - list_entries(base_dir = <default dir>): names of the files in the directory.
  - delete_entry(name, base_dir = <default dir>): deletes a file in the directory.
";
