//! Single-entry zip archives.
//!
//! Every failure is reported as `ArchiveError` against `archive_path`, which
//! is only used for the message.
use std::fmt::Display;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::kernel::error::Result;
use crate::storage::error::StorageSystemError;

fn archive_error(archive_path: &Path, action: &str, e: impl Display) -> StorageSystemError {
    StorageSystemError::ArchiveError {
        path: archive_path.to_path_buf(),
        reason: format!("{}: {}", action, e),
    }
}

/// Build a zip archive holding `contents` as one deflated entry.
pub fn wrap_single(archive_path: &Path, entry_name: &str, contents: &[u8]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(entry_name, options)
        .map_err(|e| archive_error(archive_path, "start entry", e))?;
    zip.write_all(contents)
        .map_err(|e| archive_error(archive_path, "write entry", e))?;
    let cursor = zip
        .finish()
        .map_err(|e| archive_error(archive_path, "finish archive", e))?;

    Ok(cursor.into_inner())
}

fn open<'a>(archive_path: &Path, archive: &'a [u8]) -> Result<ZipArchive<Cursor<&'a [u8]>>> {
    ZipArchive::new(Cursor::new(archive))
        .map_err(|e| archive_error(archive_path, "open archive", e).into())
}

/// Names of every entry in the archive, in archive order.
pub fn entry_names(archive_path: &Path, archive: &[u8]) -> Result<Vec<String>> {
    let zip = open(archive_path, archive)?;
    Ok(zip.file_names().map(String::from).collect())
}

/// Read the first entry of the archive. Returns `None` for an empty archive.
pub fn read_first(archive_path: &Path, archive: &[u8]) -> Result<Option<(String, Vec<u8>)>> {
    let mut zip = open(archive_path, archive)?;
    if zip.len() == 0 {
        return Ok(None);
    }

    let mut entry = zip
        .by_index(0)
        .map_err(|e| archive_error(archive_path, "read entry", e))?;
    let name = entry.name().to_string();
    let mut contents = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut contents)
        .map_err(|e| archive_error(archive_path, "read entry", e))?;

    Ok(Some((name, contents)))
}
