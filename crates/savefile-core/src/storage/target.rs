use std::path::PathBuf;

use crate::storage::error::StorageSystemError;
use crate::value::Kind;

/// Requested base name and optional extension for a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDescriptor {
    base_name: String,
    /// Lower-cased, trimmed, with leading dot
    extension: Option<String>,
}

impl TargetDescriptor {
    /// Split `name` at its last dot. Leading dots belong to the base name, so
    /// `.profile` has no extension. Names that are empty or that would escape
    /// the target directory are rejected.
    pub fn parse(name: &str) -> Result<Self, StorageSystemError> {
        if name.trim().is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(StorageSystemError::InvalidPath {
                path: PathBuf::from(name),
                reason: "expected a plain file name".to_string(),
            });
        }

        let stem_start = name.len() - name.trim_start_matches('.').len();
        let (base_name, extension) = match name[stem_start..].rfind('.') {
            Some(dot) => {
                let dot = stem_start + dot;
                let extension = name[dot..].trim().to_lowercase();
                (&name[..dot], Some(extension))
            }
            None => (name, None),
        };

        Ok(Self {
            base_name: base_name.to_string(),
            extension,
        })
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// The extension to save `kind` under: the kind's default when none was
    /// requested, otherwise the requested one if the kind accepts it.
    pub fn resolve_extension(&self, kind: Kind) -> Result<&str, StorageSystemError> {
        match self.extension.as_deref() {
            None => Ok(kind.default_extension()),
            Some(ext) if kind.accepts(ext) => Ok(ext),
            Some(ext) => Err(StorageSystemError::IncompatibleFormat {
                kind,
                extension: ext.to_string(),
                allowed: kind.accepted_extensions(),
            }),
        }
    }

    /// `base_name` followed by `extension`
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{}", self.base_name, extension)
    }
}
