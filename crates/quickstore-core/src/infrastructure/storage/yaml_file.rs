//! YAML file persistence for the root mapping.
//!
//! The document's top level IS the root mapping, with no envelope or version
//! field:
//!
//! ```yaml
//! juice: orange juice
//! pastries:
//!   muffins:
//!     sweet: blueberry muffin
//! ```
//!
//! Opening the storage creates missing parent directories and an empty
//! document.  Every save writes a sibling temporary file and renames it over
//! the target, so a crash mid-write leaves the previous document intact.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::{info, trace};
use uuid::Uuid;

use super::{DocumentStorage, Root};
use crate::error::StoreError;

/// Content written when the store file is first created.
const EMPTY_DOCUMENT: &str = "{}\n";

/// [`DocumentStorage`] backed by a single YAML file.
#[derive(Debug, Clone)]
pub struct YamlFileStorage {
    path: PathBuf,
}

impl YamlFileStorage {
    /// Prepares `path` for use as a store document.
    ///
    /// Creates the parent directory tree if it does not exist and writes an
    /// empty document if the file does not exist.  An existing file is left
    /// untouched, but must load: the storage is only returned once its
    /// document reads back as a root mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or file cannot be created
    /// or read (for example when `path` is a directory), and
    /// [`StoreError::RootNotMapping`] or [`StoreError::Yaml`] if an existing
    /// document is not a usable root mapping.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.is_dir() {
                fs::create_dir_all(dir).map_err(|source| StoreError::io(dir, source))?;
                info!("created store directory {}", dir.display());
            }
        }

        match fs::OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(EMPTY_DOCUMENT.as_bytes())
                    .map_err(|source| StoreError::io(&path, source))?;
                info!("created empty store file {}", path.display());
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(source) => return Err(StoreError::io(&path, source)),
        }

        let storage = Self { path };
        storage.load()?;
        Ok(storage)
    }

    /// Path of the temporary file used for the next atomic write.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "store".to_string());
        self.path
            .with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4().simple()))
    }
}

/// Interprets the text of a store document as a root mapping.
///
/// An empty document and an explicit `~` both mean "no keys yet".
fn parse_root(content: &str, path: &Path) -> Result<Root, StoreError> {
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(content)? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(root) => Ok(root),
        _ => Err(StoreError::RootNotMapping {
            path: path.to_path_buf(),
        }),
    }
}

impl DocumentStorage for YamlFileStorage {
    fn load(&self) -> Result<Root, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => parse_root(&content, &self.path),
            // Removed behind our back: behave like a freshly created store.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Mapping::new()),
            Err(source) => Err(StoreError::io(&self.path, source)),
        }
    }

    fn save(&self, root: &Root) -> Result<(), StoreError> {
        let content = serde_yaml::to_string(root)?;
        let temp = self.temp_path();

        if let Err(source) = fs::write(&temp, content.as_bytes()) {
            fs::remove_file(&temp).ok();
            return Err(StoreError::io(&temp, source));
        }
        if let Err(source) = fs::rename(&temp, &self.path) {
            fs::remove_file(&temp).ok();
            return Err(StoreError::io(&self.path, source));
        }

        trace!(
            "wrote {} bytes ({} keys) to {}",
            content.len(),
            root.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
