//! Store configuration.
//!
//! [`StoreConfig`] names the backing file and the character that separates
//! key segments.  It can be built in code:
//!
//! ```rust
//! use quickstore_core::StoreConfig;
//!
//! let cfg = StoreConfig::new("path/to/store.yml").with_key_separator('|');
//! assert_eq!(cfg.key_separator, '|');
//! ```
//!
//! or loaded from a TOML file:
//!
//! ```toml
//! file_path = "path/to/store.yml"
//! key_separator = "."   # optional, defaults to "/"
//! ```
//!
//! A configuration without `file_path` is accepted here but refused by
//! [`NestedStore::open`](crate::NestedStore::open): the store cannot exist
//! without a file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator used when none is configured.
pub const DEFAULT_KEY_SEPARATOR: char = '/';

/// Error type for configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No backing file path was configured.
    #[error("Please configure a file_path for your QuickStore!")]
    FilePathNotConfigured,

    /// A file system I/O error occurred while reading the config file.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for a [`NestedStore`](crate::NestedStore).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Location of the YAML document holding the root mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
    /// Character splitting a raw key into segments.
    #[serde(default = "default_key_separator")]
    pub key_separator: char,
}

fn default_key_separator() -> char {
    DEFAULT_KEY_SEPARATOR
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file_path: None,
            key_separator: default_key_separator(),
        }
    }
}

impl StoreConfig {
    /// Creates a configuration for `file_path` with the default separator.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Some(file_path.into()),
            ..Self::default()
        }
    }

    /// Replaces the backing file path.
    pub fn with_file_path(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Replaces the key separator.
    pub fn with_key_separator(mut self, separator: char) -> Self {
        self.key_separator = separator;
        self
    }

    /// Returns the configured file path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FilePathNotConfigured`] when no path is set.
    pub fn require_file_path(&self) -> Result<&Path, ConfigError> {
        self.file_path
            .as_deref()
            .ok_or(ConfigError::FilePathNotConfigured)
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the TOML is malformed or a field has
    /// the wrong type (e.g. a multi-character `key_separator`).
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its content is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
