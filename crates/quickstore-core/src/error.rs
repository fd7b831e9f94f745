//! Store-level error type.
//!
//! Looking up a key that holds no value is **not** an error: `get` returns
//! `Ok(None)`.  Everything below is an actual failure surfaced to the caller
//! of the operation that triggered it; nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::key_path::KeyPathError;

/// Errors returned by [`NestedStore`](crate::NestedStore) and its accessors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be configured (e.g. no file path).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The raw key could not be split into a key path.
    #[error("invalid key: {0}")]
    KeyPath(#[from] KeyPathError),

    /// A property-style accessor used a name reserved by the store itself.
    #[error(
        "There is a \"{key}\" method already defined. This will lead to problems \
         while getting values from the store. Please use another key than {reserved:?}."
    )]
    NotAllowedKey {
        key: String,
        reserved: Vec<&'static str>,
    },

    /// A dispatched method name did not match any accessor shape.
    #[error("undefined accessor `{method}` with {arity} argument(s)")]
    UnknownAccessor { method: String, arity: usize },

    /// A file system I/O error occurred while touching the backing file.
    #[error("I/O error accessing store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing document could not be parsed or serialized as YAML.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The backing document exists but its top level is not a mapping.
    #[error("store document at {path} does not hold a mapping at the top level")]
    RootNotMapping { path: PathBuf },
}

impl StoreError {
    /// Wraps an I/O error together with the path that caused it.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_displayed_unchanged() {
        let err = StoreError::from(ConfigError::FilePathNotConfigured);
        assert_eq!(
            err.to_string(),
            "Please configure a file_path for your QuickStore!"
        );
    }

    #[test]
    fn test_not_allowed_key_message_names_key_and_reserved_names() {
        let err = StoreError::NotAllowedKey {
            key: "clone".to_string(),
            reserved: vec!["get", "set"],
        };
        let message = err.to_string();
        assert!(message.contains("\"clone\""));
        assert!(message.contains("[\"get\", \"set\"]"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = StoreError::io(
            "/tmp/x.yml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/tmp/x.yml"));
        assert!(err.source().is_some());
    }
}
