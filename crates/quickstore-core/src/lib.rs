//! # quickstore-core
//!
//! A minimal persistent key-value store backed by a single YAML file, with
//! path-addressed access into nested mappings: `"a/b/c"` addresses a value
//! nested three levels deep.
//!
//! # Architecture overview (for beginners)
//!
//! The crate follows the same three-layer split used across the workspace:
//!
//! - **`domain`** – Pure functions with no I/O.  `key_path` splits a raw key
//!   into a base key and a nested path and walks/builds nested mappings along
//!   that path; `merge` implements the recursive "new wins" deep merge.
//!
//! - **`application`** – The [`NestedStore`] that turns `get` / `set` /
//!   `delete` calls into read-modify-write transactions against the root
//!   mapping, plus the property-style [`Accessors`] view.
//!
//! - **`infrastructure`** – Where the root mapping actually lives.  The
//!   [`DocumentStorage`] trait has a YAML file implementation for production
//!   and an in-memory implementation for tests.
//!
//! # Example
//!
//! ```no_run
//! use quickstore_core::{NestedStore, StoreConfig, Value};
//!
//! let config = StoreConfig::new("data/store.yml");
//! let store = NestedStore::open(&config)?;
//!
//! store.set("a/b/c", Value::from("value"))?;
//! assert_eq!(store.get("a/b/c")?, Some(Value::from("value")));
//! # Ok::<(), quickstore_core::StoreError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-export the most-used types at the crate root so callers can write
// `quickstore_core::NestedStore` instead of the full module path.
pub use application::accessors::{Accessors, RESERVED_NAMES};
pub use application::nested_store::NestedStore;
pub use config::{ConfigError, StoreConfig, DEFAULT_KEY_SEPARATOR};
pub use domain::key_path::{navigate, split_key, wrap, KeyPath, KeyPathError};
pub use domain::merge::{deep_merge, merge_values};
pub use error::StoreError;
pub use infrastructure::storage::{mock::MemoryStorage, yaml_file::YamlFileStorage, DocumentStorage, Root};

/// The value type stored at every key.
///
/// Scalars (string, number, bool, null) and mappings take part in nesting.
/// Any other YAML node is stored and returned as-is but never merged into.
pub type Value = serde_yaml::Value;

/// A mapping node inside a [`Value`].
pub type Mapping = serde_yaml::Mapping;
