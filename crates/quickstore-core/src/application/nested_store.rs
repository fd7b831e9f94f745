//! NestedStore: path-addressed get / set / delete over a persisted root mapping.
//!
//! # How a write works (for beginners)
//!
//! ```text
//! set("a/b/c", V)
//!  └─ split_key      "a/b/c"          → base "a", nested [b, c]
//!  └─ wrap           [b, c] + V       → {b: {c: V}}
//!  └─ load root                       → root["a"] = {b: {d: 1}}
//!  └─ merge_values   existing + new   → {b: {d: 1, c: V}}
//!  └─ save root                       → whole document rewritten
//! ```
//!
//! Reads follow the same split, then walk the stored value with `navigate`.
//! Deleting a nested key writes an explicit null at that location; a null
//! reads back as "no value", so `get` returns `None` for it.  Deleting a
//! base key removes the entry from the root entirely.
//!
//! # Transactions
//!
//! Each operation holds the store's transaction lock from the moment the
//! root is loaded until it has been saved, so two writers sharing a store
//! never interleave their read-modify-write cycles.  The document is
//! re-read for every operation; nothing is cached between calls.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_yaml::Value;
use tracing::debug;

use crate::application::accessors::Accessors;
use crate::config::StoreConfig;
use crate::domain::key_path::{navigate, split_key, wrap, KeyPath};
use crate::domain::merge::merge_values;
use crate::error::StoreError;
use crate::infrastructure::storage::yaml_file::YamlFileStorage;
use crate::infrastructure::storage::{DocumentStorage, Root};

/// A key-value store addressing nested mappings with delimited keys.
///
/// All operations take `&self`; wrap the store in an `Arc` to share it
/// between threads.
#[derive(Debug)]
pub struct NestedStore<S: DocumentStorage = YamlFileStorage> {
    storage: S,
    separator: char,
    transaction: Mutex<()>,
}

impl NestedStore<YamlFileStorage> {
    /// Opens the YAML-backed store described by `config`.
    ///
    /// Creates the file's directory and an empty document when missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FilePathNotConfigured`](crate::ConfigError::FilePathNotConfigured)
    /// (wrapped in [`StoreError::Config`]) when the configuration has no file
    /// path, and [`StoreError::Io`] if the file cannot be created.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let path = config.require_file_path()?;
        let storage = YamlFileStorage::open(path)?;
        debug!(
            "opened store at {} (separator {:?})",
            path.display(),
            config.key_separator
        );
        Ok(Self::with_storage(storage, config.key_separator))
    }
}

impl<S: DocumentStorage> NestedStore<S> {
    /// Builds a store over any [`DocumentStorage`].
    pub fn with_storage(storage: S, separator: char) -> Self {
        Self {
            storage,
            separator,
            transaction: Mutex::new(()),
        }
    }

    /// The character splitting keys into segments.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Location of the backing document.
    pub fn file(&self) -> &Path {
        self.storage.location()
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Property-style accessors forwarding to this store.
    pub fn accessors(&self) -> Accessors<'_, S> {
        Accessors::new(self)
    }

    /// Returns the value stored at `key`, or `None` if nothing is there.
    ///
    /// A key naming an intermediate level returns the whole mapping below
    /// it: after `set("a/b/c", v)`, `get("a/b")` is `{c: v}`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyPath`] for a malformed key and storage errors
    /// from loading the document.  A missing value is never an error.
    pub fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = split_key(key, self.separator)?;

        let _tx = self.begin();
        let root = self.storage.load()?;
        let found = root
            .get(path.base.as_str())
            .and_then(|value| navigate(value, &path.nested))
            .filter(|value| !value.is_null())
            .cloned();

        debug!("get {} -> {}", path, if found.is_some() { "hit" } else { "miss" });
        Ok(found)
    }

    /// Stores `value` at `key`, merging it into what the base key holds.
    ///
    /// Returns the full value now stored under the base key, not just the
    /// leaf: `set("a/b", 1)` on an empty store returns `{b: 1}`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyPath`] for a malformed key and storage errors
    /// from loading or saving the document.
    pub fn set(&self, key: &str, value: Value) -> Result<Value, StoreError> {
        let path = split_key(key, self.separator)?;
        self.write("set", &path, value)
    }

    /// Deletes the value at `key`.
    ///
    /// A nested key is overwritten with an explicit null, leaving its
    /// siblings and the enclosing mapping in place.  A base key is removed
    /// from the root.  Deleting something that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyPath`] for a malformed key and storage errors
    /// from loading or saving the document.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        let path = split_key(key, self.separator)?;
        if path.is_nested() {
            self.write("delete", &path, Value::Null)?;
            return Ok(());
        }

        let _tx = self.begin();
        let root = self.storage.load()?;
        let before = root.len();
        let root: Root = root
            .into_iter()
            .filter(|(k, _)| k.as_str() != Some(path.base.as_str()))
            .collect();
        self.storage.save(&root)?;

        debug!("delete {} ({} entries removed)", path, before - root.len());
        Ok(())
    }

    /// Lists the base keys currently stored, in document order.
    ///
    /// Only string keys are listed; a hand-edited document may contain other
    /// key types, which `get` cannot address either.
    ///
    /// # Errors
    ///
    /// Returns storage errors from loading the document.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let _tx = self.begin();
        let root = self.storage.load()?;
        Ok(root
            .keys()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect())
    }

    /// Wraps `value` along the nested path and merges it under the base key.
    ///
    /// `op` names the public operation in the trace output.
    fn write(&self, op: &str, path: &KeyPath, value: Value) -> Result<Value, StoreError> {
        let incoming = wrap(&path.nested, value);

        let _tx = self.begin();
        let mut root = self.storage.load()?;
        let base = Value::from(path.base.as_str());
        let merged = merge_values(root.get(&base), incoming);
        root.insert(base, merged.clone());
        self.storage.save(&root)?;

        debug!("{} {}", op, path);
        Ok(merged)
    }

    /// Enters the transaction critical section.
    fn begin(&self) -> MutexGuard<'_, ()> {
        // Nothing lives behind the lock, so a poisoned guard is still usable.
        self.transaction
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
