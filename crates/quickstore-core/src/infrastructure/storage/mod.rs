//! Document storage: where the root mapping is read from and written to.
//!
//! The store never touches the file system directly.  It loads the whole
//! root mapping at the start of each transaction and, for writes, hands the
//! whole updated mapping back at the end.  There is no incremental patching.
//!
//! # Testability
//!
//! The [`DocumentStorage`] trait allows unit tests to run the store against
//! [`mock::MemoryStorage`] without creating files.

use std::path::Path;

use serde_yaml::Mapping;

use crate::error::StoreError;

pub mod mock;
pub mod yaml_file;

/// The persisted root: one entry per base key.
pub type Root = Mapping;

/// Trait abstracting the backing document of a store.
pub trait DocumentStorage: Send + Sync {
    /// Reads the full root mapping.
    fn load(&self) -> Result<Root, StoreError>;
    /// Replaces the persisted root mapping with `root`.
    fn save(&self, root: &Root) -> Result<(), StoreError>;
    /// Where the document lives, for diagnostics and [`NestedStore::file`](crate::NestedStore::file).
    fn location(&self) -> &Path;
}
