//! In-memory document storage for unit testing.
//!
//! Keeps the root mapping in a mutex and counts saves, so tests can check
//! that reads never persist and writes always do.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{DocumentStorage, Root};
use crate::error::StoreError;

/// A [`DocumentStorage`] that never touches the file system.
#[derive(Debug)]
pub struct MemoryStorage {
    root: Mutex<Root>,
    save_count: Mutex<u32>,
    location: PathBuf,
}

impl MemoryStorage {
    /// Creates storage holding an empty root.
    pub fn new() -> Self {
        Self::with_root(Root::new())
    }

    /// Creates storage pre-populated with `root`.
    pub fn with_root(root: Root) -> Self {
        Self {
            root: Mutex::new(root),
            save_count: Mutex::new(0),
            location: PathBuf::from(":memory:"),
        }
    }

    /// Returns a copy of the currently stored root.
    pub fn snapshot(&self) -> Root {
        self.root.lock().expect("lock poisoned").clone()
    }

    /// Returns the number of times [`DocumentStorage::save`] was called.
    pub fn save_count(&self) -> u32 {
        *self.save_count.lock().expect("lock poisoned")
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStorage for MemoryStorage {
    fn load(&self) -> Result<Root, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, root: &Root) -> Result<(), StoreError> {
        *self.root.lock().expect("lock poisoned") = root.clone();
        *self.save_count.lock().expect("lock poisoned") += 1;
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.location
    }
}
