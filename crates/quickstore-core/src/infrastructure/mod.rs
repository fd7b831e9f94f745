//! Infrastructure adapters for the nested store.
//!
//! The only external resource the store touches is the document holding the
//! root mapping.  [`storage`] defines the [`DocumentStorage`](storage::DocumentStorage)
//! trait plus a YAML file implementation and an in-memory one for tests.

pub mod storage;
