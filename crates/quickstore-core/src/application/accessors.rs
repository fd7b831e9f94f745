//! Property-style accessors on top of [`NestedStore`].
//!
//! Callers that prefer treating store keys like named properties can go
//! through an [`Accessors`] view instead of calling `get` / `set` / `delete`
//! with a key string:
//!
//! ```rust
//! use quickstore_core::{MemoryStorage, NestedStore, Value};
//!
//! let store = NestedStore::with_storage(MemoryStorage::new(), '/');
//! let props = store.accessors();
//!
//! props.assign("answer", Value::from(42))?;            // store.answer = 42
//! assert_eq!(props.read("answer")?, Some(Value::from(42)));
//! props.dispatch("delete_answer", Vec::new())?;         // store.delete_answer()
//! assert_eq!(props.read("answer")?, None);
//! # Ok::<(), quickstore_core::StoreError>(())
//! ```
//!
//! Names that collide with the store's own methods ([`RESERVED_NAMES`]) are
//! refused with [`StoreError::NotAllowedKey`]; a property called `get` would
//! otherwise be unreachable through any layer that dispatches on method names.

use serde_yaml::Value;

use crate::application::nested_store::NestedStore;
use crate::error::StoreError;
use crate::infrastructure::storage::DocumentStorage;

/// Names that cannot be used as property keys.
pub const RESERVED_NAMES: &[&str] = &[
    "get",
    "set",
    "delete",
    "file",
    "keys",
    "separator",
    "storage",
    "accessors",
    "open",
    "with_storage",
    "clone",
    "assign",
    "read",
    "remove",
    "dispatch",
];

/// Prefix marking a dispatched method name as a deletion.
const DELETE_PREFIX: &str = "delete_";

/// Suffix marking a dispatched method name as an assignment.
const ASSIGN_SUFFIX: char = '=';

/// A property-style view over a [`NestedStore`].
#[derive(Debug)]
pub struct Accessors<'s, S: DocumentStorage> {
    store: &'s NestedStore<S>,
}

impl<'s, S: DocumentStorage> Accessors<'s, S> {
    pub(crate) fn new(store: &'s NestedStore<S>) -> Self {
        Self { store }
    }

    /// `store.name = value`: stores `value` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotAllowedKey`] for a reserved name, otherwise
    /// whatever [`NestedStore::set`] returns.
    pub fn assign(&self, name: &str, value: Value) -> Result<Value, StoreError> {
        ensure_allowed(name)?;
        self.store.set(name, value)
    }

    /// `store.name`: reads the value stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotAllowedKey`] for a reserved name, otherwise
    /// whatever [`NestedStore::get`] returns.
    pub fn read(&self, name: &str) -> Result<Option<Value>, StoreError> {
        ensure_allowed(name)?;
        self.store.get(name)
    }

    /// `store.delete_name()`: deletes the value stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotAllowedKey`] for a reserved name, otherwise
    /// whatever [`NestedStore::delete`] returns.
    pub fn remove(&self, name: &str) -> Result<(), StoreError> {
        ensure_allowed(name)?;
        self.store.delete(name)
    }

    /// Routes a method call by name, for embedders that receive calls as
    /// strings (scripting bridges, RPC layers).
    ///
    /// | Method shape   | Arguments | Action                 | Returns          |
    /// |----------------|-----------|------------------------|------------------|
    /// | `name=`        | exactly 1 | `assign(name, arg)`    | stored value     |
    /// | `delete_name`  | none      | `remove(name)`         | `None`           |
    /// | `name`         | none      | `read(name)`           | value or `None`  |
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownAccessor`] for any other shape, plus the
    /// errors of the routed operation.
    pub fn dispatch(&self, method: &str, mut args: Vec<Value>) -> Result<Option<Value>, StoreError> {
        if let Some(name) = method.strip_suffix(ASSIGN_SUFFIX) {
            if args.len() == 1 {
                let value = args.remove(0);
                return self.assign(name, value).map(Some);
            }
        } else if let Some(name) = method.strip_prefix(DELETE_PREFIX) {
            if args.is_empty() {
                self.remove(name)?;
                return Ok(None);
            }
        } else if args.is_empty() {
            return self.read(method);
        }

        Err(StoreError::UnknownAccessor {
            method: method.to_string(),
            arity: args.len(),
        })
    }
}

/// Refuses names listed in [`RESERVED_NAMES`].
fn ensure_allowed(name: &str) -> Result<(), StoreError> {
    if RESERVED_NAMES.contains(&name) {
        return Err(StoreError::NotAllowedKey {
            key: name.to_string(),
            reserved: RESERVED_NAMES.to_vec(),
        });
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::mock::MemoryStorage;

    fn store() -> NestedStore<MemoryStorage> {
        NestedStore::with_storage(MemoryStorage::new(), '/')
    }

    #[test]
    fn test_assign_then_read_round_trips() {
        // Arrange
        let store = store();
        let props = store.accessors();

        // Act
        props.assign("carrots", Value::from("carrots")).unwrap();

        // Assert
        assert_eq!(props.read("carrots").unwrap(), Some(Value::from("carrots")));
        assert_eq!(store.get("carrots").unwrap(), Some(Value::from("carrots")));
    }

    #[test]
    fn test_read_unset_property_returns_none() {
        let store = store();
        assert_eq!(store.accessors().read("hamburger").unwrap(), None);
    }

    #[test]
    fn test_assign_reserved_name_is_refused() {
        let store = store();

        let err = store.accessors().assign("clone", Value::from("defined")).unwrap_err();

        match err {
            StoreError::NotAllowedKey { key, reserved } => {
                assert_eq!(key, "clone");
                assert!(reserved.contains(&"get"));
            }
            other => panic!("expected NotAllowedKey, got {other:?}"),
        }
        assert_eq!(store.storage().save_count(), 0);
    }

    #[test]
    fn test_every_reserved_name_is_refused_for_every_accessor() {
        let store = store();
        let props = store.accessors();
        for name in RESERVED_NAMES {
            assert!(props.assign(name, Value::Null).is_err(), "assign {name}");
            assert!(props.read(name).is_err(), "read {name}");
            assert!(props.remove(name).is_err(), "remove {name}");
        }
    }

    #[test]
    fn test_dispatch_setter_shape_assigns() {
        let store = store();
        let props = store.accessors();

        let stored = props.dispatch("brownie=", vec![Value::from("brownie")]).unwrap();

        assert_eq!(stored, Some(Value::from("brownie")));
        assert_eq!(store.get("brownie").unwrap(), Some(Value::from("brownie")));
    }

    #[test]
    fn test_dispatch_getter_shape_reads() {
        let store = store();
        store.set("toast", Value::from("toast")).unwrap();

        let value = store.accessors().dispatch("toast", Vec::new()).unwrap();

        assert_eq!(value, Some(Value::from("toast")));
    }

    #[test]
    fn test_dispatch_delete_shape_removes() {
        let store = store();
        store.set("juice", Value::from("orange")).unwrap();

        let result = store.accessors().dispatch("delete_juice", Vec::new()).unwrap();

        assert_eq!(result, None);
        assert_eq!(store.get("juice").unwrap(), None);
    }

    #[test]
    fn test_dispatch_rejects_unknown_shapes() {
        let store = store();
        let props = store.accessors();

        let err = props
            .dispatch("arbitrary_method", vec![Value::from(1), Value::from(2)])
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnknownAccessor { ref method, arity: 2 } if method == "arbitrary_method"
        ));

        assert!(matches!(
            props.dispatch("answer=", Vec::new()),
            Err(StoreError::UnknownAccessor { arity: 0, .. })
        ));
        assert!(matches!(
            props.dispatch("delete_answer", vec![Value::Null]),
            Err(StoreError::UnknownAccessor { arity: 1, .. })
        ));
    }

    #[test]
    fn test_dispatch_setter_for_reserved_name_is_refused() {
        let store = store();
        let result = store.accessors().dispatch("get=", vec![Value::from(1)]);
        assert!(matches!(result, Err(StoreError::NotAllowedKey { .. })));
    }
}
