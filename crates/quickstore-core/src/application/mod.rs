//! Application layer: the store's public operations.
//!
//! - **`nested_store`** – [`NestedStore`](nested_store::NestedStore) turns
//!   `get` / `set` / `delete` on delimited keys into transactions over the
//!   root mapping, using the pure functions from [`crate::domain`].
//!
//! - **`accessors`** – A property-style view (`assign("foo", v)`,
//!   `read("foo")`, `dispatch("delete_foo", ..)`) on top of the store that
//!   refuses names clashing with the store's own methods.

pub mod accessors;
pub mod nested_store;
