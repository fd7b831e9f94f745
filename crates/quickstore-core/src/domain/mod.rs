//! Domain logic for the nested store.
//!
//! Everything in here is pure: no file system access, no logging, no shared
//! state.  The application layer feeds values in and persists what comes out.
//!
//! - **`key_path`** – Splits `"a/b/c"` into a base key (`a`) and a nested path
//!   (`[b, c]`), and walks or builds nested mappings along that path.
//! - **`merge`** – The recursive deep merge that lets `set("a/b/c", ..)` keep a
//!   sibling `a/b/d` written earlier.

pub mod key_path;
pub mod merge;
