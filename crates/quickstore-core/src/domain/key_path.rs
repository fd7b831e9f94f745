//! Key path parsing and nested value navigation.
//!
//! A raw key such as `"pastries/muffins/sweet"` is split on the configured
//! separator into a **base key** (`pastries`), which selects an entry of the
//! root mapping, and a **nested path** (`[muffins, sweet]`), which addresses a
//! location inside that entry's value.
//!
//! Empty segments are refused: `""`, `"/a"`, `"a/"` and `"a//b"` all fail
//! with [`KeyPathError`].

use std::fmt;

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Errors produced while splitting a raw key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyPathError {
    /// The raw key was the empty string.
    #[error("key must not be empty")]
    Empty,

    /// The raw key contains an empty segment (leading, trailing or doubled separator).
    #[error("key {key:?} has an empty segment at position {position}")]
    EmptySegment {
        /// The raw key as given by the caller.
        key: String,
        /// Zero-based index of the first empty segment.
        position: usize,
    },
}

/// A parsed key: the base key plus the nested path below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    /// Top-level key of the root mapping.
    pub base: String,
    /// Segments addressing a location inside the base key's value.
    pub nested: Vec<String>,
}

impl KeyPath {
    /// Returns `true` if the key addresses something below the base key.
    pub fn is_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Joins the segments back into a raw key using `separator`.
    pub fn to_raw(&self, separator: char) -> String {
        let mut out = self.base.clone();
        for segment in &self.nested {
            out.push(separator);
            out.push_str(segment);
        }
        out
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        for segment in &self.nested {
            write!(f, "[{segment}]")?;
        }
        Ok(())
    }
}

/// Splits `raw` on `separator` into a [`KeyPath`].
///
/// A key without the separator yields a base key equal to the whole key and
/// an empty nested path.
///
/// # Errors
///
/// Returns [`KeyPathError::Empty`] for an empty key and
/// [`KeyPathError::EmptySegment`] if any segment is empty.
pub fn split_key(raw: &str, separator: char) -> Result<KeyPath, KeyPathError> {
    if raw.is_empty() {
        return Err(KeyPathError::Empty);
    }

    let mut segments = Vec::new();
    for (position, segment) in raw.split(separator).enumerate() {
        if segment.is_empty() {
            return Err(KeyPathError::EmptySegment {
                key: raw.to_string(),
                position,
            });
        }
        segments.push(segment.to_string());
    }

    // `split` on a non-empty string always yields at least one segment.
    let base = segments.remove(0);
    Ok(KeyPath {
        base,
        nested: segments,
    })
}

/// Builds a right-nested mapping from `nested` around `value`.
///
/// `wrap(["b", "c"], V)` produces `{b: {c: V}}`; an empty path returns
/// `value` unchanged.
pub fn wrap<S: AsRef<str>>(nested: &[S], value: Value) -> Value {
    nested.iter().rev().fold(value, |inner, segment| {
        let mut mapping = Mapping::new();
        mapping.insert(Value::from(segment.as_ref()), inner);
        Value::Mapping(mapping)
    })
}

/// Walks `value` along `nested`, one mapping lookup per segment.
///
/// Returns `None` as soon as a segment is missing or an intermediate value
/// is not a mapping.  An empty path returns `value` itself.
pub fn navigate<'a, S: AsRef<str>>(value: &'a Value, nested: &[S]) -> Option<&'a Value> {
    nested
        .iter()
        .try_fold(value, |current, segment| match current {
            Value::Mapping(mapping) => mapping.get(segment.as_ref()),
            _ => None,
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
