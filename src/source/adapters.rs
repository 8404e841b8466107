//! Built-in query source adapters
//!
//! Each adapter turns a concrete in-process value into a [`QuerySource`].

use serde_json::Value;

use super::QuerySource;
use crate::error::{Error, Result};

// ============================================================================
// Vec Source
// ============================================================================

/// In-memory query source over a `Vec`
///
/// The simplest source: items are already materialized, counting is exact,
/// and slicing clones the requested sub-range.
#[derive(Debug, Clone)]
pub struct VecSource<T> {
    items: Vec<T>,
}

impl<T: Clone> VecSource<T> {
    /// Create a source over the given items, preserving their order
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone> From<Vec<T>> for VecSource<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Clone> QuerySource for VecSource<T> {
    type Item = T;

    fn count(&self) -> Result<u64> {
        Ok(self.items.len() as u64)
    }

    fn slice(&self, offset: u64, limit: u64) -> Result<Vec<T>> {
        Ok(clamped_range(&self.items, offset, limit)
            .iter()
            .cloned()
            .collect())
    }
}

// ============================================================================
// JSON Array Source
// ============================================================================

/// Query source over a JSON array
///
/// Construction validates the shape of the supplied value: anything other
/// than a JSON array is rejected with [`Error::NotAQuery`]. The source has no
/// native count, so pagination over it runs through the materialized-length
/// fallback.
#[derive(Debug, Clone)]
pub struct JsonArraySource {
    items: Vec<Value>,
}

impl JsonArraySource {
    /// Create a source over a JSON value, which must be an array
    pub fn new(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Self { items }),
            other => Err(Error::not_a_query(format!(
                "expected a JSON array, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl QuerySource for JsonArraySource {
    type Item = Value;

    fn slice(&self, offset: u64, limit: u64) -> Result<Vec<Value>> {
        Ok(clamped_range(&self.items, offset, limit).to_vec())
    }
}

/// Human-readable JSON type name for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Sub-slice of `items` at `offset`, at most `limit` long, clamped to bounds
fn clamped_range<T>(items: &[T], offset: u64, limit: u64) -> &[T] {
    let len = items.len();
    let start = usize::try_from(offset).unwrap_or(usize::MAX).min(len);
    let span = usize::try_from(limit).unwrap_or(usize::MAX).min(len - start);
    &items[start..start + span]
}
