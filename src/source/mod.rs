//! Query source abstraction
//!
//! Supports: in-memory vectors, JSON arrays, custom backends
//!
//! # Overview
//!
//! A [`QuerySource`] is the external collaborator a [`Paginator`] slices:
//! anything that can report how many results it holds and return an ordered
//! offset/limit sub-sequence of them. The capability is the trait itself, so
//! any implementing type qualifies — there is no concrete-type check.
//!
//! [`Paginator`]: crate::Paginator

mod adapters;

pub use adapters::{JsonArraySource, VecSource};

use crate::error::{Error, Result};

/// Core trait for paginatable query sources
///
/// Implementors must provide ordered, offset/limit slicing. Counting is
/// optional: the default `count` reports [`Error::CountUnsupported`], which
/// the paginator turns into a fallback over the fully materialized results.
pub trait QuerySource {
    /// The item type produced by this source
    type Item;

    /// Total number of results currently in the source
    ///
    /// Sources without a native count keep the default body; any error other
    /// than [`Error::CountUnsupported`] propagates to the caller unmodified.
    fn count(&self) -> Result<u64> {
        Err(Error::CountUnsupported)
    }

    /// Materialize the ordered sub-sequence starting at `offset`, at most
    /// `limit` items long
    ///
    /// An offset at or past the end yields an empty vector, not an error.
    fn slice(&self, offset: u64, limit: u64) -> Result<Vec<Self::Item>>;

    /// Materialize the entire result set
    ///
    /// Used as the counting fallback for sources without a native count.
    fn fetch_all(&self) -> Result<Vec<Self::Item>> {
        self.slice(0, u64::MAX)
    }
}

#[cfg(test)]
mod tests;
