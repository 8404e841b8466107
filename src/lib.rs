//! # pageslice
//!
//! Page-based slicing over ordered, countable query sources.
//!
//! Given any source that can count its results and return an offset/limit
//! slice of them, a [`Paginator`] partitions the results into fixed-size
//! pages, validates requested page numbers, and hands back [`Page`] values
//! carrying the slice plus navigation metadata.
//!
//! ## Features
//!
//! - **Source-agnostic**: anything implementing [`QuerySource`] paginates —
//!   in-memory vectors, JSON arrays, or your own database-backed adapter
//! - **1-based pages**: page numbers are validated before any data is fetched
//! - **Live counts**: totals are re-queried on every access, never memoized,
//!   so navigation tracks a mutating source
//! - **Empty first page**: page 1 of an empty result set can be allowed
//!   (the default) or rejected
//!
//! ## Quick Start
//!
//! ```rust
//! use pageslice::{Paginator, VecSource};
//!
//! # fn main() -> pageslice::Result<()> {
//! let source = VecSource::new((1..=25).collect::<Vec<u32>>());
//! let paginator = Paginator::new(source, 10)?;
//!
//! assert_eq!(paginator.total_pages()?, 3);
//!
//! let page = paginator.page(3)?;
//! assert_eq!(page.len(), 5);
//! assert!(page.has_previous());
//! assert!(!page.has_next()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller ──► Paginator::page(n)
//!              │ validate_number(n)      (issues a live count)
//!              │ offset = (n-1) * per_page
//!              ▼
//!            QuerySource::slice(offset, per_page)
//!              │
//!              ▼
//!            Page { items, number, &paginator }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Query source trait and built-in adapters
pub mod source;

/// Paginator and page types
pub mod paginator;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use paginator::{Page, PageMeta, Paginator};
pub use source::{JsonArraySource, QuerySource, VecSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
