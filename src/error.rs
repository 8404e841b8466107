//! Error types for pageslice
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pageslice
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Construction Errors
    // ============================================================================
    /// A value offered as a query source lacks the required shape
    #[error("Not a query source: {message}")]
    NotAQuery {
        /// What made the value unusable as a source
        message: String,
    },

    /// Per-page limit rejected at paginator construction
    #[error("Invalid per-page limit: {value}")]
    InvalidPerPage {
        /// The rejected limit
        value: u64,
    },

    // ============================================================================
    // Page Request Errors
    // ============================================================================
    /// The requested page number is not interpretable as an integer
    #[error("Page number is not an integer: '{input}'")]
    PageNotAnInteger {
        /// The raw input that failed to parse
        input: String,
    },

    /// The requested page number is below 1 or beyond the last page
    #[error("Empty page: {message}")]
    EmptyPage {
        /// Which bound the request fell outside of
        message: String,
    },

    // ============================================================================
    // Source Errors
    // ============================================================================
    /// The source has no native count; callers fall back to materialization
    #[error("Query source does not support counting")]
    CountUnsupported,

    /// Failure inside the external query source
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

impl Error {
    /// Create a not-a-query error
    pub fn not_a_query(message: impl Into<String>) -> Self {
        Self::NotAQuery {
            message: message.into(),
        }
    }

    /// Create a page-not-an-integer error from the raw input
    pub fn page_not_an_integer(input: impl Into<String>) -> Self {
        Self::PageNotAnInteger {
            input: input.into(),
        }
    }

    /// Create an empty-page error
    pub fn empty_page(message: impl Into<String>) -> Self {
        Self::EmptyPage {
            message: message.into(),
        }
    }

    /// Create a source error from any error type
    pub fn source(err: impl Into<anyhow::Error>) -> Self {
        Self::Source(err.into())
    }

    /// Check if this error describes an invalid page request
    ///
    /// Covers both malformed page numbers and out-of-range ones, the two
    /// rejection paths of `Paginator::page`.
    pub fn is_invalid_page(&self) -> bool {
        matches!(self, Error::PageNotAnInteger { .. } | Error::EmptyPage { .. })
    }
}

/// Result type alias for pageslice
pub type Result<T> = std::result::Result<T, Error>;
