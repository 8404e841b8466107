//! Paginator module
//!
//! Supports: 1-based page lookup, live totals, page ranges, empty-first-page
//! policy, custom page construction
//!
//! # Overview
//!
//! A [`Paginator`] wraps a [`QuerySource`] and a fixed per-page limit. It
//! translates validated 1-based page numbers into offset/limit slices and
//! wraps the result in a [`Page`]. Counts and totals are read live from the
//! source on every access; nothing is memoized.

mod page;

pub use page::{Page, PageMeta};

use std::ops::RangeInclusive;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::source::QuerySource;

/// Splits a query source's results into fixed-size, 1-based pages
#[derive(Debug, Clone)]
pub struct Paginator<Q: QuerySource> {
    source: Q,
    per_page: u64,
    allow_empty_first_page: bool,
}

impl<Q: QuerySource> Paginator<Q> {
    /// Create a paginator with the default empty-first-page policy (allowed)
    ///
    /// A per-page limit of zero is rejected with [`Error::InvalidPerPage`].
    pub fn new(source: Q, per_page: u64) -> Result<Self> {
        Self::with_empty_first_page(source, per_page, true)
    }

    /// Create a paginator with an explicit empty-first-page policy
    ///
    /// When `allow_empty_first_page` is true, page 1 of an empty result set
    /// is retrievable and empty; when false it is an [`Error::EmptyPage`].
    pub fn with_empty_first_page(
        source: Q,
        per_page: u64,
        allow_empty_first_page: bool,
    ) -> Result<Self> {
        if per_page == 0 {
            return Err(Error::InvalidPerPage { value: per_page });
        }
        Ok(Self {
            source,
            per_page,
            allow_empty_first_page,
        })
    }

    /// The wrapped query source
    pub fn source(&self) -> &Q {
        &self.source
    }

    /// Items per page
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Whether page 1 of an empty result set is retrievable
    pub fn allow_empty_first_page(&self) -> bool {
        self.allow_empty_first_page
    }

    /// Total number of results, read live from the source
    ///
    /// Re-queried on every call. Sources without a native count fall back to
    /// the length of the fully materialized result set; only
    /// [`Error::CountUnsupported`] triggers that fallback, any other source
    /// error propagates unmodified.
    pub fn count(&self) -> Result<u64> {
        match self.source.count() {
            Ok(count) => Ok(count),
            Err(Error::CountUnsupported) => {
                debug!("source has no native count, materializing results");
                Ok(self.source.fetch_all()?.len() as u64)
            }
            Err(err) => Err(err),
        }
    }

    /// Total number of pages
    ///
    /// Zero when the result set is empty and empty first pages are
    /// disallowed; otherwise the ceiling of `count / per_page`.
    pub fn total_pages(&self) -> Result<u64> {
        let count = self.count()?;
        if count == 0 && !self.allow_empty_first_page {
            return Ok(0);
        }
        Ok(count.div_ceil(self.per_page))
    }

    /// The 1-based range of valid page numbers
    ///
    /// Empty when `total_pages` is zero. The range is `Clone`, so it can be
    /// iterated any number of times.
    pub fn page_range(&self) -> Result<RangeInclusive<u64>> {
        Ok(1..=self.total_pages()?)
    }

    /// Validate a 1-based page number, returning it on success
    ///
    /// Numbers below 1 or beyond the last page are [`Error::EmptyPage`],
    /// except that page 1 is always permitted when empty first pages are
    /// allowed. Issues one live count against the source.
    pub fn validate_number(&self, number: i64) -> Result<u64> {
        trace!(number, "validating page number");
        if number < 1 {
            return Err(Error::empty_page("that page number is less than 1"));
        }
        let number = number as u64;
        if number > self.total_pages()? && !(number == 1 && self.allow_empty_first_page) {
            return Err(Error::empty_page("that page contains no results"));
        }
        Ok(number)
    }

    /// Fetch the given 1-based page
    ///
    /// Validates the number, then issues exactly one slice against the
    /// source. Two source round-trips minimum: the count behind validation
    /// plus the data slice.
    pub fn page(&self, number: i64) -> Result<Page<'_, Q>> {
        self.page_with(number, Page::new)
    }

    /// Fetch a page identified by raw text, as received from e.g. a query
    /// string
    ///
    /// Text that does not parse as an integer is [`Error::PageNotAnInteger`];
    /// the parsed number then goes through the usual validation.
    pub fn page_from_str(&self, raw: &str) -> Result<Page<'_, Q>> {
        let number: i64 = raw
            .trim()
            .parse()
            .map_err(|_| Error::page_not_an_integer(raw))?;
        self.page(number)
    }

    /// Fetch a page through a custom page constructor
    ///
    /// Extension hook for callers that want an alternative page
    /// representation: `build` receives the materialized items, the validated
    /// page number, and this paginator. [`Paginator::page`] is this method
    /// with [`Page::new`].
    pub fn page_with<'a, P>(
        &'a self,
        number: i64,
        build: impl FnOnce(Vec<Q::Item>, u64, &'a Self) -> P,
    ) -> Result<P> {
        let number = self.validate_number(number)?;
        let offset = (number - 1) * self.per_page;
        debug!(number, offset, limit = self.per_page, "fetching page slice");
        let items = self.source.slice(offset, self.per_page)?;
        Ok(build(items, number, self))
    }
}
