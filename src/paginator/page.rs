//! Page type and serializable page metadata

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::Paginator;
use crate::error::Result;
use crate::source::QuerySource;

/// One page of a paginated result set
///
/// Holds the eagerly materialized items for the page, the 1-based page
/// number, and a non-owning reference back to the paginator that produced
/// it. The reference is used only for live navigation reads (`has_next`
/// re-queries the source's count); the page never mutates the paginator.
///
/// Pages deref to a slice, so indexing and sub-slicing work directly:
///
/// ```rust
/// # use pageslice::{Paginator, VecSource};
/// # fn main() -> pageslice::Result<()> {
/// let paginator = Paginator::new(VecSource::new(vec![10, 20, 30]), 2)?;
/// let page = paginator.page(1)?;
/// assert_eq!(page[0], 10);
/// assert_eq!(&page[..], &[10, 20]);
/// # Ok(())
/// # }
/// ```
pub struct Page<'a, Q: QuerySource> {
    items: Vec<Q::Item>,
    number: u64,
    paginator: &'a Paginator<Q>,
}

impl<'a, Q: QuerySource> Page<'a, Q> {
    /// Create a page over already-materialized items
    ///
    /// Normally called by [`Paginator::page`]; public so it can serve as the
    /// default constructor for [`Paginator::page_with`].
    pub fn new(items: Vec<Q::Item>, number: u64, paginator: &'a Paginator<Q>) -> Self {
        Self {
            items,
            number,
            paginator,
        }
    }

    /// The items on this page, in result-set order
    pub fn items(&self) -> &[Q::Item] {
        &self.items
    }

    /// Consume the page, returning its items
    pub fn into_items(self) -> Vec<Q::Item> {
        self.items
    }

    /// Number of items on this page
    ///
    /// At most the paginator's per-page limit; possibly fewer on the last
    /// page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index` within this page, if present
    pub fn get(&self, index: usize) -> Option<&Q::Item> {
        self.items.get(index)
    }

    /// Iterate over the items on this page
    pub fn iter(&self) -> std::slice::Iter<'_, Q::Item> {
        self.items.iter()
    }

    /// This page's 1-based number
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The paginator that produced this page
    pub fn paginator(&self) -> &'a Paginator<Q> {
        self.paginator
    }

    /// Whether a page precedes this one
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Whether a page follows this one
    ///
    /// Evaluated live against the paginator, which re-queries the source's
    /// count; the answer can change if the source mutates.
    pub fn has_next(&self) -> Result<bool> {
        Ok(self.number < self.paginator.total_pages()?)
    }

    /// The following page's number, or `None` on the last page
    pub fn next_page_number(&self) -> Result<Option<u64>> {
        Ok(self.has_next()?.then_some(self.number + 1))
    }

    /// The preceding page's number, or `None` on the first page
    pub fn previous_page_number(&self) -> Option<u64> {
        if self.has_previous() {
            Some(self.number - 1)
        } else {
            None
        }
    }

    /// Snapshot of this page's navigation metadata
    ///
    /// Issues live count queries; the result is a plain serializable value
    /// suitable for embedding in an API response envelope.
    pub fn meta(&self) -> Result<PageMeta> {
        Ok(PageMeta {
            page: self.number,
            per_page: self.paginator.per_page(),
            total_items: self.paginator.count()?,
            total_pages: self.paginator.total_pages()?,
            has_next: self.has_next()?,
            has_previous: self.has_previous(),
            next_page: self.next_page_number()?,
            previous_page: self.previous_page_number(),
        })
    }
}

impl<Q: QuerySource> Deref for Page<'_, Q> {
    type Target = [Q::Item];

    fn deref(&self) -> &[Q::Item] {
        &self.items
    }
}

impl<'a, 'p, Q: QuerySource> IntoIterator for &'p Page<'a, Q> {
    type Item = &'p Q::Item;
    type IntoIter = std::slice::Iter<'p, Q::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<Q: QuerySource> fmt::Display for Page<'_, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The total is a live read and can fail; fall back to the number alone.
        match self.paginator.total_pages() {
            Ok(total) => write!(f, "<Page {} of {}>", self.number, total),
            Err(_) => write!(f, "<Page {}>", self.number),
        }
    }
}

impl<Q: QuerySource> fmt::Debug for Page<'_, Q>
where
    Q::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("number", &self.number)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Serializable page navigation metadata
///
/// A point-in-time snapshot produced by [`Page::meta`], shaped for API
/// response envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// 1-based page number
    pub page: u64,
    /// Items per page
    pub per_page: u64,
    /// Total items across all pages at snapshot time
    pub total_items: u64,
    /// Total pages at snapshot time
    pub total_pages: u64,
    /// Whether a page follows
    pub has_next: bool,
    /// Whether a page precedes
    pub has_previous: bool,
    /// The following page's number, if any
    pub next_page: Option<u64>,
    /// The preceding page's number, if any
    pub previous_page: Option<u64>,
}
