//! Client-side pagination types

use serde::Serialize;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed for `total_count` items.
///
/// `page_size` is clamped to `>= 1`.
#[must_use]
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1))
}

/// One page of an already fetched collection.
///
/// # Type Parameters
///
/// * `T` - The row type (e.g. a budget or a cash-flow entry).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<T> {
    /// Rows on the current page.
    pub rows: Vec<T>,
    /// Current page number (1-indexed).
    pub page: usize,
    /// Page size used for slicing.
    pub page_size: usize,
    /// Total number of rows across all pages.
    pub total_count: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// Whether a previous page exists.
    pub has_previous: bool,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PageView<T> {
    /// Create a page, computing [`total_pages`](Self::total_pages) and the navigation flags.
    pub fn new(rows: Vec<T>, page: usize, page_size: usize, total_count: usize) -> Self {
        let has_more = page.saturating_mul(page_size) < total_count;
        Self {
            rows,
            page,
            page_size,
            total_count,
            total_pages: total_pages(total_count, page_size),
            has_previous: page > 1,
            has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn total_pages_zero_page_size_is_clamped() {
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn page_view_flags() {
        let first = PageView::new(vec![1, 2], 1, 2, 5);
        assert!(!first.has_previous);
        assert!(first.has_more);
        assert_eq!(first.total_pages, 3);

        let last = PageView::new(vec![5], 3, 2, 5);
        assert!(last.has_previous);
        assert!(!last.has_more);
    }
}
