//! Sorted, paginated derivation of a fetched collection
//!
//! Pure functions of the list state; nothing here talks to the store. All items are
//! fetched up front and sliced client-side.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::types::{total_pages, ListState, PageView, DEFAULT_PAGE_SIZE};

/// Explicit sort selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first
    DateDescending,
    /// Case-insensitive A→Z
    NameAscending,
    /// Keep fetch order
    #[default]
    Unsorted,
}

/// Sort keys a list row can expose
pub trait ListItem {
    /// Sort used when the caller does not pick one
    const DEFAULT_SORT: SortKey = SortKey::Unsorted;

    fn sort_date(&self) -> Option<NaiveDate> {
        None
    }

    fn sort_name(&self) -> Option<&str> {
        None
    }
}

/// Rows without the selected key go last.
fn missing_last<K>(a: Option<K>, b: Option<K>, cmp: impl FnOnce(K, K) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable sort of a copy of `items`.
pub fn sort_items<T: ListItem + Clone>(items: &[T], key: SortKey) -> Vec<T> {
    let mut sorted = items.to_vec();
    match key {
        SortKey::DateDescending => {
            sorted.sort_by(|a, b| missing_last(a.sort_date(), b.sort_date(), |a, b| b.cmp(&a)));
        }
        SortKey::NameAscending => {
            sorted.sort_by(|a, b| missing_last(a.sort_name(), b.sort_name(), compare_names));
        }
        SortKey::Unsorted => {}
    }
    sorted
}

/// Page cursor over a client-side collection (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl Paginator {
    /// `page_size` is clamped to `>= 1`
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, total_count: usize) -> usize {
        total_pages(total_count, self.page_size)
    }

    /// Current page clamped to the collection (a shrunk list shows its last page)
    pub fn effective_page(&self, total_count: usize) -> usize {
        self.current_page.min(self.total_pages(total_count).max(1))
    }

    pub fn has_previous(&self, total_count: usize) -> bool {
        self.effective_page(total_count) > 1
    }

    pub fn has_next(&self, total_count: usize) -> bool {
        self.effective_page(total_count) < self.total_pages(total_count)
    }

    /// Advance one page; no-op on the last page. Returns whether it moved.
    pub fn next_page(&mut self, total_count: usize) -> bool {
        if !self.has_next(total_count) {
            return false;
        }
        self.current_page = self.effective_page(total_count) + 1;
        true
    }

    /// Go back one page; no-op on the first page. Returns whether it moved.
    pub fn previous_page(&mut self, total_count: usize) -> bool {
        if !self.has_previous(total_count) {
            return false;
        }
        self.current_page = self.effective_page(total_count) - 1;
        true
    }

    /// Jump to `page`, clamped into `1..=total_pages`
    pub fn go_to(&mut self, page: usize, total_count: usize) {
        self.current_page = page.clamp(1, self.total_pages(total_count).max(1));
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Rows of the effective page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let page = self.effective_page(items.len());
        let start = (page - 1).saturating_mul(self.page_size).min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    /// Build the page view for already sorted rows
    pub fn page_view<T: Clone>(&self, sorted: &[T]) -> PageView<T> {
        PageView::new(
            self.slice(sorted).to_vec(),
            self.effective_page(sorted.len()),
            self.page_size,
            sorted.len(),
        )
    }
}

/// What a list screen shows. Checked in this order: error, loading, empty, rows.
#[derive(Debug, Clone, PartialEq)]
pub enum ListRenderState<T> {
    Error(String),
    Loading,
    Empty,
    Populated(PageView<T>),
}

/// Sort selector plus page cursor for one list screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListView {
    pub sort: SortKey,
    pub paginator: Paginator,
}

impl ListView {
    #[must_use]
    pub fn new(sort: SortKey, page_size: usize) -> Self {
        Self {
            sort,
            paginator: Paginator::new(page_size),
        }
    }

    /// View using the row type's default sort
    #[must_use]
    pub fn for_item<T: ListItem>(page_size: usize) -> Self {
        Self::new(T::DEFAULT_SORT, page_size)
    }

    pub fn render<T: ListItem + Clone>(&self, state: &ListState<T>) -> ListRenderState<T> {
        if state.message.is_error() {
            return ListRenderState::Error(state.message.text.clone());
        }
        if state.is_loading {
            return ListRenderState::Loading;
        }
        if state.items.is_empty() {
            return ListRenderState::Empty;
        }
        let sorted = sort_items(&state.items, self.sort);
        ListRenderState::Populated(self.paginator.page_view(&sorted))
    }
}
