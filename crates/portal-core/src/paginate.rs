//! Page slicing with a clamped page number

use serde::{Deserialize, Serialize};

/// One page of a filtered list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Effective 1-based page, always within `[1, total_pages]`
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// "2 of 5"
    pub fn label(&self) -> String {
        format!("{} of {}", self.page, self.total_pages)
    }
}

/// Number of pages for `count` items; never less than one
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Slice `items` into page `requested_page`, clamped into range.
///
/// A page size of zero is treated as one.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, requested_page: usize) -> Page<T> {
    let size = page_size.max(1);
    let total_pages = total_pages(items.len(), size);
    let page = requested_page.clamp(1, total_pages);

    let start = ((page - 1) * size).min(items.len());
    let end = (start + size).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        page,
        total_pages,
        total_items: items.len(),
    }
}

/// Current page of a list, stepped by the prev/next controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current: 1,
            page_size: page_size.max(1),
            total_pages: 1,
        }
    }

    /// Record the result of a pagination pass
    pub fn sync<T>(&mut self, page: &Page<T>) {
        self.current = page.page;
        self.total_pages = page.total_pages;
    }

    /// Step forward; false when already on the last page
    pub fn next(&mut self) -> bool {
        if self.current < self.total_pages {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Step back; false when already on the first page
    pub fn previous(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }
}
