//! Paged query results
//!
//! A [`PagedList`] carries one page of a filtered result set together with
//! the total count of the unpaged set, so callers can render pagers without
//! issuing a second count query.

use serde::{Deserialize, Serialize};

/// One page of a larger result set.
///
/// `total_count` always reflects the full filtered set and `page_size` the
/// requested size, regardless of how many items the page actually holds
/// (the last page may be short, and a page index past the end is empty).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedList<T> {
    /// The items on this page
    pub items: Vec<T>,
    /// Zero-based index of this page
    pub page_index: usize,
    /// Requested page size
    pub page_size: usize,
    /// Total number of items across all pages
    pub total_count: usize,
}

impl<T> PagedList<T> {
    /// Builds a page by slicing an already-filtered result set.
    pub fn new(all: impl IntoIterator<Item = T>, page_index: usize, page_size: usize) -> Self {
        let all: Vec<T> = all.into_iter().collect();
        let total_count = all.len();
        let items: Vec<T> = all
            .into_iter()
            .skip(page_index.saturating_mul(page_size))
            .take(page_size)
            .collect();

        Self {
            items,
            page_index,
            page_size,
            total_count,
        }
    }

    /// Number of pages in the full set
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.total_count.div_ceil(self.page_size)
        }
    }

    /// Returns true if a page follows this one
    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    /// Returns true if a page precedes this one
    pub fn has_previous(&self) -> bool {
        self.page_index > 0 && self.page_count() > 0
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let page = PagedList::new(0..22, 0, 5);
        assert_eq!(page.items, vec![0, 1, 2, 3, 4]);
        assert_eq!(page.total_count, 22);
        assert_eq!(page.page_size, 5);
        assert_eq!(page.page_count(), 5);
        assert!(page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_last_page_is_short() {
        let page = PagedList::new(0..22, 4, 5);
        assert_eq!(page.items, vec![20, 21]);
        assert_eq!(page.total_count, 22);
        assert_eq!(page.page_size, 5);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = PagedList::new(0..22, 42, 5);
        assert!(page.is_empty());
        assert_eq!(page.total_count, 22);
        assert_eq!(page.page_size, 5);
    }

    #[test]
    fn test_empty_set() {
        let page = PagedList::new(std::iter::empty::<i32>(), 0, 10);
        assert!(page.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.page_count(), 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }
}
