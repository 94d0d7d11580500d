//! The page result value.
//!
//! A `Page` is immutable after construction: it is built by
//! [`Page::from_buffer`] and exposes a read-only view of its items. It is
//! intentionally *not* a general-purpose collection, so the
//! `items.len() <= page_size` invariant cannot be broken after the fact.

use serde::{Deserialize, Serialize};

/// At most `page_size` items plus a flag telling the caller whether more
/// items existed beyond the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    items: Vec<T>,
    page_size: usize,
    is_truncated: bool,
    total_count: Option<u64>,
}

impl<T> Page<T> {
    /// Build a page from a buffer holding at most `page_size + 1` items.
    ///
    /// This is the single point where truncation is derived: if the buffer
    /// holds more than `page_size` items, the tail beyond `page_size` is
    /// dropped and the page is flagged truncated. `total_count` is stored
    /// verbatim and never reconciled against the buffer (caller contract).
    pub fn from_buffer(mut items: Vec<T>, page_size: usize, total_count: Option<u64>) -> Self {
        let is_truncated = items.len() > page_size;
        if is_truncated {
            items.truncate(page_size);
        }
        Self {
            items,
            page_size,
            is_truncated,
            total_count,
        }
    }

    /// The items in this page, in source order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The caller-requested bound this page was built against.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// True when the source held strictly more items than `page_size`.
    pub fn is_truncated(&self) -> bool {
        self.is_truncated
    }

    /// Externally supplied total count, if any. Never computed or validated
    /// here; it may disagree with the observed items.
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consume the page and return its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> std::ops::Index<usize> for Page<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
