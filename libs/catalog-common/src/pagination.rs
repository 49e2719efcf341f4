//! Fixed-size page slicing over ordered result sets

use serde::Deserialize;

/// Number of items per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A 1-based page number together with the page size to slice by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u64,
    /// Items per page
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: u64, size: usize) -> Self {
        Self { page, size }
    }

    /// Page 1 with the default size
    pub fn first() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }

    /// Offset of the first item on this page, `None` for page 0 or on overflow
    pub fn offset(&self) -> Option<usize> {
        let index = usize::try_from(self.page.checked_sub(1)?).ok()?;
        index.checked_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// `?page=N` query parameter, defaulting to the first page
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
        }
    }
}

impl PageQuery {
    pub fn with_size(self, size: usize) -> PageRequest {
        PageRequest::new(self.page, size)
    }
}

fn default_page() -> u64 {
    1
}

/// Return the items belonging to `request`.
///
/// Equivalent to `items[(page-1)*size .. (page-1)*size + size]` clamped to the
/// slice bounds. Pages past the end, page 0 and a zero page size all yield an
/// empty slice; callers decide whether that means "not found".
pub fn page_slice<T>(items: &[T], request: PageRequest) -> &[T] {
    if request.size == 0 {
        return &[];
    }
    let Some(start) = request.offset() else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(request.size).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `total` items
pub fn page_count(total: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    total.div_ceil(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn first_page_takes_leading_items() {
        let items = numbers(25);
        assert_eq!(page_slice(&items, PageRequest::first()), &items[0..10]);
    }

    #[test]
    fn last_page_is_partial() {
        let items = numbers(25);
        let page = page_slice(&items, PageRequest::new(3, 10));
        assert_eq!(page, &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = numbers(25);
        assert!(page_slice(&items, PageRequest::new(4, 10)).is_empty());
        assert!(page_slice(&items, PageRequest::new(1000, 10)).is_empty());
        assert!(page_slice(&items, PageRequest::new(u64::MAX, 10)).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        let items = numbers(5);
        assert!(page_slice(&items, PageRequest::new(0, 10)).is_empty());
    }

    #[test]
    fn zero_size_is_empty() {
        let items = numbers(5);
        assert!(page_slice(&items, PageRequest::new(1, 0)).is_empty());
    }

    #[test]
    fn pages_cover_every_item_exactly_once() {
        for n in [0usize, 1, 9, 10, 11, 20, 37] {
            let items = numbers(n);
            let pages = page_count(n, DEFAULT_PAGE_SIZE);
            let mut seen = Vec::new();
            for page in 1..=pages as u64 {
                let chunk = page_slice(&items, PageRequest::new(page, DEFAULT_PAGE_SIZE));
                assert!(!chunk.is_empty(), "page {page} of {n} items was empty");
                seen.extend_from_slice(chunk);
            }
            assert_eq!(seen, items);
            assert!(
                page_slice(&items, PageRequest::new(pages as u64 + 1, DEFAULT_PAGE_SIZE))
                    .is_empty()
            );
        }
    }

    #[test]
    fn page_query_defaults_to_one() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.with_size(10), PageRequest::first());
    }
}
