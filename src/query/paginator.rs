//! Fixed-size page slicing.

/// Number of pages needed for `count` items. Zero items means zero pages.
pub fn page_count(count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    count.div_ceil(items_per_page)
}

/// Returns the 1-based `page` of `items`.
///
/// Pages past the end yield an empty slice. Page `0` is read as page `1`.
pub fn page_slice<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(items_per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(items_per_page).min(items.len());
    &items[start..end]
}
