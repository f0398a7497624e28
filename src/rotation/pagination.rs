// ============================================================================
// Pagination - a rotation over pages instead of single items
// ============================================================================

/// Number of pages needed for `total_items`. A page size of 0 is treated as 1.
pub fn page_count(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1))
}

/// Items on `page`. The last page may be short; a page past the end is empty.
pub fn page_slice<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    let per_page = items_per_page.max(1);
    let start = page.saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    pub total_items: usize,
    pub items_per_page: usize,
}

impl Paginator {
    pub fn new(total_items: usize, items_per_page: usize) -> Self {
        Self {
            total_items,
            items_per_page: items_per_page.max(1),
        }
    }

    /// Item count for the rotation controller driving this list.
    pub fn page_count(&self) -> usize {
        page_count(self.total_items, self.items_per_page)
    }

    pub fn page<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        page_slice(items, page, self.items_per_page)
    }
}
