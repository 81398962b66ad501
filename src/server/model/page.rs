//! Generic pagination container shared by every paginated listing.

use crate::model::pagination::PageDto;

/// One page of domain items with the metadata needed for navigation controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items for this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
}

impl<T> Page<T> {
    /// Number of pages needed to show `total` items, `0` for an empty listing.
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }

    /// Converts the page to its API representation, converting each item with `f`.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PageDto<D> {
        let total_pages = self.total_pages();

        PageDto {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

/// Zero-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParam {
    pub page: u64,
    pub per_page: u64,
}
