use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Largest accepted page size; anything above is clamped down to this
pub const MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Calculate pagination metadata for a 1-based page over `total_items` rows
    pub fn new(page: u64, per_page: u64, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(per_page);

        Self {
            page,
            per_page,
            total_pages,
            total_items,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

/// Clamps raw query parameters to a sane page and page size
pub(crate) fn clamp_paging(page: u64, per_page: u64) -> (u64, u64) {
    (page.max(1), per_page.clamp(1, MAX_PER_PAGE))
}

pub(crate) fn default_page() -> u64 {
    1
}

pub(crate) fn default_per_page() -> u64 {
    20
}
