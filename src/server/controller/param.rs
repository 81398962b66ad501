use serde::Deserialize;

use crate::server::model::page::PageParam;

/// Largest page size a client may request.
const MAX_ENTRIES: u64 = 100;

/// Query parameters shared by every paginated listing.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

impl PaginationParams {
    /// Converts to a page request, clamping `entries` to `1..=100`.
    pub fn to_page(&self) -> PageParam {
        PageParam {
            page: self.page,
            per_page: self.entries.clamp(1, MAX_ENTRIES),
        }
    }
}
