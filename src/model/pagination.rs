use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single page of results with navigation metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
