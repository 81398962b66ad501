use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemoryImageDto {
    pub url: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemoryDto {
    pub id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub mood: Option<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub images: Vec<MemoryImageDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or replacing a memory.
///
/// Updates replace every field, including the full image list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveMemoryDto {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub mood: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<MemoryImageDto>,
}
