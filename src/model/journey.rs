use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JourneyDto {
    pub id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveJourneyDto {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    /// Appended after the last entry when omitted on create
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReorderJourneyDto {
    /// Every journey id, in the desired display order
    pub ids: Vec<i32>,
}
