use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MilestoneDto {
    pub id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// Days between today (UTC) and the milestone, negative when in the past
    pub days_from_today: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveMilestoneDto {
    pub title: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub icon: Option<String>,
}
