use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub slug: String,
    pub display_name: String,
    pub nickname: Option<String>,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub quote: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveProfileDto {
    pub slug: String,
    pub display_name: String,
    pub nickname: Option<String>,
    #[serde(default)]
    pub bio: String,
    pub avatar_url: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub quote: Option<String>,
}
