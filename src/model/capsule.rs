use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A time capsule as seen by visitors.
///
/// `content` stays `null` until `unlock_at` has passed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CapsuleDto {
    pub id: i32,
    pub title: String,
    pub teaser: String,
    pub content: Option<String>,
    pub locked: bool,
    pub unlock_at: DateTime<Utc>,
    pub seconds_until_unlock: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveCapsuleDto {
    pub title: String,
    #[serde(default)]
    pub teaser: String,
    pub content: String,
    pub unlock_at: DateTime<Utc>,
}
