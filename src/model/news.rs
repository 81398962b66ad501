use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
    pub category: String,
    /// Markdown source
    pub content: String,
    /// Content rendered to HTML
    pub content_html: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveNewsDto {
    pub title: String,
    /// Derived from the title when omitted
    pub slug: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublishNewsDto {
    pub published: bool,
}
