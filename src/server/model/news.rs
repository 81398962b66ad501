//! News domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::news::{NewsDto, SaveNewsDto},
    server::{
        error::AppError,
        util::{markdown::render_markdown, validate},
    },
};

pub const DEFAULT_CATEGORY: &str = "update";
const MAX_TITLE_LENGTH: usize = 200;
const MAX_CATEGORY_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
    pub category: String,
    /// Markdown source.
    pub content: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl News {
    /// Converts to a DTO, rendering the markdown content to HTML.
    pub fn into_dto(self) -> NewsDto {
        let content_html = render_markdown(&self.content);

        NewsDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            date: self.date,
            category: self.category,
            content: self.content,
            content_html,
            published: self.published,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::news::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            date: entity.date,
            category: entity.category,
            content: entity.content,
            published: entity.published,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Validated news input.
///
/// `slug` is the caller's requested slug, if any; the service turns it (or the title)
/// into a unique canonical slug.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveNewsParam {
    pub title: String,
    pub slug: Option<String>,
    pub date: NaiveDate,
    pub category: String,
    pub content: String,
    pub published: bool,
}

impl SaveNewsParam {
    pub fn from_dto(dto: SaveNewsDto) -> Result<Self, AppError> {
        let title = validate::required_text("Title", &dto.title, MAX_TITLE_LENGTH)?;

        let category = match dto.category.trim() {
            "" => DEFAULT_CATEGORY.to_string(),
            category => validate::required_text("Category", category, MAX_CATEGORY_LENGTH)?,
        };

        let slug = dto
            .slug
            .map(|slug| slug.trim().to_string())
            .filter(|slug| !slug.is_empty());

        Ok(Self {
            title,
            slug,
            date: dto.date,
            category,
            content: dto.content,
            published: dto.published,
        })
    }
}

/// Row values written by the repository once the slug is final.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsRecord {
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
    pub category: String,
    pub content: String,
    pub published: bool,
}

/// Listing filters for news.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsFilter {
    pub category: Option<String>,
    /// Include unpublished drafts; only honored for admins.
    pub include_drafts: bool,
}
