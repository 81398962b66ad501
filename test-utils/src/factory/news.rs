//! News factory for creating test news entries.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test news entries with customizable fields.
pub struct NewsFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    date: NaiveDate,
    category: String,
    published: bool,
}

impl<'a> NewsFactory<'a> {
    /// Creates a new NewsFactory with default values.
    ///
    /// Defaults:
    /// - title: `"News {id}"`, slug: `"news-{id}"`
    /// - date: 2024-06-01
    /// - category: `"update"`
    /// - published: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("News {}", id),
            slug: format!("news-{}", id),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            category: "update".to_string(),
            published: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Builds and inserts the news entity into the database.
    pub async fn build(self) -> Result<entity::news::Model, DbErr> {
        let now = Utc::now();
        entity::news::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            date: ActiveValue::Set(self.date),
            category: ActiveValue::Set(self.category),
            content: ActiveValue::Set("Some **news**".to_string()),
            published: ActiveValue::Set(self.published),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published news entry with default values.
pub async fn create_news(db: &DatabaseConnection) -> Result<entity::news::Model, DbErr> {
    NewsFactory::new(db).build().await
}
