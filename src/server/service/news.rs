//! News service: slug allocation, draft visibility and publishing.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::news::NewsRepository,
    error::AppError,
    model::{
        news::{News, NewsFilter, NewsRecord, SaveNewsParam},
        page::{Page, PageParam},
    },
    util::slug::{slugify, with_suffix},
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists news; drafts are only included when requested by an admin.
    pub async fn get_paginated(
        &self,
        mut filter: NewsFilter,
        is_admin: bool,
        page: PageParam,
    ) -> Result<Page<News>, AppError> {
        filter.include_drafts &= is_admin;
        let news = NewsRepository::new(self.db)
            .get_paginated(&filter, page)
            .await?;
        Ok(news)
    }

    /// Gets a news item by slug; drafts are hidden from non-admins.
    pub async fn get_by_slug(&self, slug: &str, is_admin: bool) -> Result<News, AppError> {
        match NewsRepository::new(self.db).find_by_slug(slug).await? {
            Some(news) if news.published || is_admin => Ok(news),
            _ => Err(not_found()),
        }
    }

    pub async fn create(&self, param: SaveNewsParam) -> Result<News, AppError> {
        let slug = self.unique_slug(&param, None).await?;
        let news = NewsRepository::new(self.db)
            .create(into_record(param, slug))
            .await?;

        tracing::info!("Created news {} ({})", news.id, news.slug);

        Ok(news)
    }

    pub async fn update(&self, id: i32, param: SaveNewsParam) -> Result<News, AppError> {
        let repo = NewsRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found());
        }

        let slug = self.unique_slug(&param, Some(id)).await?;
        repo.update(id, into_record(param, slug))
            .await?
            .ok_or_else(not_found)
    }

    pub async fn set_published(&self, id: i32, published: bool) -> Result<News, AppError> {
        let news = NewsRepository::new(self.db)
            .set_published(id, published)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("News {} published={}", news.id, news.published);

        Ok(news)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !NewsRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }
        Ok(())
    }

    /// Slugifies the requested slug (or the title) and appends `-2`, `-3`, ... until it
    /// no longer collides with another row.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Nothing slug-worthy in the slug or title
    async fn unique_slug(
        &self,
        param: &SaveNewsParam,
        exclude_id: Option<i32>,
    ) -> Result<String, AppError> {
        let base = slugify(param.slug.as_deref().unwrap_or(&param.title));
        if base.is_empty() {
            return Err(AppError::BadRequest(
                "Title must contain at least one letter or digit".to_string(),
            ));
        }

        let repo = NewsRepository::new(self.db);
        let mut candidate = base.clone();
        let mut suffix = 2;

        while repo.slug_exists(&candidate, exclude_id).await? {
            candidate = with_suffix(&base, suffix);
            suffix += 1;
        }

        Ok(candidate)
    }
}

fn into_record(param: SaveNewsParam, slug: String) -> NewsRecord {
    NewsRecord {
        title: param.title,
        slug,
        date: param.date,
        category: param.category,
        content: param.content,
        published: param.published,
    }
}

fn not_found() -> AppError {
    AppError::NotFound("News not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_utils::{builder::TestBuilder, factory};

    fn param(title: &str, slug: Option<&str>) -> SaveNewsParam {
        SaveNewsParam {
            title: title.to_string(),
            slug: slug.map(str::to_string),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            category: "update".to_string(),
            content: "# Hello".to_string(),
            published: true,
        }
    }

    #[tokio::test]
    async fn derives_slug_and_suffixes_collisions() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::News)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = NewsService::new(db);
        let first = service.create(param("Big News!", None)).await?;
        let second = service.create(param("Big news", None)).await?;
        let third = service.create(param("Other", Some("Big News"))).await?;

        assert_eq!(first.slug, "big-news");
        assert_eq!(second.slug, "big-news-2");
        assert_eq!(third.slug, "big-news-3");

        Ok(())
    }

    /// Tests slug derivation from a title with accented letters.
    ///
    /// Expected: Ok with the letters transliterated instead of dropped
    #[tokio::test]
    async fn transliterates_accented_titles() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::News)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let news = NewsService::new(db).create(param("Café", None)).await?;

        assert_eq!(news.slug, "cafe");

        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_own_slug() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::News)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = NewsService::new(db);
        let news = service.create(param("Big News", None)).await?;
        let updated = service.update(news.id, param("Big News", None)).await?;

        assert_eq!(updated.slug, "big-news");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_title_without_slug_characters() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::News)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = NewsService::new(db).create(param("!!!", None)).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn drafts_are_hidden_from_visitors() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::News)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let draft = factory::news::NewsFactory::new(db)
            .slug("secret")
            .published(false)
            .build()
            .await?;

        let service = NewsService::new(db);

        assert!(matches!(
            service.get_by_slug("secret", false).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(service.get_by_slug("secret", true).await?.id, draft.id);

        let filter = NewsFilter {
            category: None,
            include_drafts: true,
        };
        let first_page = PageParam {
            page: 0,
            per_page: 10,
        };
        assert_eq!(
            service
                .get_paginated(filter.clone(), false, first_page)
                .await?
                .total,
            0
        );
        assert_eq!(service.get_paginated(filter, true, first_page).await?.total, 1);

        Ok(())
    }
}
