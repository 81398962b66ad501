//! News data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    news::{News, NewsFilter, NewsRecord},
    page::{Page, PageParam},
};

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of news, newest date first.
    ///
    /// Drafts are excluded unless `filter.include_drafts` is set; the caller decides
    /// whether the requester may see them.
    pub async fn get_paginated(
        &self,
        filter: &NewsFilter,
        page: PageParam,
    ) -> Result<Page<News>, DbErr> {
        let mut query = entity::prelude::News::find();

        if !filter.include_drafts {
            query = query.filter(entity::news::Column::Published.eq(true));
        }
        if let Some(category) = &filter.category {
            query = query.filter(entity::news::Column::Category.eq(category.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::news::Column::Date)
            .order_by_desc(entity::news::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(page.page)
            .await?
            .into_iter()
            .map(News::from_entity)
            .collect();

        Ok(Page {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<News>, DbErr> {
        let entity = entity::prelude::News::find_by_id(id).one(self.db).await?;
        Ok(entity.map(News::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<News>, DbErr> {
        let entity = entity::prelude::News::find()
            .filter(entity::news::Column::Slug.eq(slug))
            .one(self.db)
            .await?;
        Ok(entity.map(News::from_entity))
    }

    /// Checks whether `slug` is taken by a row other than `exclude_id`.
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::News::find().filter(entity::news::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::news::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(&self, record: NewsRecord) -> Result<News, DbErr> {
        let now = Utc::now();

        let entity = entity::news::ActiveModel {
            title: ActiveValue::Set(record.title),
            slug: ActiveValue::Set(record.slug),
            date: ActiveValue::Set(record.date),
            category: ActiveValue::Set(record.category),
            content: ActiveValue::Set(record.content),
            published: ActiveValue::Set(record.published),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(News::from_entity(entity))
    }

    /// # Returns
    /// - `Ok(Some(News))` - Updated news item
    /// - `Ok(None)` - No news with that id
    pub async fn update(&self, id: i32, record: NewsRecord) -> Result<Option<News>, DbErr> {
        let Some(existing) = entity::prelude::News::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::news::ActiveModel = existing.into();
        active.title = ActiveValue::Set(record.title);
        active.slug = ActiveValue::Set(record.slug);
        active.date = ActiveValue::Set(record.date);
        active.category = ActiveValue::Set(record.category);
        active.content = ActiveValue::Set(record.content);
        active.published = ActiveValue::Set(record.published);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(News::from_entity(entity)))
    }

    pub async fn set_published(&self, id: i32, published: bool) -> Result<Option<News>, DbErr> {
        let Some(existing) = entity::prelude::News::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::news::ActiveModel = existing.into();
        active.published = ActiveValue::Set(published);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(News::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::News::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Slugs and last-modified timestamps of published news, for the sitemap.
    pub async fn get_published_lastmod(&self) -> Result<Vec<(String, DateTime<Utc>)>, DbErr> {
        entity::prelude::News::find()
            .select_only()
            .column(entity::news::Column::Slug)
            .column(entity::news::Column::UpdatedAt)
            .filter(entity::news::Column::Published.eq(true))
            .order_by_desc(entity::news::Column::Date)
            .order_by_desc(entity::news::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }
}
