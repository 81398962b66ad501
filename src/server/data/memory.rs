//! Memory data repository.
//!
//! Memories are stored with their tags as a JSON array in a text column and their
//! images in the `memory_image` table. Writes that touch both tables run inside a
//! transaction so a memory never ends up with a partial image list.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::LikeExpr,
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::{
        memory::{encode_tags, normalize_tag, Memory, MemoryFilter, MemoryImage, SaveMemoryParam},
        page::{Page, PageParam},
    },
};

const LIKE_ESCAPE: char = '\\';

pub struct MemoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of memories, newest date first, ties broken by id descending.
    ///
    /// Filters are exact matches. The tag filter is normalized before matching and a
    /// filter that normalizes to nothing is ignored.
    ///
    /// # Returns
    /// - `Ok(Page<Memory>)` - Memories for the page with their images
    /// - `Err(AppError::DbErr)` - Database error
    /// - `Err(AppError::InternalErr)` - A stored tags column could not be parsed
    pub async fn get_paginated(
        &self,
        filter: &MemoryFilter,
        page: PageParam,
    ) -> Result<Page<Memory>, AppError> {
        let mut query = entity::prelude::Memory::find();

        if let Some(category) = &filter.category {
            query = query.filter(entity::memory::Column::Category.eq(category.as_str()));
        }
        if let Some(mood) = &filter.mood {
            query = query.filter(entity::memory::Column::Mood.eq(mood.as_str()));
        }
        if let Some(tag) = filter.tag.as_deref().map(normalize_tag) {
            if !tag.is_empty() {
                let pattern = tag_like_pattern(&tag)?;
                query = query.filter(
                    entity::memory::Column::Tags.like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
                );
            }
        }

        let paginator = query
            .order_by_desc(entity::memory::Column::Date)
            .order_by_desc(entity::memory::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.page).await?;

        let ids: Vec<i32> = entities.iter().map(|m| m.id).collect();
        let mut images = load_images(self.db, &ids).await?;

        let items = entities
            .into_iter()
            .map(|entity| {
                let memory_images = images.remove(&entity.id).unwrap_or_default();
                Memory::from_entity(entity, memory_images)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    /// Finds a memory with its images ordered by position.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Memory>, AppError> {
        let Some(entity) = entity::prelude::Memory::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let images = load_images(self.db, &[id]).await?.remove(&id).unwrap_or_default();

        Ok(Some(Memory::from_entity(entity, images)?))
    }

    /// Inserts a memory and its images in one transaction.
    pub async fn create(&self, param: SaveMemoryParam) -> Result<Memory, AppError> {
        let tags = encode_tags(&param.tags)?;
        let now = Utc::now();

        let txn = self.db.begin().await?;

        let entity = entity::memory::ActiveModel {
            title: ActiveValue::Set(param.title),
            date: ActiveValue::Set(param.date),
            description: ActiveValue::Set(param.description),
            category: ActiveValue::Set(param.category),
            mood: ActiveValue::Set(param.mood),
            location: ActiveValue::Set(param.location),
            tags: ActiveValue::Set(tags),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let images = insert_images(&txn, entity.id, param.images).await?;

        txn.commit().await?;

        Memory::from_entity(entity, images)
    }

    /// Replaces a memory's fields and its entire image list.
    ///
    /// # Returns
    /// - `Ok(Some(Memory))` - Updated memory
    /// - `Ok(None)` - No memory with that id
    pub async fn update(&self, id: i32, param: SaveMemoryParam) -> Result<Option<Memory>, AppError> {
        let tags = encode_tags(&param.tags)?;

        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Memory::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: entity::memory::ActiveModel = existing.into();
        active.title = ActiveValue::Set(param.title);
        active.date = ActiveValue::Set(param.date);
        active.description = ActiveValue::Set(param.description);
        active.category = ActiveValue::Set(param.category);
        active.mood = ActiveValue::Set(param.mood);
        active.location = ActiveValue::Set(param.location);
        active.tags = ActiveValue::Set(tags);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(&txn).await?;

        entity::prelude::MemoryImage::delete_many()
            .filter(entity::memory_image::Column::MemoryId.eq(id))
            .exec(&txn)
            .await?;
        let images = insert_images(&txn, id, param.images).await?;

        txn.commit().await?;

        Ok(Some(Memory::from_entity(entity, images)?))
    }

    /// Deletes a memory and its images.
    ///
    /// # Returns
    /// - `Ok(true)` - Memory deleted
    /// - `Ok(false)` - No memory with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::MemoryImage::delete_many()
            .filter(entity::memory_image::Column::MemoryId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Memory::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Ids and last-modified timestamps of every memory, for the sitemap.
    pub async fn get_all_lastmod(&self) -> Result<Vec<(i32, DateTime<Utc>)>, DbErr> {
        entity::prelude::Memory::find()
            .select_only()
            .column(entity::memory::Column::Id)
            .column(entity::memory::Column::UpdatedAt)
            .order_by_desc(entity::memory::Column::Date)
            .order_by_desc(entity::memory::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }
}

/// Loads images for the given memories, grouped by memory id and ordered by position.
async fn load_images<C: ConnectionTrait>(
    conn: &C,
    memory_ids: &[i32],
) -> Result<HashMap<i32, Vec<entity::memory_image::Model>>, DbErr> {
    if memory_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let images = entity::prelude::MemoryImage::find()
        .filter(entity::memory_image::Column::MemoryId.is_in(memory_ids.iter().copied()))
        .order_by_asc(entity::memory_image::Column::MemoryId)
        .order_by_asc(entity::memory_image::Column::Position)
        .all(conn)
        .await?;

    let mut grouped: HashMap<i32, Vec<entity::memory_image::Model>> = HashMap::new();
    for image in images {
        grouped.entry(image.memory_id).or_default().push(image);
    }

    Ok(grouped)
}

/// Inserts images with positions following their order in `images`.
async fn insert_images<C: ConnectionTrait>(
    conn: &C,
    memory_id: i32,
    images: Vec<MemoryImage>,
) -> Result<Vec<entity::memory_image::Model>, DbErr> {
    let mut inserted = Vec::with_capacity(images.len());

    for (position, image) in images.into_iter().enumerate() {
        let model = entity::memory_image::ActiveModel {
            memory_id: ActiveValue::Set(memory_id),
            url: ActiveValue::Set(image.url),
            caption: ActiveValue::Set(image.caption),
            position: ActiveValue::Set(position as i32),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        inserted.push(model);
    }

    Ok(inserted)
}

/// `LIKE` pattern matching `tag` as one element of the stored JSON array.
///
/// The tag is JSON-encoded the same way the column is written, then `\`, `%` and `_`
/// are escaped so they match literally.
fn tag_like_pattern(tag: &str) -> Result<String, AppError> {
    let encoded = encode_tags(&[tag.to_string()])?;
    let element = encoded.trim_start_matches('[').trim_end_matches(']');

    let mut pattern = String::with_capacity(element.len() + 2);
    pattern.push('%');
    for c in element.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    Ok(pattern)
}
