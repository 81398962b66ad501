//! Memory factory for creating test memories and their image attachments.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test memories with customizable fields.
pub struct MemoryFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    date: NaiveDate,
    category: String,
    mood: Option<String>,
    tags: Vec<String>,
}

impl<'a> MemoryFactory<'a> {
    /// Creates a new MemoryFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Memory {id}"`
    /// - date: 2024-02-14
    /// - category: `"moment"`
    /// - no mood, no tags
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Memory {}", id),
            date: NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
            category: "moment".to_string(),
            mood: None,
            tags: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
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

    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// Sets the tags; they are stored as given, without normalization.
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Builds and inserts the memory entity into the database.
    pub async fn build(self) -> Result<entity::memory::Model, DbErr> {
        let tags = serde_json::to_string(&self.tags).map_err(|e| DbErr::Custom(e.to_string()))?;
        let now = Utc::now();

        entity::memory::ActiveModel {
            title: ActiveValue::Set(self.title),
            date: ActiveValue::Set(self.date),
            description: ActiveValue::Set("A day worth remembering".to_string()),
            category: ActiveValue::Set(self.category),
            mood: ActiveValue::Set(self.mood),
            location: ActiveValue::Set(None),
            tags: ActiveValue::Set(tags),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a memory with default values.
pub async fn create_memory(db: &DatabaseConnection) -> Result<entity::memory::Model, DbErr> {
    MemoryFactory::new(db).build().await
}

/// Creates an image attachment for a memory at the given position.
pub async fn create_memory_image(
    db: &DatabaseConnection,
    memory_id: i32,
    position: i32,
) -> Result<entity::memory_image::Model, DbErr> {
    entity::memory_image::ActiveModel {
        memory_id: ActiveValue::Set(memory_id),
        url: ActiveValue::Set(format!("/uploads/image-{}.jpg", next_id())),
        caption: ActiveValue::Set(None),
        position: ActiveValue::Set(position),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_memory_with_images};

    #[tokio::test]
    async fn creates_memory_with_images() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_memory_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (memory, images) = create_memory_with_images(db, 3).await?;

        assert_eq!(memory.tags, "[]");
        assert_eq!(images.len(), 3);
        assert!(images.iter().all(|i| i.memory_id == memory.id));

        Ok(())
    }
}
