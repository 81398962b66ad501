//! Memory service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::memory::MemoryRepository,
    error::AppError,
    model::{
        memory::{Memory, MemoryFilter, SaveMemoryParam},
        page::{Page, PageParam},
    },
};

pub struct MemoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: MemoryFilter,
        page: PageParam,
    ) -> Result<Page<Memory>, AppError> {
        MemoryRepository::new(self.db)
            .get_paginated(&filter, page)
            .await
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No memory with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Memory, AppError> {
        MemoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn create(&self, param: SaveMemoryParam) -> Result<Memory, AppError> {
        let memory = MemoryRepository::new(self.db).create(param).await?;
        tracing::info!("Created memory {}", memory.id);
        Ok(memory)
    }

    pub async fn update(&self, id: i32, param: SaveMemoryParam) -> Result<Memory, AppError> {
        MemoryRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MemoryRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }
        tracing::info!("Deleted memory {}", id);
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Memory not found".to_string())
}
