//! Journey (timeline) service.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::journey::JourneyRepository,
    error::AppError,
    model::journey::{Journey, SaveJourneyParam},
};

pub struct JourneyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JourneyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Journey>, AppError> {
        Ok(JourneyRepository::new(self.db).get_all().await?)
    }

    /// Creates an entry; without an explicit sort order it is placed after the last one.
    pub async fn create(&self, param: SaveJourneyParam) -> Result<Journey, AppError> {
        let repo = JourneyRepository::new(self.db);

        let sort_order = match param.sort_order {
            Some(sort_order) => sort_order,
            None => repo.max_sort_order().await?.map_or(0, |max| max + 1),
        };

        Ok(repo.create(param, sort_order).await?)
    }

    pub async fn update(&self, id: i32, param: SaveJourneyParam) -> Result<Journey, AppError> {
        JourneyRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !JourneyRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }
        Ok(())
    }

    /// Assigns `sort_order = index` for each id in `ids`.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty list, duplicate ids, or ids that do not exist
    pub async fn reorder(&self, ids: &[i32]) -> Result<Vec<Journey>, AppError> {
        if ids.is_empty() {
            return Err(AppError::BadRequest("No journey ids provided".to_string()));
        }

        let unique: HashSet<i32> = ids.iter().copied().collect();
        if unique.len() != ids.len() {
            return Err(AppError::BadRequest(
                "Journey ids must not repeat".to_string(),
            ));
        }

        let repo = JourneyRepository::new(self.db);
        if repo.count_existing(ids).await? != ids.len() as u64 {
            return Err(AppError::BadRequest(
                "One or more journey ids do not exist".to_string(),
            ));
        }

        repo.reorder(ids).await?;
        tracing::debug!("Reordered {} journey entries", ids.len());

        Ok(repo.get_all().await?)
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Journey entry not found".to_string())
}
