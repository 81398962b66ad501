//! Time capsule service.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::capsule::CapsuleRepository,
    error::AppError,
    model::capsule::{Capsule, SaveCapsuleParam},
};

pub struct CapsuleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CapsuleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Capsule>, AppError> {
        Ok(CapsuleRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Capsule, AppError> {
        CapsuleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// # Returns
    /// - `Err(AppError::BadRequest)` - `unlock_at` is not after `now`
    pub async fn create(
        &self,
        param: SaveCapsuleParam,
        now: DateTime<Utc>,
    ) -> Result<Capsule, AppError> {
        if param.unlock_at <= now {
            return Err(AppError::BadRequest(
                "Unlock time must be in the future".to_string(),
            ));
        }

        let capsule = CapsuleRepository::new(self.db).create(param).await?;
        tracing::info!("Sealed capsule {} until {}", capsule.id, capsule.unlock_at);

        Ok(capsule)
    }

    pub async fn update(&self, id: i32, param: SaveCapsuleParam) -> Result<Capsule, AppError> {
        CapsuleRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CapsuleRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Capsule not found".to_string())
}
