//! Milestone service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::milestone::MilestoneRepository,
    error::AppError,
    model::milestone::{Milestone, SaveMilestoneParam},
};

pub struct MilestoneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MilestoneService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Milestone>, AppError> {
        Ok(MilestoneRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, param: SaveMilestoneParam) -> Result<Milestone, AppError> {
        Ok(MilestoneRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, id: i32, param: SaveMilestoneParam) -> Result<Milestone, AppError> {
        MilestoneRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MilestoneRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Milestone not found".to_string())
}
