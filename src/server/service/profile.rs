//! Profile service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::profile::ProfileRepository,
    error::AppError,
    model::profile::{Profile, SaveProfileParam},
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Profile>, AppError> {
        Ok(ProfileRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Profile, AppError> {
        ProfileRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(not_found)
    }

    /// # Returns
    /// - `Err(AppError::Conflict)` - Another profile already uses the slug
    pub async fn create(&self, param: SaveProfileParam) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);
        if repo.slug_exists(&param.slug, None).await? {
            return Err(conflict(&param.slug));
        }

        let profile = repo.create(param).await?;
        tracing::info!("Created profile {}", profile.slug);

        Ok(profile)
    }

    /// Updates the profile at `slug`; the new slug may differ but must stay unique.
    pub async fn update(&self, slug: &str, param: SaveProfileParam) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);
        let existing = repo.find_by_slug(slug).await?.ok_or_else(not_found)?;

        if repo.slug_exists(&param.slug, Some(existing.id)).await? {
            return Err(conflict(&param.slug));
        }

        repo.update(slug, param).await?.ok_or_else(not_found)
    }

    pub async fn delete(&self, slug: &str) -> Result<(), AppError> {
        if !ProfileRepository::new(self.db).delete_by_slug(slug).await? {
            return Err(not_found());
        }
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Profile not found".to_string())
}

fn conflict(slug: &str) -> AppError {
    AppError::Conflict(format!("Profile slug {} is already taken", slug))
}
