//! Profile domain models.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::profile::{ProfileDto, SaveProfileDto},
    server::{
        error::AppError,
        util::{slug::is_valid_slug, validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i32,
    pub slug: String,
    pub display_name: String,
    pub nickname: Option<String>,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub quote: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.id,
            slug: self.slug,
            display_name: self.display_name,
            nickname: self.nickname,
            bio: self.bio,
            avatar_url: self.avatar_url,
            birthday: self.birthday,
            quote: self.quote,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::profile::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            display_name: entity.display_name,
            nickname: entity.nickname,
            bio: entity.bio,
            avatar_url: entity.avatar_url,
            birthday: entity.birthday,
            quote: entity.quote,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveProfileParam {
    pub slug: String,
    pub display_name: String,
    pub nickname: Option<String>,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub quote: Option<String>,
}

impl SaveProfileParam {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Slug outside `[a-z0-9-]{1,64}` or blank display name
    pub fn from_dto(dto: SaveProfileDto) -> Result<Self, AppError> {
        let slug = dto.slug.trim().to_string();
        if !is_valid_slug(&slug) {
            return Err(AppError::BadRequest(
                "Slug must be 1-64 characters of lowercase letters, digits and hyphens"
                    .to_string(),
            ));
        }

        Ok(Self {
            slug,
            display_name: validate::required_text("Display name", &dto.display_name, 100)?,
            nickname: validate::optional_text("Nickname", dto.nickname, 100)?,
            bio: validate::bounded_text("Bio", &dto.bio, 10_000)?,
            avatar_url: validate::optional_text("Avatar url", dto.avatar_url, 2048)?,
            birthday: dto.birthday,
            quote: validate::optional_text("Quote", dto.quote, 500)?,
        })
    }
}
