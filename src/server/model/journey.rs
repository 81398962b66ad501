//! Journey (timeline) domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::journey::{JourneyDto, SaveJourneyDto},
    server::{error::AppError, util::validate},
};

const MAX_TITLE_LENGTH: usize = 200;
const MAX_DESCRIPTION_LENGTH: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    pub id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl Journey {
    pub fn into_dto(self) -> JourneyDto {
        JourneyDto {
            id: self.id,
            title: self.title,
            date: self.date,
            description: self.description,
            image_url: self.image_url,
            sort_order: self.sort_order,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::journey::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            date: entity.date,
            description: entity.description,
            image_url: entity.image_url,
            sort_order: entity.sort_order,
            created_at: entity.created_at,
        }
    }
}

/// Validated journey input. `sort_order` of `None` means "append" on create and
/// "keep" on update.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveJourneyParam {
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
}

impl SaveJourneyParam {
    pub fn from_dto(dto: SaveJourneyDto) -> Result<Self, AppError> {
        Ok(Self {
            title: validate::required_text("Title", &dto.title, MAX_TITLE_LENGTH)?,
            date: dto.date,
            description: validate::bounded_text(
                "Description",
                &dto.description,
                MAX_DESCRIPTION_LENGTH,
            )?,
            image_url: validate::optional_text("Image url", dto.image_url, 2048)?,
            sort_order: dto.sort_order,
        })
    }
}
