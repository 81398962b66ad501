//! Relationship milestone domain models.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::milestone::{MilestoneDto, SaveMilestoneDto},
    server::{error::AppError, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Milestone {
    /// Whole days from `today` to the milestone; negative once it has passed.
    pub fn days_from(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }

    pub fn into_dto(self, today: NaiveDate) -> MilestoneDto {
        let days_from_today = self.days_from(today);

        MilestoneDto {
            id: self.id,
            title: self.title,
            date: self.date,
            description: self.description,
            icon: self.icon,
            days_from_today,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::milestone::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            date: entity.date,
            description: entity.description,
            icon: entity.icon,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveMilestoneParam {
    pub title: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl SaveMilestoneParam {
    pub fn from_dto(dto: SaveMilestoneDto) -> Result<Self, AppError> {
        Ok(Self {
            title: validate::required_text("Title", &dto.title, 200)?,
            date: dto.date,
            description: validate::optional_text("Description", dto.description, 5_000)?,
            icon: validate::optional_text("Icon", dto.icon, 64)?,
        })
    }
}
