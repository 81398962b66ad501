//! Time capsule (message teaser) domain models.
//!
//! A capsule is sealed until its unlock time. Sealing is computed against an explicit
//! `now` so callers and tests agree on the boundary.

use chrono::{DateTime, Utc};

use crate::{
    model::capsule::{CapsuleDto, SaveCapsuleDto},
    server::{error::AppError, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Capsule {
    pub id: i32,
    pub title: String,
    pub teaser: String,
    pub content: String,
    pub unlock_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Capsule {
    /// Sealed strictly before `unlock_at`; open at or after it.
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        now < self.unlock_at
    }

    /// Whole seconds left, rounded up, so a sealed capsule never reports 0.
    pub fn seconds_until_unlock(&self, now: DateTime<Utc>) -> i64 {
        if !self.is_locked(now) {
            return 0;
        }
        let millis = (self.unlock_at - now).num_milliseconds();
        ((millis + 999) / 1000).max(1)
    }

    /// Public view: content is withheld while sealed.
    pub fn into_public_dto(self, now: DateTime<Utc>) -> CapsuleDto {
        let locked = self.is_locked(now);
        let seconds_until_unlock = self.seconds_until_unlock(now);

        CapsuleDto {
            id: self.id,
            title: self.title,
            teaser: self.teaser,
            content: (!locked).then_some(self.content),
            locked,
            unlock_at: self.unlock_at,
            seconds_until_unlock,
            created_at: self.created_at,
        }
    }

    /// Admin view: content is always included, lock state still reported.
    pub fn into_admin_dto(self, now: DateTime<Utc>) -> CapsuleDto {
        let locked = self.is_locked(now);
        let seconds_until_unlock = self.seconds_until_unlock(now);

        CapsuleDto {
            id: self.id,
            title: self.title,
            teaser: self.teaser,
            content: Some(self.content),
            locked,
            unlock_at: self.unlock_at,
            seconds_until_unlock,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::message_teaser::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            teaser: entity.teaser,
            content: entity.content,
            unlock_at: entity.unlock_at,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveCapsuleParam {
    pub title: String,
    pub teaser: String,
    pub content: String,
    pub unlock_at: DateTime<Utc>,
}

impl SaveCapsuleParam {
    pub fn from_dto(dto: SaveCapsuleDto) -> Result<Self, AppError> {
        Ok(Self {
            title: validate::required_text("Title", &dto.title, 200)?,
            teaser: validate::bounded_text("Teaser", &dto.teaser, 1_000)?,
            content: validate::required_text("Content", &dto.content, 20_000)?,
            unlock_at: dto.unlock_at,
        })
    }
}
