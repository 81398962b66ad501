//! Time capsule repository over the `message_teaser` table.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::capsule::{Capsule, SaveCapsuleParam};

pub struct CapsuleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CapsuleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every capsule, soonest unlock first.
    pub async fn get_all(&self) -> Result<Vec<Capsule>, DbErr> {
        let entities = entity::prelude::MessageTeaser::find()
            .order_by_asc(entity::message_teaser::Column::UnlockAt)
            .order_by_asc(entity::message_teaser::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Capsule::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Capsule>, DbErr> {
        let entity = entity::prelude::MessageTeaser::find_by_id(id)
            .one(self.db)
            .await?;
        Ok(entity.map(Capsule::from_entity))
    }

    pub async fn create(&self, param: SaveCapsuleParam) -> Result<Capsule, DbErr> {
        let entity = entity::message_teaser::ActiveModel {
            title: ActiveValue::Set(param.title),
            teaser: ActiveValue::Set(param.teaser),
            content: ActiveValue::Set(param.content),
            unlock_at: ActiveValue::Set(param.unlock_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Capsule::from_entity(entity))
    }

    pub async fn update(&self, id: i32, param: SaveCapsuleParam) -> Result<Option<Capsule>, DbErr> {
        let Some(existing) = entity::prelude::MessageTeaser::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::message_teaser::ActiveModel = existing.into();
        active.title = ActiveValue::Set(param.title);
        active.teaser = ActiveValue::Set(param.teaser);
        active.content = ActiveValue::Set(param.content);
        active.unlock_at = ActiveValue::Set(param.unlock_at);

        let entity = active.update(self.db).await?;
        Ok(Some(Capsule::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MessageTeaser::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
