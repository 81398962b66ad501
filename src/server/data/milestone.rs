//! Milestone data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::milestone::{Milestone, SaveMilestoneParam};

pub struct MilestoneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MilestoneRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every milestone, earliest date first.
    pub async fn get_all(&self) -> Result<Vec<Milestone>, DbErr> {
        let entities = entity::prelude::Milestone::find()
            .order_by_asc(entity::milestone::Column::Date)
            .order_by_asc(entity::milestone::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Milestone::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Milestone>, DbErr> {
        let entity = entity::prelude::Milestone::find_by_id(id)
            .one(self.db)
            .await?;
        Ok(entity.map(Milestone::from_entity))
    }

    pub async fn create(&self, param: SaveMilestoneParam) -> Result<Milestone, DbErr> {
        let entity = entity::milestone::ActiveModel {
            title: ActiveValue::Set(param.title),
            date: ActiveValue::Set(param.date),
            description: ActiveValue::Set(param.description),
            icon: ActiveValue::Set(param.icon),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Milestone::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        param: SaveMilestoneParam,
    ) -> Result<Option<Milestone>, DbErr> {
        let Some(existing) = entity::prelude::Milestone::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::milestone::ActiveModel = existing.into();
        active.title = ActiveValue::Set(param.title);
        active.date = ActiveValue::Set(param.date);
        active.description = ActiveValue::Set(param.description);
        active.icon = ActiveValue::Set(param.icon);

        let entity = active.update(self.db).await?;
        Ok(Some(Milestone::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Milestone::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Milestone::find().count(self.db).await
    }
}
