//! Journey (timeline) data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::journey::{Journey, SaveJourneyParam};

pub struct JourneyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JourneyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every entry ordered by sort_order, then date, then id.
    pub async fn get_all(&self) -> Result<Vec<Journey>, DbErr> {
        let entities = entity::prelude::Journey::find()
            .order_by_asc(entity::journey::Column::SortOrder)
            .order_by_asc(entity::journey::Column::Date)
            .order_by_asc(entity::journey::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Journey::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Journey>, DbErr> {
        let entity = entity::prelude::Journey::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Journey::from_entity))
    }

    /// Highest sort_order in use, `None` for an empty table.
    pub async fn max_sort_order(&self) -> Result<Option<i32>, DbErr> {
        let max: Option<Option<i32>> = entity::prelude::Journey::find()
            .select_only()
            .column_as(entity::journey::Column::SortOrder.max(), "max_sort_order")
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(max.flatten())
    }

    /// Inserts an entry at `sort_order`; the param's own sort_order is ignored.
    pub async fn create(&self, param: SaveJourneyParam, sort_order: i32) -> Result<Journey, DbErr> {
        let entity = entity::journey::ActiveModel {
            title: ActiveValue::Set(param.title),
            date: ActiveValue::Set(param.date),
            description: ActiveValue::Set(param.description),
            image_url: ActiveValue::Set(param.image_url),
            sort_order: ActiveValue::Set(sort_order),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Journey::from_entity(entity))
    }

    /// Updates an entry; a `None` sort_order keeps the current position.
    pub async fn update(&self, id: i32, param: SaveJourneyParam) -> Result<Option<Journey>, DbErr> {
        let Some(existing) = entity::prelude::Journey::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::journey::ActiveModel = existing.into();
        active.title = ActiveValue::Set(param.title);
        active.date = ActiveValue::Set(param.date);
        active.description = ActiveValue::Set(param.description);
        active.image_url = ActiveValue::Set(param.image_url);
        if let Some(sort_order) = param.sort_order {
            active.sort_order = ActiveValue::Set(sort_order);
        }

        let entity = active.update(self.db).await?;
        Ok(Some(Journey::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Journey::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Journey::find().count(self.db).await
    }

    /// Number of rows whose id is in `ids`.
    pub async fn count_existing(&self, ids: &[i32]) -> Result<u64, DbErr> {
        entity::prelude::Journey::find()
            .filter(entity::journey::Column::Id.is_in(ids.iter().copied()))
            .count(self.db)
            .await
    }

    /// Sets each entry's sort_order to its index in `ids`, in one transaction.
    pub async fn reorder(&self, ids: &[i32]) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        for (index, id) in ids.iter().enumerate() {
            entity::prelude::Journey::update_many()
                .col_expr(entity::journey::Column::SortOrder, Expr::value(index as i32))
                .filter(entity::journey::Column::Id.eq(*id))
                .exec(&txn)
                .await?;
        }

        txn.commit().await
    }
}
