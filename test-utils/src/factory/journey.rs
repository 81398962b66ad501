//! Journey factory for creating test timeline entries.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a journey entry with the given date and sort order.
pub async fn create_journey_with(
    db: &DatabaseConnection,
    date: NaiveDate,
    sort_order: i32,
) -> Result<entity::journey::Model, DbErr> {
    entity::journey::ActiveModel {
        title: ActiveValue::Set(format!("Chapter {}", next_id())),
        date: ActiveValue::Set(date),
        description: ActiveValue::Set("Where it all began".to_string()),
        image_url: ActiveValue::Set(None),
        sort_order: ActiveValue::Set(sort_order),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a journey entry dated 2023-01-01 with sort order 0.
pub async fn create_journey(db: &DatabaseConnection) -> Result<entity::journey::Model, DbErr> {
    create_journey_with(db, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), 0).await
}
