//! Message teaser (time capsule) factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a capsule unlocking at the given instant.
pub async fn create_message_teaser_unlocking_at(
    db: &DatabaseConnection,
    unlock_at: DateTime<Utc>,
) -> Result<entity::message_teaser::Model, DbErr> {
    entity::message_teaser::ActiveModel {
        title: ActiveValue::Set(format!("Capsule {}", next_id())),
        teaser: ActiveValue::Set("Open me on our anniversary".to_string()),
        content: ActiveValue::Set("I love you".to_string()),
        unlock_at: ActiveValue::Set(unlock_at),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a capsule unlocking thirty days from now.
pub async fn create_message_teaser(
    db: &DatabaseConnection,
) -> Result<entity::message_teaser::Model, DbErr> {
    create_message_teaser_unlocking_at(db, Utc::now() + Duration::days(30)).await
}
