//! Milestone factory for creating test milestones.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a milestone on the given date.
pub async fn create_milestone_on(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<entity::milestone::Model, DbErr> {
    entity::milestone::ActiveModel {
        title: ActiveValue::Set(format!("Milestone {}", next_id())),
        date: ActiveValue::Set(date),
        description: ActiveValue::Set(None),
        icon: ActiveValue::Set(Some("heart".to_string())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a milestone dated 2024-02-14.
pub async fn create_milestone(db: &DatabaseConnection) -> Result<entity::milestone::Model, DbErr> {
    create_milestone_on(db, NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()).await
}
