//! Profile factory for creating test profiles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a profile with the given slug.
pub async fn create_profile_with_slug(
    db: &DatabaseConnection,
    slug: impl Into<String>,
) -> Result<entity::profile::Model, DbErr> {
    let now = Utc::now();
    entity::profile::ActiveModel {
        slug: ActiveValue::Set(slug.into()),
        display_name: ActiveValue::Set(format!("Person {}", next_id())),
        nickname: ActiveValue::Set(None),
        bio: ActiveValue::Set("Likes long walks".to_string()),
        avatar_url: ActiveValue::Set(None),
        birthday: ActiveValue::Set(None),
        quote: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a profile with a unique `person-{id}` slug.
pub async fn create_profile(db: &DatabaseConnection) -> Result<entity::profile::Model, DbErr> {
    create_profile_with_slug(db, format!("person-{}", next_id())).await
}
