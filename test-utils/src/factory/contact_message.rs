//! Contact message factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a contact message with the given read flag.
pub async fn create_contact_message_with_read(
    db: &DatabaseConnection,
    read: bool,
) -> Result<entity::contact_message::Model, DbErr> {
    let id = next_id();
    entity::contact_message::ActiveModel {
        name: ActiveValue::Set(format!("Visitor {}", id)),
        email: ActiveValue::Set(format!("visitor{}@example.com", id)),
        subject: ActiveValue::Set(None),
        message: ActiveValue::Set("Lovely site!".to_string()),
        read: ActiveValue::Set(read),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an unread contact message.
pub async fn create_contact_message(
    db: &DatabaseConnection,
) -> Result<entity::contact_message::Model, DbErr> {
    create_contact_message_with_read(db, false).await
}
