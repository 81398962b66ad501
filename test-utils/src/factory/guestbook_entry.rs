//! Guestbook entry factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::guestbook_entry::GuestbookStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a guestbook entry with the given moderation status.
///
/// Non-pending entries get `moderated_at` set to now.
pub async fn create_guestbook_entry_with_status(
    db: &DatabaseConnection,
    status: GuestbookStatus,
) -> Result<entity::guestbook_entry::Model, DbErr> {
    let now = Utc::now();
    let moderated_at = match status {
        GuestbookStatus::Pending => None,
        _ => Some(now),
    };

    entity::guestbook_entry::ActiveModel {
        name: ActiveValue::Set(format!("Guest {}", next_id())),
        message: ActiveValue::Set("Congratulations!".to_string()),
        status: ActiveValue::Set(status),
        created_at: ActiveValue::Set(now),
        moderated_at: ActiveValue::Set(moderated_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a pending guestbook entry.
pub async fn create_guestbook_entry(
    db: &DatabaseConnection,
) -> Result<entity::guestbook_entry::Model, DbErr> {
    create_guestbook_entry_with_status(db, GuestbookStatus::Pending).await
}
