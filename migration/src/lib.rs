pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_profile_table;
mod m20260101_000003_create_memory_table;
mod m20260101_000004_create_memory_image_table;
mod m20260101_000005_create_news_table;
mod m20260101_000006_create_journey_table;
mod m20260101_000007_create_milestone_table;
mod m20260101_000008_create_contact_message_table;
mod m20260101_000009_create_guestbook_entry_table;
mod m20260101_000010_create_message_teaser_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_profile_table::Migration),
            Box::new(m20260101_000003_create_memory_table::Migration),
            Box::new(m20260101_000004_create_memory_image_table::Migration),
            Box::new(m20260101_000005_create_news_table::Migration),
            Box::new(m20260101_000006_create_journey_table::Migration),
            Box::new(m20260101_000007_create_milestone_table::Migration),
            Box::new(m20260101_000008_create_contact_message_table::Migration),
            Box::new(m20260101_000009_create_guestbook_entry_table::Migration),
            Box::new(m20260101_000010_create_message_teaser_table::Migration),
        ]
    }
}
