use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuestbookEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(GuestbookEntry::Id))
                    .col(string(GuestbookEntry::Name))
                    .col(text(GuestbookEntry::Message))
                    .col(string(GuestbookEntry::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(GuestbookEntry::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(GuestbookEntry::ModeratedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guestbook_entry_status")
                    .table(GuestbookEntry::Table)
                    .col(GuestbookEntry::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuestbookEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuestbookEntry {
    Table,
    Id,
    Name,
    Message,
    Status,
    CreatedAt,
    ModeratedAt,
}
