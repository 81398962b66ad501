use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Memory::Table)
                    .if_not_exists()
                    .col(pk_auto(Memory::Id))
                    .col(string(Memory::Title))
                    .col(date(Memory::Date))
                    .col(text(Memory::Description))
                    .col(string(Memory::Category).default("moment"))
                    .col(string_null(Memory::Mood))
                    .col(string_null(Memory::Location))
                    .col(text(Memory::Tags).default("[]"))
                    .col(
                        timestamp_with_time_zone(Memory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Memory::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_memory_date")
                    .table(Memory::Table)
                    .col(Memory::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Memory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Memory {
    Table,
    Id,
    Title,
    Date,
    Description,
    Category,
    Mood,
    Location,
    Tags,
    CreatedAt,
    UpdatedAt,
}
