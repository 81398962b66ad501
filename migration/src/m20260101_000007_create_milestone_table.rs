use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Milestone::Table)
                    .if_not_exists()
                    .col(pk_auto(Milestone::Id))
                    .col(string(Milestone::Title))
                    .col(date(Milestone::Date))
                    .col(text_null(Milestone::Description))
                    .col(string_null(Milestone::Icon))
                    .col(
                        timestamp_with_time_zone(Milestone::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Milestone::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Milestone {
    Table,
    Id,
    Title,
    Date,
    Description,
    Icon,
    CreatedAt,
}
