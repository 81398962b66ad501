use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Journey::Table)
                    .if_not_exists()
                    .col(pk_auto(Journey::Id))
                    .col(string(Journey::Title))
                    .col(date(Journey::Date))
                    .col(text(Journey::Description))
                    .col(string_null(Journey::ImageUrl))
                    .col(integer(Journey::SortOrder).default(0))
                    .col(
                        timestamp_with_time_zone(Journey::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Journey::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Journey {
    Table,
    Id,
    Title,
    Date,
    Description,
    ImageUrl,
    SortOrder,
    CreatedAt,
}
