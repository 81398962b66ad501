use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(pk_auto(News::Id))
                    .col(string(News::Title))
                    .col(string_uniq(News::Slug))
                    .col(date(News::Date))
                    .col(string(News::Category).default("update"))
                    .col(text(News::Content))
                    .col(boolean(News::Published).default(false))
                    .col(
                        timestamp_with_time_zone(News::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(News::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum News {
    Table,
    Id,
    Title,
    Slug,
    Date,
    Category,
    Content,
    Published,
    CreatedAt,
    UpdatedAt,
}
