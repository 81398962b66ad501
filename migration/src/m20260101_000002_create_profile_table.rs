use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(pk_auto(Profile::Id))
                    .col(string_uniq(Profile::Slug))
                    .col(string(Profile::DisplayName))
                    .col(string_null(Profile::Nickname))
                    .col(text(Profile::Bio))
                    .col(string_null(Profile::AvatarUrl))
                    .col(date_null(Profile::Birthday))
                    .col(string_null(Profile::Quote))
                    .col(
                        timestamp_with_time_zone(Profile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Profile::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    Slug,
    DisplayName,
    Nickname,
    Bio,
    AvatarUrl,
    Birthday,
    Quote,
    CreatedAt,
    UpdatedAt,
}
