use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MessageTeaser::Table)
                    .if_not_exists()
                    .col(pk_auto(MessageTeaser::Id))
                    .col(string(MessageTeaser::Title))
                    .col(text(MessageTeaser::Teaser))
                    .col(text(MessageTeaser::Content))
                    .col(timestamp_with_time_zone(MessageTeaser::UnlockAt))
                    .col(
                        timestamp_with_time_zone(MessageTeaser::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MessageTeaser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MessageTeaser {
    Table,
    Id,
    Title,
    Teaser,
    Content,
    UnlockAt,
    CreatedAt,
}
