use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000003_create_memory_table::Memory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemoryImage::Table)
                    .if_not_exists()
                    .col(pk_auto(MemoryImage::Id))
                    .col(integer(MemoryImage::MemoryId))
                    .col(string(MemoryImage::Url))
                    .col(string_null(MemoryImage::Caption))
                    .col(integer(MemoryImage::Position).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_memory_image_memory_id")
                            .from(MemoryImage::Table, MemoryImage::MemoryId)
                            .to(Memory::Table, Memory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemoryImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MemoryImage {
    Table,
    Id,
    MemoryId,
    Url,
    Caption,
    Position,
}
