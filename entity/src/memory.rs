use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "memory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub date: Date,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub mood: Option<String>,
    pub location: Option<String>,
    /// JSON array of normalized tag strings
    #[sea_orm(column_type = "Text")]
    pub tags: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::memory_image::Entity")]
    MemoryImage,
}

impl Related<super::memory_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemoryImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
