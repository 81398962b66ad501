//! Contact message data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    contact::{ContactMessage, SendContactMessageParam},
    page::{Page, PageParam},
};

pub struct ContactMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a submitted message as unread.
    pub async fn create(&self, param: SendContactMessageParam) -> Result<ContactMessage, DbErr> {
        let entity = entity::contact_message::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            subject: ActiveValue::Set(param.subject),
            message: ActiveValue::Set(param.message),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ContactMessage::from_entity(entity))
    }

    /// Gets a page of messages, newest first, optionally only unread ones.
    pub async fn get_paginated(
        &self,
        unread_only: bool,
        page: PageParam,
    ) -> Result<Page<ContactMessage>, DbErr> {
        let mut query = entity::prelude::ContactMessage::find();

        if unread_only {
            query = query.filter(entity::contact_message::Column::Read.eq(false));
        }

        let paginator = query
            .order_by_desc(entity::contact_message::Column::CreatedAt)
            .order_by_desc(entity::contact_message::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(page.page)
            .await?
            .into_iter()
            .map(ContactMessage::from_entity)
            .collect();

        Ok(Page {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    pub async fn set_read(&self, id: i32, read: bool) -> Result<Option<ContactMessage>, DbErr> {
        let Some(existing) = entity::prelude::ContactMessage::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::contact_message::ActiveModel = existing.into();
        active.read = ActiveValue::Set(read);

        let entity = active.update(self.db).await?;
        Ok(Some(ContactMessage::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ContactMessage::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
