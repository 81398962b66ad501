//! Guestbook data repository.

use chrono::Utc;
use entity::guestbook_entry::GuestbookStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    guestbook::{GuestbookEntry, SignGuestbookParam},
    page::{Page, PageParam},
};

pub struct GuestbookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestbookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new entry as pending.
    pub async fn create(&self, param: SignGuestbookParam) -> Result<GuestbookEntry, DbErr> {
        let entity = entity::guestbook_entry::ActiveModel {
            name: ActiveValue::Set(param.name),
            message: ActiveValue::Set(param.message),
            status: ActiveValue::Set(GuestbookStatus::Pending),
            created_at: ActiveValue::Set(Utc::now()),
            moderated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GuestbookEntry::from_entity(entity))
    }

    /// Gets a page of entries, newest first; `None` lists every status.
    pub async fn get_paginated(
        &self,
        status: Option<GuestbookStatus>,
        page: PageParam,
    ) -> Result<Page<GuestbookEntry>, DbErr> {
        let mut query = entity::prelude::GuestbookEntry::find();

        if let Some(status) = status {
            query = query.filter(entity::guestbook_entry::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::guestbook_entry::Column::CreatedAt)
            .order_by_desc(entity::guestbook_entry::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(page.page)
            .await?
            .into_iter()
            .map(GuestbookEntry::from_entity)
            .collect();

        Ok(Page {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<GuestbookEntry>, DbErr> {
        let entity = entity::prelude::GuestbookEntry::find_by_id(id)
            .one(self.db)
            .await?;
        Ok(entity.map(GuestbookEntry::from_entity))
    }

    /// Sets an entry's status.
    ///
    /// Approving or rejecting stamps `moderated_at`; returning to pending clears it.
    pub async fn set_status(
        &self,
        id: i32,
        status: GuestbookStatus,
    ) -> Result<Option<GuestbookEntry>, DbErr> {
        let Some(existing) = entity::prelude::GuestbookEntry::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let moderated_at = match status {
            GuestbookStatus::Pending => None,
            GuestbookStatus::Approved | GuestbookStatus::Rejected => Some(Utc::now()),
        };

        let mut active: entity::guestbook_entry::ActiveModel = existing.into();
        active.status = ActiveValue::Set(status);
        active.moderated_at = ActiveValue::Set(moderated_at);

        let entity = active.update(self.db).await?;
        Ok(Some(GuestbookEntry::from_entity(entity)))
    }

    /// Deletes an entry, returning it as it was so the deletion can be broadcast.
    pub async fn delete(&self, id: i32) -> Result<Option<GuestbookEntry>, DbErr> {
        let Some(existing) = entity::prelude::GuestbookEntry::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        entity::prelude::GuestbookEntry::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(GuestbookEntry::from_entity(existing)))
    }
}
