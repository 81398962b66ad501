//! Contact form service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::contact_message::ContactMessageRepository,
    error::AppError,
    model::{
        contact::{ContactMessage, SendContactMessageParam},
        page::{Page, PageParam},
    },
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn send(&self, param: SendContactMessageParam) -> Result<ContactMessage, AppError> {
        let message = ContactMessageRepository::new(self.db).create(param).await?;
        tracing::info!("Received contact message {}", message.id);
        Ok(message)
    }

    pub async fn get_paginated(
        &self,
        unread_only: bool,
        page: PageParam,
    ) -> Result<Page<ContactMessage>, AppError> {
        Ok(ContactMessageRepository::new(self.db)
            .get_paginated(unread_only, page)
            .await?)
    }

    pub async fn mark(&self, id: i32, read: bool) -> Result<ContactMessage, AppError> {
        ContactMessageRepository::new(self.db)
            .set_read(id, read)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ContactMessageRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Contact message not found".to_string())
}
