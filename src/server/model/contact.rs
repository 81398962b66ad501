//! Contact form domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::contact::{ContactMessageDto, SendContactMessageDto},
    server::{error::AppError, util::validate},
};

pub const MAX_MESSAGE_LENGTH: usize = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn into_dto(self) -> ContactMessageDto {
        ContactMessageDto {
            id: self.id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            read: self.read,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::contact_message::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            subject: entity.subject,
            message: entity.message,
            read: entity.read,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendContactMessageParam {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl SendContactMessageParam {
    pub fn from_dto(dto: SendContactMessageDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::required_text("Name", &dto.name, 100)?,
            email: validate::email(&dto.email)?,
            subject: validate::optional_text("Subject", dto.subject, 200)?,
            message: validate::required_text("Message", &dto.message, MAX_MESSAGE_LENGTH)?,
        })
    }
}
