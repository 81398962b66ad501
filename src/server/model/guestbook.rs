//! Guestbook domain models and realtime events.

use chrono::{DateTime, Utc};
use entity::guestbook_entry::GuestbookStatus;

use crate::{
    model::guestbook::{
        GuestbookEntryDto, GuestbookEventDto, GuestbookStatusDto, SignGuestbookDto,
    },
    server::{error::AppError, util::validate},
};

pub const MAX_NAME_LENGTH: usize = 80;
pub const MAX_MESSAGE_LENGTH: usize = 1_000;

#[derive(Debug, Clone, PartialEq)]
pub struct GuestbookEntry {
    pub id: i32,
    pub name: String,
    pub message: String,
    pub status: GuestbookStatus,
    pub created_at: DateTime<Utc>,
    /// Set when an admin approves or rejects the entry.
    pub moderated_at: Option<DateTime<Utc>>,
}

impl GuestbookEntry {
    pub fn is_approved(&self) -> bool {
        self.status == GuestbookStatus::Approved
    }

    pub fn into_dto(self) -> GuestbookEntryDto {
        GuestbookEntryDto {
            id: self.id,
            name: self.name,
            message: self.message,
            status: status_to_dto(&self.status),
            created_at: self.created_at,
            moderated_at: self.moderated_at,
        }
    }

    pub fn from_entity(entity: entity::guestbook_entry::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            message: entity.message,
            status: entity.status,
            created_at: entity.created_at,
            moderated_at: entity.moderated_at,
        }
    }
}

pub fn status_to_dto(status: &GuestbookStatus) -> GuestbookStatusDto {
    match status {
        GuestbookStatus::Pending => GuestbookStatusDto::Pending,
        GuestbookStatus::Approved => GuestbookStatusDto::Approved,
        GuestbookStatus::Rejected => GuestbookStatusDto::Rejected,
    }
}

pub fn status_from_dto(status: GuestbookStatusDto) -> GuestbookStatus {
    match status {
        GuestbookStatusDto::Pending => GuestbookStatus::Pending,
        GuestbookStatusDto::Approved => GuestbookStatus::Approved,
        GuestbookStatusDto::Rejected => GuestbookStatus::Rejected,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignGuestbookParam {
    pub name: String,
    pub message: String,
}

impl SignGuestbookParam {
    pub fn from_dto(dto: SignGuestbookDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::required_text("Name", &dto.name, MAX_NAME_LENGTH)?,
            message: validate::required_text("Message", &dto.message, MAX_MESSAGE_LENGTH)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestbookEventKind {
    /// A visitor signed the guestbook; the entry is pending.
    Submitted,
    /// An admin changed the entry's status.
    Moderated,
    /// An approved entry was moved back to pending or rejected; carries the updated entry.
    Withdrawn,
    /// An admin deleted the entry; carries the entry as it was.
    Deleted,
}

impl GuestbookEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Moderated => "moderated",
            Self::Withdrawn => "withdrawn",
            Self::Deleted => "deleted",
        }
    }
}

/// Change notification published on the guestbook feed.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestbookEvent {
    pub kind: GuestbookEventKind,
    pub entry: GuestbookEntry,
}

impl GuestbookEvent {
    /// Whether anonymous visitors may see this event.
    ///
    /// Approvals, withdrawals of approved entries and removals of approved entries are
    /// public; pending and rejected content stays on the admin stream.
    pub fn is_public(&self) -> bool {
        match self.kind {
            GuestbookEventKind::Submitted => false,
            GuestbookEventKind::Withdrawn => true,
            GuestbookEventKind::Moderated | GuestbookEventKind::Deleted => self.entry.is_approved(),
        }
    }

    /// Event for a status change from `previous` to the entry's current status.
    pub fn moderation(previous: GuestbookStatus, entry: GuestbookEntry) -> Self {
        let withdrawn = previous == GuestbookStatus::Approved && !entry.is_approved();
        let kind = if withdrawn {
            GuestbookEventKind::Withdrawn
        } else {
            GuestbookEventKind::Moderated
        };
        Self { kind, entry }
    }

    pub fn into_dto(self) -> GuestbookEventDto {
        GuestbookEventDto {
            kind: self.kind.as_str().to_string(),
            entry: self.entry.into_dto(),
        }
    }
}
