use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GuestbookStatusDto {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GuestbookEntryDto {
    pub id: i32,
    pub name: String,
    pub message: String,
    pub status: GuestbookStatusDto,
    pub created_at: DateTime<Utc>,
    pub moderated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignGuestbookDto {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModerateGuestbookDto {
    pub status: GuestbookStatusDto,
}

/// Payload of a realtime guestbook event.
///
/// The SSE event name carries the kind (`submitted`, `moderated`, `withdrawn`, `deleted`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GuestbookEventDto {
    pub kind: String,
    pub entry: GuestbookEntryDto,
}
