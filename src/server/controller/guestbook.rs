use std::convert::Infallible;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    Json,
};
use serde::Deserialize;
use tokio_stream::{
    wrappers::{errors::BroadcastStreamRecvError, BroadcastStream},
    Stream, StreamExt,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        guestbook::{
            GuestbookEntryDto, GuestbookEventDto, GuestbookStatusDto, ModerateGuestbookDto,
            SignGuestbookDto,
        },
        pagination::PageDto,
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::guestbook::{status_from_dto, GuestbookEvent, SignGuestbookParam},
        service::guestbook::{feed::GuestbookFeed, GuestbookService},
        state::AppState,
    },
};

/// Tag for grouping guestbook endpoints in OpenAPI documentation
pub static GUESTBOOK_TAG: &str = "guestbook";

#[derive(Deserialize)]
pub struct GuestbookFilterParams {
    pub status: Option<GuestbookStatusDto>,
}

/// Get approved guestbook entries, newest first.
#[utoipa::path(
    get,
    path = "/api/guestbook",
    tag = GUESTBOOK_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved entries", body = PageDto<GuestbookEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_entries(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let entries = GuestbookService::new(&state.db, &state.guestbook_feed)
        .get_approved(pagination.to_page())
        .await?;

    Ok((StatusCode::OK, Json(entries.into_dto(|e| e.into_dto()))))
}

/// Sign the guestbook.
///
/// The entry is stored as pending and only shown publicly once approved. Public and
/// rate limited per client IP.
///
/// # Returns
/// - `201 Created` - Pending entry
/// - `400 Bad Request` - Empty or oversized name or message
/// - `429 Too Many Requests` - Rate limit exceeded
#[utoipa::path(
    post,
    path = "/api/guestbook",
    tag = GUESTBOOK_TAG,
    request_body = SignGuestbookDto,
    responses(
        (status = 201, description = "Entry submitted for moderation", body = GuestbookEntryDto),
        (status = 400, description = "Invalid entry", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign(
    State(state): State<AppState>,
    Json(payload): Json<SignGuestbookDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = SignGuestbookParam::from_dto(payload)?;
    let entry = GuestbookService::new(&state.db, &state.guestbook_feed)
        .sign(param)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// Get guestbook entries for moderation, optionally filtered by status.
///
/// # Access Control
/// - `Admin` - Only admins can moderate
#[utoipa::path(
    get,
    path = "/api/admin/guestbook",
    tag = GUESTBOOK_TAG,
    params(
        ("status" = Option<GuestbookStatusDto>, Query, description = "Only entries with this status"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved entries", body = PageDto<GuestbookEntryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_entries(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<GuestbookFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entries = GuestbookService::new(&state.db, &state.guestbook_feed)
        .get_all(filter.status.map(status_from_dto), pagination.to_page())
        .await?;

    Ok((StatusCode::OK, Json(entries.into_dto(|e| e.into_dto()))))
}

/// Set an entry's moderation status.
///
/// Setting `pending` clears `moderated_at`.
///
/// # Access Control
/// - `Admin` - Only admins can moderate
#[utoipa::path(
    patch,
    path = "/api/admin/guestbook/{id}",
    tag = GUESTBOOK_TAG,
    params(("id" = i32, Path, description = "Guestbook entry ID")),
    request_body = ModerateGuestbookDto,
    responses(
        (status = 200, description = "Successfully moderated entry", body = GuestbookEntryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn moderate(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ModerateGuestbookDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entry = GuestbookService::new(&state.db, &state.guestbook_feed)
        .moderate(id, status_from_dto(payload.status))
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/guestbook/{id}",
    tag = GUESTBOOK_TAG,
    params(("id" = i32, Path, description = "Guestbook entry ID")),
    responses(
        (status = 204, description = "Successfully deleted entry"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    GuestbookService::new(&state.db, &state.guestbook_feed)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Stream approvals, withdrawals and removals of approved entries as server-sent events.
///
/// The SSE event name is the change kind (`moderated`, `withdrawn` or `deleted`); the
/// data is a JSON `GuestbookEventDto`. Clients drop the entry on `withdrawn`.
#[utoipa::path(
    get,
    path = "/api/guestbook/events",
    tag = GUESTBOOK_TAG,
    responses(
        (status = 200, description = "Event stream", body = GuestbookEventDto, content_type = "text/event-stream")
    ),
)]
pub async fn public_events(State(state): State<AppState>) -> impl IntoResponse {
    Sse::new(event_stream(&state.guestbook_feed, true)).keep_alive(KeepAlive::default())
}

/// Stream every guestbook change as server-sent events.
///
/// # Access Control
/// - `Admin` - Only admins see pending and rejected entries
#[utoipa::path(
    get,
    path = "/api/admin/guestbook/events",
    tag = GUESTBOOK_TAG,
    responses(
        (status = 200, description = "Event stream", body = GuestbookEventDto, content_type = "text/event-stream"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
)]
pub async fn admin_events(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    Ok(Sse::new(event_stream(&state.guestbook_feed, false)).keep_alive(KeepAlive::default()))
}

fn event_stream(
    feed: &GuestbookFeed,
    public_only: bool,
) -> impl Stream<Item = Result<Event, Infallible>> {
    BroadcastStream::new(feed.subscribe())
        .filter_map(move |received| visible_event(received, public_only))
        .filter_map(|event| {
            let kind = event.kind.as_str();
            match Event::default().event(kind).json_data(event.into_dto()) {
                Ok(sse) => Some(Ok(sse)),
                Err(e) => {
                    tracing::error!("Failed to serialize guestbook event: {}", e);
                    None
                }
            }
        })
}

/// Drops events the subscriber may not see and skips over lag.
fn visible_event(
    received: Result<GuestbookEvent, BroadcastStreamRecvError>,
    public_only: bool,
) -> Option<GuestbookEvent> {
    match received {
        Ok(event) if !public_only || event.is_public() => Some(event),
        Ok(_) => None,
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::debug!("Guestbook subscriber lagged, skipped {} event(s)", skipped);
            None
        }
    }
}
