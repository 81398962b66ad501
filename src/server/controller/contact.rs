use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        contact::{ContactMessageDto, MarkContactMessageDto, SendContactMessageDto},
        pagination::PageDto,
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::contact::SendContactMessageParam,
        service::contact::ContactService,
        state::AppState,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

#[derive(Deserialize)]
pub struct ContactFilterParams {
    #[serde(default)]
    pub unread: bool,
}

/// Send a message through the contact form.
///
/// Public and rate limited per client IP.
///
/// # Returns
/// - `201 Created` - Stored message
/// - `400 Bad Request` - Missing name, malformed email or empty/oversized message
/// - `429 Too Many Requests` - Rate limit exceeded
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = CONTACT_TAG,
    request_body = SendContactMessageDto,
    responses(
        (status = 201, description = "Message received", body = ContactMessageDto),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<SendContactMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = SendContactMessageParam::from_dto(payload)?;
    let message = ContactService::new(&state.db).send(param).await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Get paginated contact messages, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can read the inbox
#[utoipa::path(
    get,
    path = "/api/admin/contact",
    tag = CONTACT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("unread" = Option<bool>, Query, description = "Only unread messages")
    ),
    responses(
        (status = 200, description = "Successfully retrieved messages", body = PageDto<ContactMessageDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<ContactFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let messages = ContactService::new(&state.db)
        .get_paginated(filter.unread, pagination.to_page())
        .await?;

    Ok((StatusCode::OK, Json(messages.into_dto(|m| m.into_dto()))))
}

#[utoipa::path(
    patch,
    path = "/api/admin/contact/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Contact message ID")),
    request_body = MarkContactMessageDto,
    responses(
        (status = 200, description = "Successfully updated message", body = ContactMessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<MarkContactMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let message = ContactService::new(&state.db)
        .mark(id, payload.read)
        .await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/contact/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Contact message ID")),
    responses(
        (status = 204, description = "Successfully deleted message"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ContactService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
