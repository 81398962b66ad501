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
        memory::{MemoryDto, SaveMemoryDto},
        pagination::PageDto,
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::memory::{MemoryFilter, SaveMemoryParam},
        service::memory::MemoryService,
        state::AppState,
    },
};

/// Tag for grouping memory endpoints in OpenAPI documentation
pub static MEMORY_TAG: &str = "memory";

#[derive(Deserialize)]
pub struct MemoryFilterParams {
    pub category: Option<String>,
    pub mood: Option<String>,
    pub tag: Option<String>,
}

impl MemoryFilterParams {
    fn into_filter(self) -> MemoryFilter {
        MemoryFilter {
            category: non_empty(self.category),
            mood: non_empty(self.mood),
            tag: non_empty(self.tag),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Get paginated memories.
///
/// Returns memories newest first with their images. Filters are exact matches; the
/// tag filter is normalized the same way stored tags are.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `pagination` - Page number and entries per page
/// - `filter` - Optional category, mood and tag filters
///
/// # Returns
/// - `200 OK` - Page of memories
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/memories",
    tag = MEMORY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("category" = Option<String>, Query, description = "Exact category"),
        ("mood" = Option<String>, Query, description = "Exact mood"),
        ("tag" = Option<String>, Query, description = "Tag, matched after normalization")
    ),
    responses(
        (status = 200, description = "Successfully retrieved memories", body = PageDto<MemoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_memories(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<MemoryFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let memories = MemoryService::new(&state.db)
        .get_paginated(filter.into_filter(), pagination.to_page())
        .await?;

    Ok((StatusCode::OK, Json(memories.into_dto(|m| m.into_dto()))))
}

/// Get a memory by id.
#[utoipa::path(
    get,
    path = "/api/memories/{id}",
    tag = MEMORY_TAG,
    params(("id" = i32, Path, description = "Memory ID")),
    responses(
        (status = 200, description = "Successfully retrieved memory", body = MemoryDto),
        (status = 404, description = "Memory not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_memory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let memory = MemoryService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(memory.into_dto())))
}

/// Create a memory.
///
/// # Access Control
/// - `Admin` - Only admins can create memories
///
/// # Returns
/// - `201 Created` - Created memory
/// - `400 Bad Request` - Invalid title, category or image urls
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in or not an admin
#[utoipa::path(
    post,
    path = "/api/memories",
    tag = MEMORY_TAG,
    request_body = SaveMemoryDto,
    responses(
        (status = 201, description = "Successfully created memory", body = MemoryDto),
        (status = 400, description = "Invalid memory data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_memory(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveMemoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = SaveMemoryParam::from_dto(payload)?;
    let memory = MemoryService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(memory.into_dto())))
}

/// Replace a memory, including its full image list.
///
/// # Access Control
/// - `Admin` - Only admins can update memories
#[utoipa::path(
    put,
    path = "/api/memories/{id}",
    tag = MEMORY_TAG,
    params(("id" = i32, Path, description = "Memory ID")),
    request_body = SaveMemoryDto,
    responses(
        (status = 200, description = "Successfully updated memory", body = MemoryDto),
        (status = 400, description = "Invalid memory data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Memory not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_memory(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveMemoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = SaveMemoryParam::from_dto(payload)?;
    let memory = MemoryService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(memory.into_dto())))
}

/// Delete a memory and its images.
///
/// # Access Control
/// - `Admin` - Only admins can delete memories
#[utoipa::path(
    delete,
    path = "/api/memories/{id}",
    tag = MEMORY_TAG,
    params(("id" = i32, Path, description = "Memory ID")),
    responses(
        (status = 204, description = "Successfully deleted memory"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Memory not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_memory(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MemoryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_ignored() {
        let filter = MemoryFilterParams {
            category: Some("  ".to_string()),
            mood: None,
            tag: Some(" Beach ".to_string()),
        }
        .into_filter();

        assert_eq!(filter.category, None);
        assert_eq!(filter.tag.as_deref(), Some("Beach"));
    }
}
