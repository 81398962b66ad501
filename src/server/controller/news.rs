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
        news::{NewsDto, PublishNewsDto, SaveNewsDto},
        pagination::PageDto,
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::news::{NewsFilter, SaveNewsParam},
        service::news::NewsService,
        state::AppState,
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

#[derive(Deserialize)]
pub struct NewsFilterParams {
    pub category: Option<String>,
    #[serde(default)]
    pub include_drafts: bool,
}

/// Get paginated news.
///
/// Only published news is returned unless an admin asks for drafts with
/// `include_drafts=true`.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("category" = Option<String>, Query, description = "Exact category"),
        ("include_drafts" = Option<bool>, Query, description = "Include drafts (admins only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved news", body = PageDto<NewsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParams>,
    Query(params): Query<NewsFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let is_admin = is_admin(&state, &session).await?;

    let filter = NewsFilter {
        category: params.category.filter(|c| !c.trim().is_empty()),
        include_drafts: params.include_drafts,
    };
    let news = NewsService::new(&state.db)
        .get_paginated(filter, is_admin, pagination.to_page())
        .await?;

    Ok((StatusCode::OK, Json(news.into_dto(|n| n.into_dto()))))
}

/// Get a news item by slug.
///
/// The path segment shares its `{id}` name with the admin routes so both can live under
/// `/api/news/`; here it carries the slug.
///
/// # Returns
/// - `200 OK` - News item with rendered HTML
/// - `404 Not Found` - Unknown slug, or a draft requested by a non-admin
#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = String, Path, description = "News slug")),
    responses(
        (status = 200, description = "Successfully retrieved news", body = NewsDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news_by_slug(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let is_admin = is_admin(&state, &session).await?;

    let news = NewsService::new(&state.db)
        .get_by_slug(&slug, is_admin)
        .await?;

    Ok((StatusCode::OK, Json(news.into_dto())))
}

/// Create a news item.
///
/// The slug is derived from the requested slug or the title and made unique with a
/// numeric suffix.
///
/// # Access Control
/// - `Admin` - Only admins can create news
#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body = SaveNewsDto,
    responses(
        (status = 201, description = "Successfully created news", body = NewsDto),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = SaveNewsParam::from_dto(payload)?;
    let news = NewsService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(news.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News ID")),
    request_body = SaveNewsDto,
    responses(
        (status = 200, description = "Successfully updated news", body = NewsDto),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_news(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = SaveNewsParam::from_dto(payload)?;
    let news = NewsService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(news.into_dto())))
}

/// Publish or unpublish a news item.
#[utoipa::path(
    patch,
    path = "/api/news/{id}/publish",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News ID")),
    request_body = PublishNewsDto,
    responses(
        (status = 200, description = "Successfully changed publish state", body = NewsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn publish_news(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<PublishNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let news = NewsService::new(&state.db)
        .set_published(id, payload.published)
        .await?;

    Ok((StatusCode::OK, Json(news.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News ID")),
    responses(
        (status = 204, description = "Successfully deleted news"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    NewsService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn is_admin(state: &AppState, session: &Session) -> Result<bool, AppError> {
    let user = AuthGuard::new(&state.db, session).current_user().await?;
    Ok(user.is_some_and(|u| u.is_admin()))
}
