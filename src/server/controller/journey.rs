use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        journey::{JourneyDto, ReorderJourneyDto, SaveJourneyDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::journey::SaveJourneyParam,
        service::journey::JourneyService,
        state::AppState,
    },
};

/// Tag for grouping journey endpoints in OpenAPI documentation
pub static JOURNEY_TAG: &str = "journey";

/// Get the full timeline ordered by sort order, then date.
#[utoipa::path(
    get,
    path = "/api/journey",
    tag = JOURNEY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved journey", body = Vec<JourneyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_journey(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = JourneyService::new(&state.db).get_all().await?;
    let dtos: Vec<JourneyDto> = entries.into_iter().map(|j| j.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a journey entry.
///
/// Without a `sort_order` the entry is appended to the end of the timeline.
///
/// # Access Control
/// - `Admin` - Only admins can edit the timeline
#[utoipa::path(
    post,
    path = "/api/journey",
    tag = JOURNEY_TAG,
    request_body = SaveJourneyDto,
    responses(
        (status = 201, description = "Successfully created journey entry", body = JourneyDto),
        (status = 400, description = "Invalid journey data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_journey(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveJourneyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = SaveJourneyParam::from_dto(payload)?;
    let entry = JourneyService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/journey/{id}",
    tag = JOURNEY_TAG,
    params(("id" = i32, Path, description = "Journey entry ID")),
    request_body = SaveJourneyDto,
    responses(
        (status = 200, description = "Successfully updated journey entry", body = JourneyDto),
        (status = 400, description = "Invalid journey data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Journey entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_journey(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveJourneyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = SaveJourneyParam::from_dto(payload)?;
    let entry = JourneyService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/journey/{id}",
    tag = JOURNEY_TAG,
    params(("id" = i32, Path, description = "Journey entry ID")),
    responses(
        (status = 204, description = "Successfully deleted journey entry"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Journey entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_journey(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    JourneyService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reorder the timeline.
///
/// Each id is assigned its index in the list as its sort order.
///
/// # Access Control
/// - `Admin` - Only admins can edit the timeline
///
/// # Returns
/// - `200 OK` - The reordered timeline
/// - `400 Bad Request` - Empty list, repeated ids or unknown ids
#[utoipa::path(
    put,
    path = "/api/journey/order",
    tag = JOURNEY_TAG,
    request_body = ReorderJourneyDto,
    responses(
        (status = 200, description = "Successfully reordered journey", body = Vec<JourneyDto>),
        (status = 400, description = "Invalid id list", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_journey(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ReorderJourneyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entries = JourneyService::new(&state.db).reorder(&payload.ids).await?;
    let dtos: Vec<JourneyDto> = entries.into_iter().map(|j| j.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
