use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        milestone::{MilestoneDto, SaveMilestoneDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::milestone::SaveMilestoneParam,
        service::milestone::MilestoneService,
        state::AppState,
    },
};

/// Tag for grouping milestone endpoints in OpenAPI documentation
pub static MILESTONE_TAG: &str = "milestone";

/// Get all milestones, earliest first.
///
/// Each milestone carries `days_from_today`, computed against today's UTC date and
/// negative for dates in the past.
#[utoipa::path(
    get,
    path = "/api/milestones",
    tag = MILESTONE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved milestones", body = Vec<MilestoneDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_milestones(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let milestones = MilestoneService::new(&state.db).get_all().await?;
    let dtos: Vec<MilestoneDto> = milestones.into_iter().map(|m| m.into_dto(today)).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/milestones",
    tag = MILESTONE_TAG,
    request_body = SaveMilestoneDto,
    responses(
        (status = 201, description = "Successfully created milestone", body = MilestoneDto),
        (status = 400, description = "Invalid milestone data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_milestone(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveMilestoneDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = SaveMilestoneParam::from_dto(payload)?;
    let milestone = MilestoneService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(milestone.into_dto(Utc::now().date_naive())),
    ))
}

#[utoipa::path(
    put,
    path = "/api/milestones/{id}",
    tag = MILESTONE_TAG,
    params(("id" = i32, Path, description = "Milestone ID")),
    request_body = SaveMilestoneDto,
    responses(
        (status = 200, description = "Successfully updated milestone", body = MilestoneDto),
        (status = 400, description = "Invalid milestone data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Milestone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_milestone(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveMilestoneDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = SaveMilestoneParam::from_dto(payload)?;
    let milestone = MilestoneService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(milestone.into_dto(Utc::now().date_naive()))))
}

#[utoipa::path(
    delete,
    path = "/api/milestones/{id}",
    tag = MILESTONE_TAG,
    params(("id" = i32, Path, description = "Milestone ID")),
    responses(
        (status = 204, description = "Successfully deleted milestone"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Milestone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_milestone(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MilestoneService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
