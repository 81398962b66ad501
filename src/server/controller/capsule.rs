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
        capsule::{CapsuleDto, SaveCapsuleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::capsule::SaveCapsuleParam,
        service::capsule::CapsuleService,
        state::AppState,
    },
};

/// Tag for grouping time capsule endpoints in OpenAPI documentation
pub static CAPSULE_TAG: &str = "capsule";

/// Get all capsules ordered by unlock time.
///
/// Sealed capsules only expose their title and teaser; `content` is `null` until
/// `unlock_at` has passed.
#[utoipa::path(
    get,
    path = "/api/capsules",
    tag = CAPSULE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved capsules", body = Vec<CapsuleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_capsules(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let capsules = CapsuleService::new(&state.db).get_all().await?;
    let dtos: Vec<CapsuleDto> = capsules
        .into_iter()
        .map(|c| c.into_public_dto(now))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/capsules/{id}",
    tag = CAPSULE_TAG,
    params(("id" = i32, Path, description = "Capsule ID")),
    responses(
        (status = 200, description = "Successfully retrieved capsule", body = CapsuleDto),
        (status = 404, description = "Capsule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_capsule(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let capsule = CapsuleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(capsule.into_public_dto(Utc::now()))))
}

/// Get all capsules with their content, sealed or not.
///
/// # Access Control
/// - `Admin` - Only admins can read sealed content
#[utoipa::path(
    get,
    path = "/api/admin/capsules",
    tag = CAPSULE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved capsules", body = Vec<CapsuleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_capsules(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let now = Utc::now();
    let capsules = CapsuleService::new(&state.db).get_all().await?;
    let dtos: Vec<CapsuleDto> = capsules
        .into_iter()
        .map(|c| c.into_admin_dto(now))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Seal a new capsule.
///
/// # Access Control
/// - `Admin` - Only admins can create capsules
///
/// # Returns
/// - `201 Created` - Created capsule (admin view)
/// - `400 Bad Request` - Invalid data or an unlock time that is not in the future
#[utoipa::path(
    post,
    path = "/api/capsules",
    tag = CAPSULE_TAG,
    request_body = SaveCapsuleDto,
    responses(
        (status = 201, description = "Successfully created capsule", body = CapsuleDto),
        (status = 400, description = "Invalid capsule data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_capsule(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveCapsuleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let now = Utc::now();
    let param = SaveCapsuleParam::from_dto(payload)?;
    let capsule = CapsuleService::new(&state.db).create(param, now).await?;

    Ok((StatusCode::CREATED, Json(capsule.into_admin_dto(now))))
}

#[utoipa::path(
    put,
    path = "/api/capsules/{id}",
    tag = CAPSULE_TAG,
    params(("id" = i32, Path, description = "Capsule ID")),
    request_body = SaveCapsuleDto,
    responses(
        (status = 200, description = "Successfully updated capsule", body = CapsuleDto),
        (status = 400, description = "Invalid capsule data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Capsule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_capsule(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveCapsuleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = SaveCapsuleParam::from_dto(payload)?;
    let capsule = CapsuleService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(capsule.into_admin_dto(Utc::now()))))
}

#[utoipa::path(
    delete,
    path = "/api/capsules/{id}",
    tag = CAPSULE_TAG,
    params(("id" = i32, Path, description = "Capsule ID")),
    responses(
        (status = 204, description = "Successfully deleted capsule"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Capsule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_capsule(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CapsuleService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
