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
        profile::{ProfileDto, SaveProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::profile::SaveProfileParam,
        service::profile::ProfileService,
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved profiles", body = Vec<ProfileDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profiles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let profiles = ProfileService::new(&state.db).get_all().await?;
    let dtos: Vec<ProfileDto> = profiles.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/profiles/{slug}",
    tag = PROFILE_TAG,
    params(("slug" = String, Path, description = "Profile slug")),
    responses(
        (status = 200, description = "Successfully retrieved profile", body = ProfileDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profile = ProfileService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Create a profile.
///
/// # Access Control
/// - `Admin` - Only admins can manage profiles
///
/// # Returns
/// - `201 Created` - Created profile
/// - `400 Bad Request` - Slug is not `[a-z0-9-]`, 1 to 64 characters
/// - `409 Conflict` - Slug already taken
#[utoipa::path(
    post,
    path = "/api/profiles",
    tag = PROFILE_TAG,
    request_body = SaveProfileDto,
    responses(
        (status = 201, description = "Successfully created profile", body = ProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = SaveProfileParam::from_dto(payload)?;
    let profile = ProfileService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(profile.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/profiles/{slug}",
    tag = PROFILE_TAG,
    params(("slug" = String, Path, description = "Current profile slug")),
    request_body = SaveProfileDto,
    responses(
        (status = 200, description = "Successfully updated profile", body = ProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
    Json(payload): Json<SaveProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = SaveProfileParam::from_dto(payload)?;
    let profile = ProfileService::new(&state.db).update(&slug, param).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/profiles/{slug}",
    tag = PROFILE_TAG,
    params(("slug" = String, Path, description = "Profile slug")),
    responses(
        (status = 204, description = "Successfully deleted profile"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ProfileService::new(&state.db).delete(&slug).await?;

    Ok(StatusCode::NO_CONTENT)
}
