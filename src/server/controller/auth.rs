use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{ChangePasswordDto, LoginDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// On success the session id is cycled to prevent fixation and the user id is
/// stored in the session.
///
/// # Returns
/// - `200 OK` - Logged in user
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `429 Too Many Requests` - Rate limit exceeded
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = UserDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 429, description = "Too many login attempts"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    let auth_session = AuthSession::new(&session);
    auth_session.cycle().await?;
    auth_session.set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out and destroy the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).flush().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently logged in user.
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Not logged in, or the session user no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change the logged in user's password.
///
/// # Returns
/// - `204 No Content` - Password changed
/// - `400 Bad Request` - New password too short
/// - `401 Unauthorized` - Not logged in or current password wrong
#[utoipa::path(
    put,
    path = "/api/auth/password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "New password too short", body = ErrorDto),
        (status = 401, description = "Not authenticated or wrong current password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AuthService::new(&state.db)
        .change_password(&user, &payload.current_password, &payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
