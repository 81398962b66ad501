use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("Session user {0} not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks a required permission.
    ///
    /// # Fields
    /// - ID of the user denied access
    /// - Description of the denied action, logged server-side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown email or wrong password at login, or wrong current password on change.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Not authenticated"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `AccessDenied` → 403 Forbidden with "Insufficient permissions"
///
/// All errors are logged at debug level while keeping client-facing messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
