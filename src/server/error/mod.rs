//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected internal state, always a 500.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error, raised by the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Filesystem error while storing uploads or writing the sitemap.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed or oversized multipart body.
    ///
    /// Responds with the status chosen by axum (400 or 413).
    #[error(transparent)]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),

    /// URL could not be built from the configured site URL.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    /// Rate limit rejection from the governor layer.
    ///
    /// 429 with the wait time and the governor's rate limit headers.
    #[error(transparent)]
    RateLimitErr(#[from] tower_governor::GovernorError),

    /// Resource not found error, 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with existing data (e.g. duplicate slug), 409.
    #[error("{0}")]
    Conflict(String),

    /// Request body exceeds a configured limit, 413.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and malformed multipart bodies
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` variant
/// - 413 Payload Too Large - For `PayloadTooLarge` and oversized multipart bodies
/// - 429 Too Many Requests - For `RateLimitErr` when the client exceeded its quota
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::PayloadTooLarge(msg) => error_response(StatusCode::PAYLOAD_TOO_LARGE, msg),
            Self::RateLimitErr(err) => rate_limit_response(err),
            Self::MultipartErr(err) => {
                tracing::debug!("Rejected multipart body: {}", err);
                error_response(err.status(), err.body_text())
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

fn rate_limit_response(err: tower_governor::GovernorError) -> Response {
    use tower_governor::GovernorError;

    match err {
        GovernorError::TooManyRequests { wait_time, headers } => {
            let mut response = error_response(
                StatusCode::TOO_MANY_REQUESTS,
                format!("Too many requests, retry in {wait_time}s"),
            );
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        GovernorError::Other { code, msg, headers } => {
            let mut response =
                error_response(code, msg.unwrap_or_else(|| "Request rejected".to_string()));
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        err @ GovernorError::UnableToExtractKey => InternalServerError(err).into_response(),
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
