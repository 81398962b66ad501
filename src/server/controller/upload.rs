use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        upload::{UploadDto, UploadFormDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::upload::UploadService,
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Multipart field holding the uploaded file.
const FILE_FIELD: &str = "file";

/// Upload an image, video or audio file.
///
/// Reads the `file` field of a multipart form and stores it under a generated name
/// in the upload directory, served from `/uploads`.
///
/// # Access Control
/// - `Admin` - Only admins can upload
///
/// # Returns
/// - `201 Created` - Stored file
/// - `400 Bad Request` - Missing `file` field, empty file or disallowed extension
/// - `413 Payload Too Large` - File exceeds the configured upload limit
#[utoipa::path(
    post,
    path = "/api/uploads",
    tag = UPLOAD_TAG,
    request_body(content = UploadFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully stored file", body = UploadDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UploadService::new(&state.config.upload_dir, state.config.upload_max_bytes);

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await?;

        let stored = service.store(original_name.as_deref(), &bytes).await?;

        return Ok((
            StatusCode::CREATED,
            Json(UploadDto {
                url: stored.url,
                filename: stored.filename,
                size: stored.size,
                content_type: stored.content_type,
            }),
        ));
    }

    Err(AppError::BadRequest("Missing file field".to_string()))
}

/// Delete an uploaded file by name.
///
/// # Access Control
/// - `Admin` - Only admins can delete uploads
#[utoipa::path(
    delete,
    path = "/api/uploads/{filename}",
    tag = UPLOAD_TAG,
    params(("filename" = String, Path, description = "Stored file name")),
    responses(
        (status = 204, description = "Successfully deleted file"),
        (status = 400, description = "Invalid file name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_file(
    State(state): State<AppState>,
    session: Session,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UploadService::new(&state.config.upload_dir, state.config.upload_max_bytes)
        .delete(&filename)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
