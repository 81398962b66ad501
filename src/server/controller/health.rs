use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, HealthDto},
    server::{error::AppError, service::sitemap::SitemapService, state::AppState},
};

/// Tag for grouping site-level endpoints in OpenAPI documentation
pub static SITE_TAG: &str = "site";

/// Health check that pings the database.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = SITE_TAG,
    responses(
        (status = 200, description = "Service and database are reachable", body = HealthDto),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.db.ping().await?;

    Ok((
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    ))
}

/// Sitemap generated from the current content.
#[utoipa::path(
    get,
    path = "/sitemap.xml",
    tag = SITE_TAG,
    responses(
        (status = 200, description = "Sitemap document", body = String, content_type = "application/xml"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sitemap(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let xml = SitemapService::new(&state.db, &state.config.site_url)
        .generate()
        .await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    ))
}
