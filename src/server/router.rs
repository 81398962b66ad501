//! Application router: API routes, OpenAPI document, static uploads and middleware.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    response::IntoResponse,
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use tracing::Level;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        auth, capsule, contact, guestbook, health, journey, memory, milestone, news, profile,
        upload,
    },
    error::{config::ConfigError, AppError},
    middleware::rate_limit::ClientIpKeyExtractor,
    service::upload::UPLOAD_URL_PREFIX,
    state::AppState,
};

/// Room for multipart boundaries and headers on top of the upload limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Requests allowed per client IP before rate limiting kicks in, replenished one
/// every `RATE_LIMIT_REPLENISH_SECONDS`.
const RATE_LIMIT_BURST: u32 = 5;
const RATE_LIMIT_REPLENISH_SECONDS: u64 = 12;

#[derive(OpenApi)]
#[openapi(
    info(title = "Garden API", description = "Memories, timeline, guestbook and more"),
    tags(
        (name = auth::AUTH_TAG, description = "Login and session management"),
        (name = memory::MEMORY_TAG, description = "Memories with images and tags"),
        (name = news::NEWS_TAG, description = "News posts"),
        (name = journey::JOURNEY_TAG, description = "Timeline entries"),
        (name = milestone::MILESTONE_TAG, description = "Relationship milestones"),
        (name = profile::PROFILE_TAG, description = "Profiles"),
        (name = contact::CONTACT_TAG, description = "Contact form and inbox"),
        (name = guestbook::GUESTBOOK_TAG, description = "Guestbook and moderation"),
        (name = capsule::CAPSULE_TAG, description = "Time capsules"),
        (name = upload::UPLOAD_TAG, description = "File uploads"),
        (name = health::SITE_TAG, description = "Health and sitemap")
    )
)]
struct ApiDoc;

/// Builds the full application router with every middleware layer.
///
/// Layers from outermost to innermost: CORS, request tracing, sessions, body limit.
pub fn build_app_router(
    state: AppState,
    session_layer: SessionManagerLayer<SqliteStore>,
) -> Result<Router, AppError> {
    let config = state.config.clone();

    let (api, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(public_routes())
        .merge(admin_routes())
        .merge(rate_limited_routes(&config)?)
        .split_for_parts();

    let router = api
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .nest_service(UPLOAD_URL_PREFIX, ServeDir::new(&config.upload_dir))
        .layer(DefaultBodyLimit::max(
            config.upload_max_bytes + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(build_cors_layer(&config)?)
        .with_state(state);

    Ok(router)
}

fn public_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(health::health))
        .routes(routes!(health::sitemap))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_me))
        .routes(routes!(auth::change_password))
        .routes(routes!(memory::get_memories))
        .routes(routes!(memory::get_memory))
        .routes(routes!(news::get_news))
        .routes(routes!(news::get_news_by_slug))
        .routes(routes!(journey::get_journey))
        .routes(routes!(milestone::get_milestones))
        .routes(routes!(profile::get_profiles))
        .routes(routes!(profile::get_profile))
        .routes(routes!(guestbook::get_entries))
        .routes(routes!(guestbook::public_events))
        .routes(routes!(capsule::get_capsules))
        .routes(routes!(capsule::get_capsule))
}

/// Routes guarded by `AuthGuard` with the admin permission.
fn admin_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(memory::create_memory))
        .routes(routes!(memory::update_memory, memory::delete_memory))
        .routes(routes!(news::create_news))
        .routes(routes!(news::update_news, news::delete_news))
        .routes(routes!(news::publish_news))
        .routes(routes!(journey::create_journey))
        .routes(routes!(journey::update_journey, journey::delete_journey))
        .routes(routes!(journey::reorder_journey))
        .routes(routes!(milestone::create_milestone))
        .routes(routes!(milestone::update_milestone, milestone::delete_milestone))
        .routes(routes!(profile::create_profile))
        .routes(routes!(profile::update_profile, profile::delete_profile))
        .routes(routes!(contact::get_messages))
        .routes(routes!(contact::mark_message, contact::delete_message))
        .routes(routes!(guestbook::get_admin_entries))
        .routes(routes!(guestbook::moderate, guestbook::delete_entry))
        .routes(routes!(guestbook::admin_events))
        .routes(routes!(capsule::get_admin_capsules))
        .routes(routes!(capsule::create_capsule))
        .routes(routes!(capsule::update_capsule, capsule::delete_capsule))
        .routes(routes!(upload::upload_file))
        .routes(routes!(upload::delete_file))
}

/// Login and anonymous write endpoints, limited per client IP.
///
/// Rejections use the same JSON error body as every other endpoint.
fn rate_limited_routes(config: &Config) -> Result<OpenApiRouter<AppState>, AppError> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(ClientIpKeyExtractor {
                trust_proxy: config.trust_proxy,
            })
            .per_second(RATE_LIMIT_REPLENISH_SECONDS)
            .burst_size(RATE_LIMIT_BURST)
            .finish()
            .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?,
    );

    let limiter = governor_conf.limiter().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            limiter.retain_recent();
        }
    });

    Ok(OpenApiRouter::new()
        .routes(routes!(auth::login))
        .routes(routes!(contact::send_message))
        .routes(routes!(guestbook::sign))
        .layer(
            GovernorLayer::new(governor_conf)
                .error_handler(|err| AppError::from(err).into_response()),
        ))
}

/// Allows the configured front-end origin to call the API with cookies.
fn build_cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin: HeaderValue =
        config
            .frontend_origin
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "FRONTEND_ORIGIN".to_string(),
                value: config.frontend_origin.clone(),
            })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}
