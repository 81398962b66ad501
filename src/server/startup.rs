//! Startup helpers: tracing, database, sessions, admin bootstrap and the HTTP listener.

use std::net::SocketAddr;

use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, session_store::ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler,
    service::{guestbook::feed::GuestbookFeed, user::UserService},
    state::AppState,
};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "garden=info,tower_http=info";

/// Interval between sweeps that delete expired sessions.
const EXPIRED_SESSION_SWEEP_SECONDS: u64 = 60;

/// Installs the global tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date
/// before anything else touches the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::debug!("Database migrations applied");

    Ok(db)
}

/// Creates the session layer backed by the application's Sqlite pool.
///
/// Migrates the session table and spawns a task that deletes expired sessions every
/// minute. Sessions expire after `SESSION_DAYS` of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let deletion_store = session_store.clone();
    tokio::spawn(async move {
        if let Err(e) = deletion_store
            .continuously_delete_expired(tokio::time::Duration::from_secs(
                EXPIRED_SESSION_SWEEP_SECONDS,
            ))
            .await
        {
            tracing::error!("Expired session cleanup stopped: {}", e);
        }
    });

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(config.cookie_secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            config.session_days,
        ))))
}

/// Creates the configured admin when the database has none yet.
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let admin = UserService::new(db)
        .ensure_admin(config.admin_email.as_deref(), config.admin_password.as_deref())
        .await?;

    if let Some(admin) = admin {
        tracing::info!("Created bootstrap admin {}", admin.email);
    }

    Ok(())
}

/// Runs the HTTP server until Ctrl-C or SIGTERM.
pub async fn serve(config: Config) -> Result<(), AppError> {
    let db = connect_to_database(&config).await?;
    let session_layer = connect_to_session(&db, &config).await?;

    bootstrap_admin(&db, &config).await?;

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    scheduler::sitemap::start_scheduler(db.clone(), &config).await?;

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(db, config, GuestbookFeed::default());
    let app = router::build_app_router(state, session_layer)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Waits for Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
