//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the application. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{config::Config, service::guestbook::feed::GuestbookFeed};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<Config>` is a reference-counted pointer
/// - `GuestbookFeed` wraps a broadcast sender
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Application configuration loaded at startup.
    ///
    /// Used for upload limits and directories and the public site URL.
    pub config: Arc<Config>,

    /// Realtime guestbook event feed.
    ///
    /// Services publish submissions and moderation decisions here; SSE handlers
    /// subscribe to stream them to connected clients.
    pub guestbook_feed: GuestbookFeed,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration
    /// - `guestbook_feed` - Broadcast feed for guestbook events
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: Config, guestbook_feed: GuestbookFeed) -> Self {
        Self {
            db,
            config: Arc::new(config),
            guestbook_feed,
        }
    }
}
