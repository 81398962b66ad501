//! Type-safe session management wrappers.
//!
//! `AuthSession` wraps a tower-sessions `Session` and exposes only the operations the
//! login flow needs, keeping the session key in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

/// Session key holding the authenticated user's database id.
pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user's id and the session lifecycle
/// operations performed at login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Called after successful authentication to establish a logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Issues a new session id while keeping the data.
    ///
    /// Called at login so a session id observed before authentication cannot be reused.
    pub async fn cycle(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        Ok(())
    }

    /// Deletes the session from the store and clears its data.
    ///
    /// Used during logout.
    pub async fn flush(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
