use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session user and checks every permission in `permissions`.
    ///
    /// An empty slice only requires a logged-in user that still exists.
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin action without the admin role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Returns the session user if one is logged in, without failing otherwise.
    ///
    /// Used by public endpoints that reveal more to admins, such as news drafts.
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        Ok(user)
    }
}
