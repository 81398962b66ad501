//! User service for account management.
//!
//! Backs the maintenance commands (`create-admin`, `reset-password`, `seed`) and the
//! startup bootstrap that creates the configured admin on an empty database.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, User},
    util::{
        password::{hash_password, validate_password_strength},
        validate,
    },
};

/// Display name used when none is supplied for a new admin.
const DEFAULT_ADMIN_NAME: &str = "Admin";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an admin account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created admin
    /// - `Err(AppError::BadRequest)` - Invalid email or too-short password
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn create_admin(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<User, AppError> {
        let email = validate::email(email)?;
        validate_password_strength(password)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "A user with email {email} already exists"
            )));
        }

        let display_name = match display_name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_ADMIN_NAME.to_string(),
        };

        let user = user_repo
            .create(CreateUserParam {
                email,
                display_name,
                password_hash: hash_password(password)?,
                role: UserRole::Admin,
            })
            .await?;

        tracing::info!("Created admin user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Replaces the password of the user with `email`.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No user with that email
    pub async fn reset_password(&self, email: &str, password: &str) -> Result<(), AppError> {
        validate_password_strength(password)?;
        let email = email.trim().to_lowercase();

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AppError::NotFound(format!("No user with email {email}")));
        };

        user_repo
            .update_password(user.id, hash_password(password)?)
            .await?;

        tracing::info!("Reset password for user {}", user.id);

        Ok(())
    }

    /// Creates the configured admin when no admin exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Admin created
    /// - `Ok(None)` - An admin already exists, or no credentials were configured
    pub async fn ensure_admin(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        if user_repo.admin_exists().await? {
            return Ok(None);
        }

        let (Some(email), Some(password)) = (email, password) else {
            tracing::warn!(
                "No admin user exists; set ADMIN_EMAIL and ADMIN_PASSWORD or run `garden create-admin`"
            );
            return Ok(None);
        };

        let user = self.create_admin(email, password, None).await?;
        Ok(Some(user))
    }
}
