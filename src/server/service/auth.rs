//! Password login and password changes.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::password::{
        hash_password, validate_password_strength, verify_dummy_password, verify_password,
    },
};

/// Service for credential checks against stored Argon2 hashes.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies an email and password pair.
    ///
    /// The email is trimmed and lowercased before lookup. An unknown email and a wrong
    /// password produce the same error and both pay for an Argon2 verification.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&email).await? else {
            verify_dummy_password(password);
            tracing::debug!("Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            tracing::debug!("Login attempt with wrong password for user {}", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("User {} logged in", user.id);

        Ok(user)
    }

    /// Replaces the user's password after verifying the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Current password does not verify
    /// - `Err(AppError::BadRequest)` - New password is too short
    pub async fn change_password(
        &self,
        user: &User,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if !verify_password(current_password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }
        validate_password_strength(new_password)?;

        let hash = hash_password(new_password)?;
        UserRepository::new(self.db)
            .update_password(user.id, hash)
            .await?;

        tracing::info!("User {} changed their password", user.id);

        Ok(())
    }
}
