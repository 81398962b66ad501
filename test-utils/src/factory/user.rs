//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::Argon2;
use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password assigned to factory users unless overridden.
pub const DEFAULT_PASSWORD: &str = "garden-password";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("me@example.com")
///     .display_name("Me")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    display_name: String,
    password: String,
    role: UserRole,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - display_name: `"User {id}"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - role: `Member`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            display_name: format!("User {}", id),
            password: DEFAULT_PASSWORD.to_string(),
            role: UserRole::Member,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the plaintext password; it is hashed with Argon2id on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the user's role to admin (`true`) or member (`false`).
    pub fn admin(mut self, admin: bool) -> Self {
        self.role = if admin {
            UserRole::Admin
        } else {
            UserRole::Member
        };
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert or password hashing failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(self.password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_string();

        let now = Utc::now();
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            display_name: ActiveValue::Set(self.display_name),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}
