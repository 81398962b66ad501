//! User data repository for database operations.
//!
//! Provides the `UserRepository` for creating users, looking them up by id or email,
//! and replacing password hashes, with conversion to the `User` domain model at the
//! repository boundary.

use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Email (already lowercased), display name, password hash and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            display_name: ActiveValue::Set(param.display_name),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their database id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email. The caller passes the lowercased form.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup and by the seed command to decide whether the configured
    /// bootstrap admin should be created.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Replaces a user's password hash and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(true)` - Password updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_password(&self, user_id: i32, password_hash: String) -> Result<bool, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.password_hash = ActiveValue::Set(password_hash);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(true)
    }
}
