//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

use crate::model::user::UserDto;

/// Account able to log in to the admin panel.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Lowercased login email.
    pub email: String,
    pub display_name: String,
    /// Argon2id hash in PHC string format.
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash never leaves the server.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            display_name: self.display_name,
            role: role_name(&self.role).to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            display_name: entity.display_name,
            password_hash: entity.password_hash,
            role: entity.role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Lowercase role name as stored in the database.
pub fn role_name(role: &UserRole) -> &'static str {
    match role {
        UserRole::Admin => "admin",
        UserRole::Member => "member",
    }
}

/// Parameters for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    /// Already lowercased email.
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub role: UserRole,
}
