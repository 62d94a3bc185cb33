//! User entity model and DTOs.

use motorhub_core::error::CoreError;
use motorhub_core::roles::Role;
use motorhub_core::session::AdminProfile;
use motorhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`AdminProfile`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: String,
    pub is_blocked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    pub fn role(&self) -> Result<Role, CoreError> {
        self.role.parse()
    }

    pub fn profile(&self) -> AdminProfile {
        AdminProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// The slice of a user row the permission resolver reads: identity, role,
/// and blocked flag. Only rows with an admin role are ever loaded into it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct AdminUser {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_blocked: bool,
}

impl AdminUser {
    pub fn role(&self) -> Result<Role, CoreError> {
        self.role.parse()
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: String,
}
