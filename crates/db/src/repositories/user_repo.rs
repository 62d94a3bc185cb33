//! Repository for the `users` table.

use motorhub_core::roles::{ROLE_ADMIN, ROLE_SUPERADMIN};
use motorhub_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::user::{AdminUser, CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, name, password_hash, role, (is_blocked <> 0) AS is_blocked, \
                       created_at, updated_at";

/// Columns loaded for permission checks.
const ADMIN_COLUMNS: &str = "id, name, email, role, (is_blocked <> 0) AS is_blocked";

/// Provides read and seed operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateUser) -> Result<User, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO users (email, name, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(executor)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> Result<Option<User>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(executor)
            .await
    }

    /// Find a user by id, restricted to the `admin` and `superadmin` roles.
    ///
    /// Returns `None` for unknown ids and for ordinary users alike.
    pub async fn find_admin_by_id<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<AdminUser>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {ADMIN_COLUMNS} FROM users WHERE id = $1 AND role IN ($2, $3)");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(id)
            .bind(ROLE_ADMIN)
            .bind(ROLE_SUPERADMIN)
            .fetch_optional(executor)
            .await
    }

    /// Block or unblock a user. Returns `true` if the row was updated.
    pub async fn set_blocked<'e, E>(executor: E, id: DbId, blocked: bool) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result =
            sqlx::query("UPDATE users SET is_blocked = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(i32::from(blocked))
                .execute(executor)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
