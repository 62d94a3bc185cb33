//! Repository for the `admin_permissions` table.

use motorhub_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::admin_permission::{AdminPermission, UpsertAdminPermission};

/// Column list shared across queries; 0/1 flags are read back as booleans.
const COLUMNS: &str = "id, admin_id, feature, \
                       (can_view <> 0) AS can_view, \
                       (can_create <> 0) AS can_create, \
                       (can_edit <> 0) AS can_edit, \
                       (can_delete <> 0) AS can_delete, \
                       (can_approve <> 0) AS can_approve, \
                       created_at, updated_at";

/// Provides read and upsert operations for admin permission rows.
pub struct AdminPermissionRepo;

impl AdminPermissionRepo {
    /// List every permission row for an admin, ordered by feature.
    pub async fn list_for_admin<'e, E>(
        executor: E,
        admin_id: DbId,
    ) -> Result<Vec<AdminPermission>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query =
            format!("SELECT {COLUMNS} FROM admin_permissions WHERE admin_id = $1 ORDER BY feature");
        sqlx::query_as::<_, AdminPermission>(&query)
            .bind(admin_id)
            .fetch_all(executor)
            .await
    }

    /// Insert or replace the row for `(admin_id, input.feature)`.
    pub async fn upsert<'e, E>(
        executor: E,
        admin_id: DbId,
        input: &UpsertAdminPermission,
    ) -> Result<AdminPermission, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO admin_permissions
                (admin_id, feature, can_view, can_create, can_edit, can_delete, can_approve)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT ON CONSTRAINT uq_admin_permissions_admin_feature DO UPDATE SET
                can_view = EXCLUDED.can_view,
                can_create = EXCLUDED.can_create,
                can_edit = EXCLUDED.can_edit,
                can_delete = EXCLUDED.can_delete,
                can_approve = EXCLUDED.can_approve,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        let flags = input.flags;
        sqlx::query_as::<_, AdminPermission>(&query)
            .bind(admin_id)
            .bind(&input.feature)
            .bind(i32::from(flags.can_view))
            .bind(i32::from(flags.can_create))
            .bind(i32::from(flags.can_edit))
            .bind(i32::from(flags.can_delete))
            .bind(i32::from(flags.can_approve))
            .fetch_one(executor)
            .await
    }

    /// Remove an admin's row for one feature. Returns `true` if a row was deleted.
    pub async fn delete<'e, E>(executor: E, admin_id: DbId, feature: &str) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM admin_permissions WHERE admin_id = $1 AND feature = $2")
            .bind(admin_id)
            .bind(feature)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
