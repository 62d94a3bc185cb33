//! Admin permission entity model and DTOs.

use motorhub_core::permissions::PermissionFlags;
use motorhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `admin_permissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminPermission {
    pub id: DbId,
    pub admin_id: DbId,
    pub feature: String,
    pub can_view: bool,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_approve: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AdminPermission {
    pub fn flags(&self) -> PermissionFlags {
        PermissionFlags {
            can_view: self.can_view,
            can_create: self.can_create,
            can_edit: self.can_edit,
            can_delete: self.can_delete,
            can_approve: self.can_approve,
        }
    }
}

/// DTO for granting or replacing an admin's capabilities on one feature.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertAdminPermission {
    pub feature: String,
    #[serde(flatten)]
    pub flags: PermissionFlags,
}
