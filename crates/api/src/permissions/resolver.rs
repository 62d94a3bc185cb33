//! Admin permission decisions.
//!
//! A check reads the admin's standing first and only scans the permission
//! table when the standing alone cannot decide. The two reads are issued
//! sequentially and nothing is cached between calls, so a check always
//! reflects the current rows (at the cost of a round-trip per read).

use std::sync::Arc;

use motorhub_core::permissions::{gate, table_allows, Gate, PermissionAction};
use motorhub_core::types::DbId;

use super::store::{PermissionStore, StoreError};

/// Raised by [`PermissionResolver::require_permission`] when the check fails.
#[derive(Debug, thiserror::Error)]
pub enum PermissionError {
    #[error("Access denied: {action} on '{feature}'")]
    AccessDenied {
        feature: String,
        action: PermissionAction,
    },
}

/// Decides whether an admin may perform an action on a feature.
#[derive(Clone)]
pub struct PermissionResolver {
    store: Arc<dyn PermissionStore>,
}

impl PermissionResolver {
    pub fn new(store: Arc<dyn PermissionStore>) -> Self {
        Self { store }
    }

    /// The store this resolver reads through.
    pub fn store(&self) -> &dyn PermissionStore {
        self.store.as_ref()
    }

    /// `true` if `admin_id` may perform `action` on `feature`.
    ///
    /// Never fails: a store error is logged and treated as a denial.
    pub async fn check_permission(
        &self,
        admin_id: DbId,
        feature: &str,
        action: PermissionAction,
    ) -> bool {
        match self.evaluate(admin_id, feature, action).await {
            Ok(allowed) => allowed,
            Err(e) => {
                tracing::error!(admin_id, feature, %action, error = %e, "Permission check failed");
                false
            }
        }
    }

    /// Like [`check_permission`](Self::check_permission), but fails with
    /// [`PermissionError::AccessDenied`] when the check is `false`.
    pub async fn require_permission(
        &self,
        admin_id: DbId,
        feature: &str,
        action: PermissionAction,
    ) -> Result<(), PermissionError> {
        if self.check_permission(admin_id, feature, action).await {
            Ok(())
        } else {
            Err(PermissionError::AccessDenied {
                feature: feature.to_string(),
                action,
            })
        }
    }

    async fn evaluate(
        &self,
        admin_id: DbId,
        feature: &str,
        action: PermissionAction,
    ) -> Result<bool, StoreError> {
        let admin = self.store.find_admin(admin_id).await?;

        let standing = match &admin {
            Some(admin) => match admin.role() {
                Ok(role) => Some((role, admin.is_blocked)),
                Err(e) => {
                    tracing::warn!(admin_id, error = %e, "Admin has an unrecognised role");
                    None
                }
            },
            None => None,
        };

        match gate(standing) {
            Gate::Deny => Ok(false),
            Gate::Grant => Ok(true),
            Gate::ConsultTable => {
                let rows = self.store.list_permissions(admin_id).await?;
                Ok(table_allows(
                    rows.iter().map(|row| (row.feature.as_str(), row.flags())),
                    feature,
                    action,
                ))
            }
        }
    }
}
