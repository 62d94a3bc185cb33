//! Read access to admin standing and permission rows.
//!
//! [`PermissionStore`] is the seam between the resolver and the database.
//! [`PgPermissionStore`] is the production implementation;
//! [`MemoryPermissionStore`] backs tests and local tooling.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use motorhub_core::permissions::PermissionFlags;
use motorhub_core::roles::is_admin_role;
use motorhub_core::types::DbId;
use motorhub_db::models::admin_permission::AdminPermission;
use motorhub_db::models::user::AdminUser;
use motorhub_db::repositories::{AdminPermissionRepo, UserRepo};
use motorhub_db::DbPool;

/// Errors from a permission store read.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Permission store unavailable")]
    Unavailable,
}

/// Source of the two reads a permission check performs.
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// Look up a user by id, restricted to the `admin` and `superadmin` roles.
    async fn find_admin(&self, admin_id: DbId) -> Result<Option<AdminUser>, StoreError>;

    /// Every permission row held by an admin.
    async fn list_permissions(&self, admin_id: DbId) -> Result<Vec<AdminPermission>, StoreError>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// Store backed by the injected connection pool.
///
/// Each read acquires its own pooled connection and releases it when the
/// connection guard drops, on success and error paths alike.
#[derive(Clone)]
pub struct PgPermissionStore {
    pool: DbPool,
}

impl PgPermissionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PermissionStore for PgPermissionStore {
    async fn find_admin(&self, admin_id: DbId) -> Result<Option<AdminUser>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Ok(UserRepo::find_admin_by_id(&mut *conn, admin_id).await?)
    }

    async fn list_permissions(&self, admin_id: DbId) -> Result<Vec<AdminPermission>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Ok(AdminPermissionRepo::list_for_admin(&mut *conn, admin_id).await?)
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MemoryState {
    users: HashMap<DbId, AdminUser>,
    permissions: Vec<AdminPermission>,
    next_permission_id: DbId,
}

/// In-memory store with the same filtering rules as the database queries.
///
/// Counts every read so callers can observe that nothing is cached, and can
/// be switched to fail every read to exercise error paths.
#[derive(Default)]
pub struct MemoryPermissionStore {
    state: RwLock<MemoryState>,
    reads: AtomicUsize,
    unavailable: AtomicBool,
}

impl MemoryPermissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a user of any role.
    pub fn insert_user(&self, id: DbId, name: &str, role: &str, is_blocked: bool) {
        let user = AdminUser {
            id,
            name: name.to_string(),
            email: format!("{}@motorhub.test", name.to_lowercase()),
            role: role.to_string(),
            is_blocked,
        };
        self.write().users.insert(id, user);
    }

    pub fn set_blocked(&self, id: DbId, is_blocked: bool) {
        if let Some(user) = self.write().users.get_mut(&id) {
            user.is_blocked = is_blocked;
        }
    }

    /// Insert or replace the row for `(admin_id, feature)`.
    pub fn grant(&self, admin_id: DbId, feature: &str, flags: PermissionFlags) {
        let mut state = self.write();
        let now = Utc::now();
        if let Some(row) = state
            .permissions
            .iter_mut()
            .find(|p| p.admin_id == admin_id && p.feature == feature)
        {
            row.can_view = flags.can_view;
            row.can_create = flags.can_create;
            row.can_edit = flags.can_edit;
            row.can_delete = flags.can_delete;
            row.can_approve = flags.can_approve;
            row.updated_at = now;
            return;
        }
        state.next_permission_id += 1;
        let id = state.next_permission_id;
        state.permissions.push(AdminPermission {
            id,
            admin_id,
            feature: feature.to_string(),
            can_view: flags.can_view,
            can_create: flags.can_create,
            can_edit: flags.can_edit,
            can_delete: flags.can_delete,
            can_approve: flags.can_approve,
            created_at: now,
            updated_at: now,
        });
    }

    pub fn revoke(&self, admin_id: DbId, feature: &str) {
        self.write()
            .permissions
            .retain(|p| !(p.admin_id == admin_id && p.feature == feature));
    }

    /// Make every subsequent read fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of reads served so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn begin_read(&self) -> Result<(), StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        Ok(())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, MemoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, MemoryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl PermissionStore for MemoryPermissionStore {
    async fn find_admin(&self, admin_id: DbId) -> Result<Option<AdminUser>, StoreError> {
        self.begin_read()?;
        Ok(self
            .read()
            .users
            .get(&admin_id)
            .filter(|u| is_admin_role(&u.role))
            .cloned())
    }

    async fn list_permissions(&self, admin_id: DbId) -> Result<Vec<AdminPermission>, StoreError> {
        self.begin_read()?;
        Ok(self
            .read()
            .permissions
            .iter()
            .filter(|p| p.admin_id == admin_id)
            .cloned()
            .collect())
    }
}
