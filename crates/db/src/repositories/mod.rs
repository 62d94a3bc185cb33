//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept any Postgres executor as the first argument: a `&PgPool` for
//! one-off calls, or `&mut *conn` for a connection acquired from the pool
//! and held for the duration of a scoped unit of work.

pub mod admin_permission_repo;
pub mod feature_settings_repo;
pub mod user_repo;

pub use admin_permission_repo::AdminPermissionRepo;
pub use feature_settings_repo::FeatureSettingsRepo;
pub use user_repo::UserRepo;
