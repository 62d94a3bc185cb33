use std::sync::Arc;

use crate::config::ServerConfig;
use crate::permissions::PermissionResolver;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: motorhub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Admin permission resolver (reads through its own store).
    pub permissions: Arc<PermissionResolver>,
}
