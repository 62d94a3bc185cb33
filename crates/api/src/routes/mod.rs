pub mod admin;
pub mod auth;
pub mod health;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/admin-login                   admin login (public)
///
/// /settings/features                  feature toggles (public)
///
/// /admin/settings/features            update toggles (settings:edit)
/// /admin/permissions/check            caller's decision for feature+action
/// /admin/permissions/me               caller's permission rows
/// /admin/permissions/{admin_id}       list, upsert (superadmin only)
/// /admin/permissions/{admin_id}/{feature}  revoke (superadmin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/settings", settings::router())
        .nest("/admin", admin::router())
}
