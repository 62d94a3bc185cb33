//! Route definitions for the `/admin` resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{permissions, settings};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require an admin token (enforced by handler extractors).
///
/// ```text
/// PUT    /settings/features            -> update_features   (settings:edit)
/// GET    /permissions/check            -> check
/// GET    /permissions/me               -> my_permissions
/// GET    /permissions/{admin_id}       -> list_for_admin    (superadmin)
/// PUT    /permissions/{admin_id}       -> upsert_for_admin  (superadmin)
/// DELETE /permissions/{admin_id}/{feature} -> revoke_for_admin (superadmin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/settings/features", put(settings::update_features))
        .route("/permissions/check", get(permissions::check))
        .route("/permissions/me", get(permissions::my_permissions))
        .route(
            "/permissions/{admin_id}",
            get(permissions::list_for_admin).put(permissions::upsert_for_admin),
        )
        .route(
            "/permissions/{admin_id}/{feature}",
            delete(permissions::revoke_for_admin),
        )
}
