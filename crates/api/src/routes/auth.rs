//! Route definitions for the `/auth` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST   /admin-login             -> admin_login
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/admin-login", post(auth::admin_login))
}
