//! Route definitions for the public `/settings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET    /features                -> get_features
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/features", get(settings::get_features))
}
