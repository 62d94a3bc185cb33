//! Handlers for the feature settings resource.

use axum::extract::State;
use axum::Json;
use motorhub_core::error::CoreError;
use motorhub_core::feature_settings::FeatureSettings;
use motorhub_core::permissions::{features, PermissionAction};
use motorhub_db::models::feature_settings::UpdateFeatureSettings;
use motorhub_db::repositories::FeatureSettingsRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Entity name used in not-found errors.
const ENTITY: &str = "feature_settings";

/// GET /api/settings/features
///
/// Public. Returns 404 until the settings row has been written, which the
/// client treats as "keep the built-in defaults".
pub async fn get_features(State(state): State<AppState>) -> AppResult<Json<FeatureSettings>> {
    let row = FeatureSettingsRepo::get(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: 1,
        }))?;
    Ok(Json(row.into()))
}

/// PUT /api/admin/settings/features
///
/// Requires `edit` on the `settings` feature.
pub async fn update_features(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<UpdateFeatureSettings>,
) -> AppResult<Json<FeatureSettings>> {
    state
        .permissions
        .require_permission(admin.user_id, features::SETTINGS, PermissionAction::Edit)
        .await?;

    let row = FeatureSettingsRepo::upsert(&state.pool, &input, admin.user_id).await?;
    tracing::info!(
        admin_id = admin.user_id,
        maintenance_mode = row.maintenance_mode,
        "Feature settings updated"
    );
    Ok(Json(row.into()))
}
