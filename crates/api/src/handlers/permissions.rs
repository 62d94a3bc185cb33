//! Handlers for the `/admin/permissions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use motorhub_core::error::CoreError;
use motorhub_core::permissions::PermissionAction;
use motorhub_core::types::DbId;
use motorhub_db::models::admin_permission::{AdminPermission, UpsertAdminPermission};
use motorhub_db::repositories::{AdminPermissionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireSuperAdmin};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /admin/permissions/check`.
#[derive(Debug, Deserialize)]
pub struct CheckParams {
    pub feature: String,
    pub action: String,
}

/// The resolver's decision for the caller.
#[derive(Debug, Serialize)]
pub struct PermissionCheck {
    pub admin_id: DbId,
    pub feature: String,
    pub action: PermissionAction,
    pub allowed: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/admin/permissions/check?feature=&action=
///
/// Ask the resolver whether the caller may perform `action` on `feature`.
pub async fn check(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(params): Query<CheckParams>,
) -> AppResult<Json<DataResponse<PermissionCheck>>> {
    let action: PermissionAction = params.action.parse()?;
    let allowed = state
        .permissions
        .check_permission(admin.user_id, &params.feature, action)
        .await;

    Ok(Json(DataResponse {
        data: PermissionCheck {
            admin_id: admin.user_id,
            feature: params.feature,
            action,
            allowed,
        },
    }))
}

/// GET /api/admin/permissions/me
///
/// The caller's own permission rows.
pub async fn my_permissions(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<AdminPermission>>>> {
    let rows = state
        .permissions
        .store()
        .list_permissions(admin.user_id)
        .await
        .map_err(|e| AppError::InternalError(format!("Permission lookup failed: {e}")))?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/admin/permissions/{admin_id}
pub async fn list_for_admin(
    State(state): State<AppState>,
    RequireSuperAdmin(_caller): RequireSuperAdmin,
    Path(admin_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<AdminPermission>>>> {
    let rows = AdminPermissionRepo::list_for_admin(&state.pool, admin_id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// PUT /api/admin/permissions/{admin_id}
///
/// Grant or replace the target admin's capabilities on one feature.
pub async fn upsert_for_admin(
    State(state): State<AppState>,
    RequireSuperAdmin(caller): RequireSuperAdmin,
    Path(admin_id): Path<DbId>,
    Json(input): Json<UpsertAdminPermission>,
) -> AppResult<Json<DataResponse<AdminPermission>>> {
    if input.feature.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "feature must not be empty".into(),
        )));
    }

    UserRepo::find_admin_by_id(&state.pool, admin_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "admin",
            id: admin_id,
        }))?;

    let row = AdminPermissionRepo::upsert(&state.pool, admin_id, &input).await?;
    tracing::info!(
        granted_by = caller.user_id,
        admin_id,
        feature = %row.feature,
        "Admin permission updated"
    );
    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/admin/permissions/{admin_id}/{feature}
///
/// Revoke the target admin's row for one feature. Returns 204 whether or
/// not a row existed.
pub async fn revoke_for_admin(
    State(state): State<AppState>,
    RequireSuperAdmin(caller): RequireSuperAdmin,
    Path((admin_id, feature)): Path<(DbId, String)>,
) -> AppResult<StatusCode> {
    let removed = AdminPermissionRepo::delete(&state.pool, admin_id, &feature).await?;
    if removed {
        tracing::info!(revoked_by = caller.user_id, admin_id, feature = %feature, "Admin permission revoked");
    }
    Ok(StatusCode::NO_CONTENT)
}
