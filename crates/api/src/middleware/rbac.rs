//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the minimum requirement.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use motorhub_core::error::CoreError;
use motorhub_core::roles::{is_admin_role, Role};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an `admin` or `superadmin` token. Rejects with 403 otherwise.
///
/// Only the token is consulted; handlers that act on a feature must still
/// call the permission resolver.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !is_admin_role(&user.role) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Requires a superadmin whose account is currently unblocked.
///
/// Unlike [`RequireAdmin`], the role and blocked flag are re-read from the
/// permission store, so demoting or blocking a superadmin takes effect
/// before their token expires.
pub struct RequireSuperAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireSuperAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let admin = state
            .permissions
            .store()
            .find_admin(user.user_id)
            .await
            .map_err(|e| AppError::InternalError(format!("Admin lookup failed: {e}")))?;

        let in_good_standing = admin
            .as_ref()
            .is_some_and(|a| !a.is_blocked && a.role().is_ok_and(Role::is_super_admin));

        if !in_good_standing {
            return Err(AppError::Core(CoreError::Forbidden(
                "Superadmin role required".into(),
            )));
        }
        Ok(RequireSuperAdmin(user))
    }
}
