//! Handler for admin login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use motorhub_core::session::AdminProfile;
use motorhub_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_session_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Message for every credential failure, so the response does not reveal
/// which part was wrong.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/admin-login`.
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for `POST /auth/admin-login`, on success and rejection alike.
#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AdminLoginResponse {
    fn rejected(status: StatusCode, message: &str) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                success: false,
                token: None,
                admin: None,
                error: Some(message.to_string()),
            }),
        )
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/admin-login
///
/// Exchange admin credentials for a session token. Ordinary users and
/// blocked admins are rejected.
pub async fn admin_login(
    State(state): State<AppState>,
    Json(input): Json<AdminLoginRequest>,
) -> AppResult<(StatusCode, Json<AdminLoginResponse>)> {
    let Some(user) = UserRepo::find_by_email(&state.pool, &input.email).await? else {
        tracing::info!("Admin login for unknown email");
        return Ok(AdminLoginResponse::rejected(
            StatusCode::UNAUTHORIZED,
            INVALID_CREDENTIALS,
        ));
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Admin login with wrong password");
        return Ok(AdminLoginResponse::rejected(
            StatusCode::UNAUTHORIZED,
            INVALID_CREDENTIALS,
        ));
    }

    let is_admin = user.role().is_ok_and(|role| role.is_admin());
    if !is_admin {
        tracing::info!(user_id = user.id, role = %user.role, "Non-admin attempted admin login");
        return Ok(AdminLoginResponse::rejected(
            StatusCode::FORBIDDEN,
            "Admin access required",
        ));
    }

    if user.is_blocked {
        tracing::info!(user_id = user.id, "Blocked admin attempted login");
        return Ok(AdminLoginResponse::rejected(
            StatusCode::FORBIDDEN,
            "Account is blocked",
        ));
    }

    let admin = user.profile();
    let token = generate_session_token(&admin, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = admin.id, role = %admin.role, "Admin logged in");

    Ok((
        StatusCode::OK,
        Json(AdminLoginResponse {
            success: true,
            token: Some(token),
            admin: Some(admin),
            error: None,
        }),
    ))
}
