//! Admin session state for the admin client.
//!
//! [`AdminAuthProvider`] moves through `Uninitialized -> Loading` and then
//! settles on `Authenticated` or `Anonymous`. It restores a session from the
//! stored token at startup, performs login and logout, and answers role
//! questions from the current identity.

use std::sync::Arc;

use chrono::Utc;
use motorhub_core::session::AdminProfile;

use crate::api::MotorhubApi;
use crate::session_store::SessionStore;
use crate::token::decode_unverified;

/// Message returned when the login request never reached the server.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Message returned when the server rejects a login without saying why.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Where the provider sends the user after logout.
pub const LOGOUT_REDIRECT: &str = "/";

/// Lifecycle of the admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Uninitialized,
    Loading,
    Authenticated(AdminProfile),
    Anonymous,
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl LoginOutcome {
    fn succeeded() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Performs client-side navigation.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}

/// Navigator for headless use. Ignores every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate_to(&self, _path: &str) {}
}

/// Owns the admin session for one client.
pub struct AdminAuthProvider {
    api: MotorhubApi,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    state: AuthState,
}

impl AdminAuthProvider {
    pub fn new(
        api: MotorhubApi,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            store,
            navigator,
            state: AuthState::Uninitialized,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// The signed-in admin, if any.
    pub fn admin(&self) -> Option<&AdminProfile> {
        match &self.state {
            AuthState::Authenticated(admin) => Some(admin),
            _ => None,
        }
    }

    /// `true` until [`initialize`](Self::initialize) has settled.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, AuthState::Uninitialized | AuthState::Loading)
    }

    pub fn is_admin(&self) -> bool {
        self.admin().is_some_and(AdminProfile::is_admin)
    }

    pub fn is_super_admin(&self) -> bool {
        self.admin().is_some_and(AdminProfile::is_super_admin)
    }

    /// The stored session token, for attaching to API requests.
    pub fn token(&self) -> Option<String> {
        self.store.get().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read stored admin token");
            None
        })
    }

    /// Restore the session from the stored token.
    ///
    /// Never fails. A stored token that cannot be used is removed and the
    /// provider settles on [`AuthState::Anonymous`].
    pub fn initialize(&mut self) {
        self.state = AuthState::Loading;

        let token = match self.store.get() {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.state = AuthState::Anonymous;
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored admin session is unreadable");
                self.discard_token();
                self.state = AuthState::Anonymous;
                return;
            }
        };

        self.state = match decode_unverified(&token) {
            Ok(claims) if claims.is_expired_at(Utc::now().timestamp()) => {
                tracing::info!(user_id = claims.user_id, "Stored admin token has expired");
                self.discard_token();
                AuthState::Anonymous
            }
            Ok(claims) => {
                tracing::debug!(user_id = claims.user_id, "Restored admin session");
                AuthState::Authenticated(claims.into())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored admin token is malformed");
                self.discard_token();
                AuthState::Anonymous
            }
        };
    }

    /// Log in with admin credentials.
    ///
    /// On success the returned token is persisted and the identity is
    /// replaced with the admin record from the server. Nothing is persisted
    /// on failure, and failed requests are not retried.
    pub async fn login(&mut self, email: &str, password: &str) -> LoginOutcome {
        let reply = match self.api.admin_login(email, password).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "Admin login request failed");
                return LoginOutcome::failed(NETWORK_ERROR_MESSAGE);
            }
        };

        let (true, Some(token), Some(admin)) = (reply.success, reply.token, reply.admin) else {
            return LoginOutcome::failed(reply.error.unwrap_or_else(|| LOGIN_FAILED_MESSAGE.into()));
        };

        if let Err(e) = self.store.set(&token) {
            tracing::warn!(error = %e, "Failed to persist admin token");
        }
        tracing::info!(user_id = admin.id, role = %admin.role, "Admin logged in");
        self.state = AuthState::Authenticated(admin);
        LoginOutcome::succeeded()
    }

    /// Drop the session and navigate to the site root.
    pub fn logout(&mut self) {
        self.discard_token();
        self.state = AuthState::Anonymous;
        self.navigator.navigate_to(LOGOUT_REDIRECT);
    }

    fn discard_token(&self) {
        if let Err(e) = self.store.remove() {
            tracing::warn!(error = %e, "Failed to remove stored admin token");
        }
    }
}
