//! Admin auth provider against a stub login endpoint.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use common::{api_for, dead_url, spawn_server, Hits, RecordingNavigator};
use jsonwebtoken::{encode, EncodingKey, Header};
use motorhub_client::auth_provider::{LOGIN_FAILED_MESSAGE, NETWORK_ERROR_MESSAGE};
use motorhub_client::{
    AdminAuthProvider, AuthState, FileSessionStore, MemorySessionStore, NoopNavigator, SessionStore,
};
use motorhub_core::session::SessionClaims;
use serde_json::{json, Value};

fn signed_token(role: &str, exp: i64) -> String {
    let claims = SessionClaims {
        user_id: 12,
        name: "Casey".into(),
        email: "casey@motorhub.test".into(),
        role: role.into(),
        exp,
        iat: 0,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"server")).unwrap()
}

fn in_an_hour() -> i64 {
    chrono::Utc::now().timestamp() + 3600
}

fn provider(url: &str, store: Arc<MemorySessionStore>) -> AdminAuthProvider {
    AdminAuthProvider::new(api_for(url), store, Arc::new(NoopNavigator))
}

/// Login endpoint answering every request with `status` and `body`.
fn login_router(status: StatusCode, body: Value, hits: Hits) -> Router {
    Router::new().route(
        "/api/auth/admin-login",
        post(move |Json(_req): Json<Value>| {
            let body = body.clone();
            let hits = hits.clone();
            async move {
                hits.bump();
                (status, Json(body))
            }
        }),
    )
}

// ---------------------------------------------------------------------------
// initialize
// ---------------------------------------------------------------------------

#[tokio::test]
async fn initialize_without_token_is_anonymous() {
    let store = Arc::new(MemorySessionStore::new());
    let mut auth = provider(&dead_url().await, store);

    assert_eq!(auth.state(), &AuthState::Uninitialized);
    assert!(auth.is_loading());

    auth.initialize();
    assert_eq!(auth.state(), &AuthState::Anonymous);
    assert!(!auth.is_loading());
    assert!(!auth.is_admin());
}

#[tokio::test]
async fn initialize_restores_identity_from_valid_token() {
    let store = Arc::new(MemorySessionStore::with_token(signed_token(
        "superadmin",
        in_an_hour(),
    )));
    let mut auth = provider(&dead_url().await, store.clone());

    auth.initialize();

    let admin = auth.admin().expect("should be authenticated");
    assert_eq!(admin.id, 12);
    assert_eq!(admin.name, "Casey");
    assert!(auth.is_admin());
    assert!(auth.is_super_admin());
    assert!(store.get().unwrap().is_some(), "valid token is kept");
}

#[tokio::test]
async fn initialize_discards_expired_token() {
    let expired = chrono::Utc::now().timestamp() - 10;
    let store = Arc::new(MemorySessionStore::with_token(signed_token("admin", expired)));
    let mut auth = provider(&dead_url().await, store.clone());

    auth.initialize();

    assert_eq!(auth.state(), &AuthState::Anonymous);
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test]
async fn initialize_discards_malformed_token() {
    let store = Arc::new(MemorySessionStore::with_token("definitely-not-a-jwt"));
    let mut auth = provider(&dead_url().await, store.clone());

    auth.initialize();

    assert_eq!(auth.state(), &AuthState::Anonymous);
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test]
async fn plain_admin_is_not_super_admin() {
    let store = Arc::new(MemorySessionStore::with_token(signed_token(
        "admin",
        in_an_hour(),
    )));
    let mut auth = provider(&dead_url().await, store);

    auth.initialize();
    assert!(auth.is_admin());
    assert!(!auth.is_super_admin());
}

// ---------------------------------------------------------------------------
// login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_success_persists_token_and_identity() {
    let token = signed_token("admin", in_an_hour());
    let body = json!({
        "success": true,
        "token": token,
        "admin": { "id": 44, "name": "Server Name", "email": "s@motorhub.test", "role": "admin" }
    });
    let hits = Hits::default();
    let url = spawn_server(login_router(StatusCode::OK, body, hits.clone())).await;
    let store = Arc::new(MemorySessionStore::new());
    let mut auth = provider(&url, store.clone());
    auth.initialize();

    let outcome = auth.login("s@motorhub.test", "pw").await;

    assert!(outcome.success);
    assert_eq!(outcome.message, None);
    assert_eq!(auth.token().as_deref(), Some(token.as_str()));
    assert_eq!(store.get().unwrap(), Some(token));
    let admin = auth.admin().unwrap();
    assert_eq!(admin.id, 44, "identity comes from the response, not the token");
    assert_eq!(admin.name, "Server Name");
    assert_eq!(hits.count(), 1);
}

#[tokio::test]
async fn login_rejection_returns_server_message() {
    let body = json!({ "success": false, "error": "Invalid email or password" });
    let hits = Hits::default();
    let url = spawn_server(login_router(StatusCode::UNAUTHORIZED, body, hits)).await;
    let store = Arc::new(MemorySessionStore::new());
    let mut auth = provider(&url, store.clone());
    auth.initialize();

    let outcome = auth.login("a@b.c", "wrong").await;

    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Invalid email or password"));
    assert_eq!(store.get().unwrap(), None);
    assert_eq!(auth.state(), &AuthState::Anonymous);
}

#[tokio::test]
async fn login_rejection_without_message_uses_fallback() {
    let url = spawn_server(login_router(
        StatusCode::FORBIDDEN,
        json!({ "success": false }),
        Hits::default(),
    ))
    .await;
    let mut auth = provider(&url, Arc::new(MemorySessionStore::new()));

    let outcome = auth.login("a@b.c", "pw").await;
    assert_eq!(outcome.message.as_deref(), Some(LOGIN_FAILED_MESSAGE));
}

#[tokio::test]
async fn login_transport_failure_reports_network_error() {
    let store = Arc::new(MemorySessionStore::new());
    let mut auth = provider(&dead_url().await, store.clone());

    let outcome = auth.login("a@b.c", "pw").await;

    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some(NETWORK_ERROR_MESSAGE));
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test]
async fn login_replaces_previous_identity() {
    let body = json!({
        "success": true,
        "token": "new-token",
        "admin": { "id": 2, "name": "Second", "email": "two@motorhub.test", "role": "admin" }
    });
    let url = spawn_server(login_router(StatusCode::OK, body, Hits::default())).await;
    let store = Arc::new(MemorySessionStore::with_token(signed_token(
        "superadmin",
        in_an_hour(),
    )));
    let mut auth = provider(&url, store.clone());
    auth.initialize();
    assert!(auth.is_super_admin());

    auth.login("two@motorhub.test", "pw").await;

    assert_matches!(auth.state(), AuthState::Authenticated(admin) if admin.id == 2);
    assert!(!auth.is_super_admin());
    assert_eq!(store.get().unwrap().as_deref(), Some("new-token"));
}

// ---------------------------------------------------------------------------
// logout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn logout_clears_session_and_navigates_home() {
    let store = Arc::new(MemorySessionStore::with_token(signed_token(
        "admin",
        in_an_hour(),
    )));
    let navigator = Arc::new(RecordingNavigator::default());
    let mut auth = AdminAuthProvider::new(api_for(&dead_url().await), store.clone(), navigator.clone());
    auth.initialize();
    assert!(auth.is_admin());

    auth.logout();

    assert_eq!(auth.state(), &AuthState::Anonymous);
    assert!(!auth.is_admin());
    assert_eq!(store.get().unwrap(), None);
    assert_eq!(*navigator.visits.lock().unwrap(), vec!["/".to_string()]);
}

#[tokio::test]
async fn login_success_without_token_is_a_failure() {
    let body = json!({
        "success": true,
        "admin": { "id": 3, "name": "No Token", "email": "n@motorhub.test", "role": "admin" }
    });
    let url = spawn_server(login_router(StatusCode::OK, body, Hits::default())).await;
    let store = Arc::new(MemorySessionStore::new());
    let mut auth = provider(&url, store.clone());
    auth.initialize();

    let outcome = auth.login("n@motorhub.test", "pw").await;

    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some(LOGIN_FAILED_MESSAGE));
    assert_eq!(store.get().unwrap(), None);
    assert_eq!(auth.state(), &AuthState::Anonymous);
}

#[tokio::test]
async fn login_success_without_admin_is_a_failure() {
    let url = spawn_server(login_router(
        StatusCode::OK,
        json!({ "success": true, "token": "orphan" }),
        Hits::default(),
    ))
    .await;
    let store = Arc::new(MemorySessionStore::new());
    let mut auth = provider(&url, store.clone());

    let outcome = auth.login("n@motorhub.test", "pw").await;

    assert_eq!(outcome.message.as_deref(), Some(LOGIN_FAILED_MESSAGE));
    assert_eq!(store.get().unwrap(), None);
}

// ---------------------------------------------------------------------------
// file-backed session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreadable_session_file_is_reset_and_login_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();

    let token = signed_token("admin", in_an_hour());
    let body = json!({
        "success": true,
        "token": token,
        "admin": { "id": 12, "name": "Casey", "email": "casey@motorhub.test", "role": "admin" }
    });
    let url = spawn_server(login_router(StatusCode::OK, body, Hits::default())).await;
    let store = Arc::new(FileSessionStore::new(&path));
    let mut auth = AdminAuthProvider::new(api_for(&url), store.clone(), Arc::new(NoopNavigator));

    auth.initialize();
    assert_eq!(auth.state(), &AuthState::Anonymous);
    assert_eq!(store.get().unwrap(), None, "unreadable file is discarded");

    assert!(auth.login("casey@motorhub.test", "pw").await.success);
    assert_eq!(store.get().unwrap(), Some(token.clone()));

    let mut restarted =
        AdminAuthProvider::new(api_for(&dead_url().await), store, Arc::new(NoopNavigator));
    restarted.initialize();
    assert_eq!(restarted.admin().map(|a| a.id), Some(12));
}
