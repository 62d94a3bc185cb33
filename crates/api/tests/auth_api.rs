//! HTTP-level tests for admin login and the auth extractors.
//!
//! Extractor tests run without a database. Login tests use `#[sqlx::test]`
//! and need `DATABASE_URL`.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, get, get_auth, post_json, token_for};
use motorhub_api::auth::jwt::validate_token;
use motorhub_api::auth::password::hash_password;
use motorhub_api::permissions::MemoryPermissionStore;
use motorhub_db::models::user::CreateUser;
use motorhub_db::repositories::UserRepo;
use sqlx::PgPool;

const PASSWORD: &str = "test_password_123!";

async fn create_user(pool: &PgPool, email: &str, role: &str) -> i64 {
    let input = CreateUser {
        email: email.to_string(),
        name: "Test User".to_string(),
        password_hash: hash_password(PASSWORD).expect("hashing should succeed"),
        role: role.to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
        .id
}

fn login_body(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

// ---------------------------------------------------------------------------
// Extractors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let app = common::build_test_app(Arc::new(MemoryPermissionStore::new()));

    let response = get(app, "/api/admin/permissions/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn non_bearer_scheme_is_unauthorized() {
    let app = common::build_test_app(Arc::new(MemoryPermissionStore::new()));
    let request = Request::builder()
        .uri("/api/admin/permissions/me")
        .header("authorization", format!("Token {}", token_for(7, "admin")))
        .body(Body::empty())
        .unwrap();

    let response = common::send(app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let app = common::build_test_app(Arc::new(MemoryPermissionStore::new()));

    let response = get_auth(app, "/api/admin/permissions/me", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid or expired token");
}

#[tokio::test]
async fn user_role_token_is_forbidden() {
    let app = common::build_test_app(Arc::new(MemoryPermissionStore::new()));

    let response = get_auth(app, "/api/admin/permissions/me", &token_for(9, "user")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// POST /api/auth/admin-login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_login_returns_token_and_profile(pool: PgPool) {
    let id = create_user(&pool, "admin@test.com", "admin").await;
    let app = common::build_db_app(pool);

    let response = post_json(
        app,
        "/api/auth/admin-login",
        login_body("admin@test.com", PASSWORD),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["admin"]["id"], id);
    assert_eq!(json["admin"]["role"], "admin");

    let token = json["token"].as_str().expect("token should be a string");
    let claims = validate_token(token, &common::test_config().jwt).unwrap();
    assert_eq!(claims.user_id, id);
    assert_eq!(claims.email, "admin@test.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_login_rejects_wrong_password(pool: PgPool) {
    create_user(&pool, "admin@test.com", "admin").await;
    let app = common::build_db_app(pool);

    let response = post_json(
        app,
        "/api/auth/admin-login",
        login_body("admin@test.com", "nope"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid email or password");
    assert!(json.get("token").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_login_rejects_ordinary_user(pool: PgPool) {
    create_user(&pool, "buyer@test.com", "user").await;
    let app = common::build_db_app(pool);

    let response = post_json(
        app,
        "/api/auth/admin-login",
        login_body("buyer@test.com", PASSWORD),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Admin access required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_login_rejects_blocked_admin(pool: PgPool) {
    let id = create_user(&pool, "blocked@test.com", "superadmin").await;
    UserRepo::set_blocked(&pool, id, true).await.unwrap();
    let app = common::build_db_app(pool);

    let response = post_json(
        app,
        "/api/auth/admin-login",
        login_body("blocked@test.com", PASSWORD),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Account is blocked");
}
