//! HTTP-level integration tests for the auth endpoints.
//!
//! Covers login, credential failures, and token-protected access to
//! `/auth/me`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, login, seed_user, TEST_PASSWORD};
use sqlx::PgPool;
use ypsl_core::principal::{Project, Role};

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with access_token, expires_in, and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let user = seed_user(&pool, "admin@test.com", Role::Admin, None).await;
    let app = common::build_test_app(pool);

    let response = login(app, "admin@test.com", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(
        json["access_token"].is_string(),
        "response must contain access_token"
    );
    assert!(
        json["expires_in"].is_number(),
        "response must contain expires_in"
    );
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["email"], "admin@test.com");
    assert_eq!(json["user"]["role"], "admin");
    assert_eq!(json["user"]["project"], serde_json::Value::Null);
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    seed_user(&pool, "victim@test.com", Role::Admin, None).await;
    let app = common::build_test_app(pool);

    let response = login(app, "victim@test.com", "not the password").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with an unknown email returns 401, indistinguishable from a bad
/// password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = login(app, "nobody@test.com", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Project-scoped users log in with their project echoed back.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_project_scoped_user(pool: PgPool) {
    seed_user(
        &pool,
        "pa@test.com",
        Role::ProjectAdmin,
        Some(Project::SlInspire),
    )
    .await;
    let app = common::build_test_app(pool);

    let response = login(app, "pa@test.com", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["role"], "project-admin");
    assert_eq!(json["user"]["project"], "sl-inspire");
}

// ---------------------------------------------------------------------------
// /auth/me
// ---------------------------------------------------------------------------

/// A valid token resolves to the caller's own account.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_current_user(pool: PgPool) {
    let user = seed_user(&pool, "me@test.com", Role::Manager, None).await;
    let token = common::token_for(&user, Role::Manager, None);
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["email"], "me@test.com");
}

/// Requests without a token are rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A garbage token is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_rejects_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/auth/me", "not.a.token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
