//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router without an actual TCP listener. External clients (sheets,
//! email) are left unconfigured by default so order tests exercise the
//! degraded best-effort paths; a variant wires in a sheets client that
//! cannot sign its assertion for the append-failure path.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;
use ypsl_core::principal::{Principal, Project, Role};
use ypsl_db::models::user::{CreateUser, User};
use ypsl_db::repositories::UserRepo;
use ypsl_integrations::sheets::{SheetsClient, SheetsConfig};
use ypsl_integrations::storage::{LocalMediaStorage, StorageConfig};

use ypsl_api::auth::jwt::{generate_access_token, JwtConfig};
use ypsl_api::auth::password::hash_password;
use ypsl_api::config::ServerConfig;
use ypsl_api::router::build_app_router;
use ypsl_api::state::AppState;

/// Password used for every seeded test account.
pub const TEST_PASSWORD: &str = "correct horse battery";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 120,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. Media storage is rooted in a
/// unique temp directory; the sheets and email clients stay unconfigured.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(pool, None)
}

/// Build the app with a sheets client whose service-account credential is
/// not a usable RSA key, so every append fails before any network traffic.
/// Order tests use this to drive the sheet-append failure path.
pub fn build_test_app_with_bad_sheets(pool: PgPool) -> Router {
    let sheets = SheetsClient::new(SheetsConfig {
        client_email: "orders@test-project.iam.gserviceaccount.com".to_string(),
        private_key: "not a pem-encoded key".to_string(),
        spreadsheet_id: "test-spreadsheet".to_string(),
        token_url: "http://127.0.0.1:9/token".to_string(),
        api_url: "http://127.0.0.1:9".to_string(),
        range: "Orders!A:M".to_string(),
    });
    build_app(pool, Some(Arc::new(sheets)))
}

fn build_app(pool: PgPool, sheets: Option<Arc<SheetsClient>>) -> Router {
    let config = test_config();

    let storage_root =
        std::env::temp_dir().join(format!("ypsl-test-media-{}", uuid::Uuid::new_v4()));
    let storage = Arc::new(LocalMediaStorage::new(StorageConfig {
        root: storage_root,
        public_base_url: "http://localhost:3000/media".to_string(),
    }));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
        sheets,
        email: None,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read the full response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

pub const MULTIPART_BOUNDARY: &str = "----ypsl-test-boundary";

/// Assemble a multipart/form-data body from text fields plus an optional
/// file part `(field, filename, content_type, bytes)`.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{name}\"\r\n\r\n\
                 {value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, filename, content_type, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Seed data helpers
// ---------------------------------------------------------------------------

/// Create a user directly in the database with [`TEST_PASSWORD`].
pub async fn seed_user(
    pool: &PgPool,
    email: &str,
    role: Role,
    project: Option<Project>,
) -> User {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let input = CreateUser {
        name: email.split('@').next().unwrap().to_string(),
        email: email.to_string(),
        password_hash: hashed,
        role: role.as_str().to_string(),
        project: project.map(|p| p.as_str().to_string()),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Insert a media row to satisfy image foreign keys on seeded content.
pub async fn seed_media(pool: &PgPool, filename: &str) -> ypsl_db::models::media::Media {
    let input = ypsl_db::models::media::CreateMedia {
        alt: filename.to_string(),
        category: "others".to_string(),
        filename: filename.to_string(),
        mime_type: "image/png".to_string(),
        size_bytes: 4,
        url: format!("http://localhost:3000/media/{filename}"),
    };
    ypsl_db::repositories::MediaRepo::create(pool, &input)
        .await
        .expect("media creation should succeed")
}

/// Mint an access token for a seeded user without going through the
/// login endpoint.
pub fn token_for(user: &User, role: Role, project: Option<Project>) -> String {
    let principal = Principal {
        id: user.id,
        role,
        project,
    };
    generate_access_token(&principal, &test_config().jwt).expect("token generation")
}

/// Login via the API and return the parsed response body.
pub async fn login(app: Router, email: &str, password: &str) -> Response<Body> {
    post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await
}

/// Assert a response is a 403 with the standard error envelope.
pub async fn assert_forbidden(response: Response<Body>) {
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}
