//! HTTP-level integration tests for role- and project-scoped access
//! control across the content collections.
//!
//! The interesting cases are the degrading ones: writes stamped into the
//! caller's own project, drafts hidden from the public, rows outside the
//! caller's scope surfacing as 404 rather than 403, and user creation
//! clamped for project admins.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth, seed_media,
    seed_user,
};
use sqlx::PgPool;
use ypsl_core::principal::{Project, Role};

async fn admin_token(pool: &PgPool) -> String {
    let user = seed_user(pool, "root@test.com", Role::Admin, None).await;
    common::token_for(&user, Role::Admin, None)
}

async fn project_admin_token(pool: &PgPool, email: &str, project: Project) -> String {
    let user = seed_user(pool, email, Role::ProjectAdmin, Some(project)).await;
    common::token_for(&user, Role::ProjectAdmin, Some(project))
}

fn event_body(title: &str, project: &str, status: &str, image_id: i64) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "project": project,
        "start_date": "2026-09-12",
        "event_type": "physical",
        "venue_location": "Colombo",
        "image_id": image_id,
        "status": status,
    })
}

// ---------------------------------------------------------------------------
// Project stamping on writes
// ---------------------------------------------------------------------------

/// A project admin asking to create an event in someone else's project
/// silently gets it created in their own project instead.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_event_create_stamps_callers_project(pool: PgPool) {
    let image = seed_media(&pool, "stamp.png").await;
    let token = project_admin_token(&pool, "pa@test.com", Project::SlInspire).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/events",
        &token,
        event_body("AGM", "ypsl", "draft", image.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["project"], "sl-inspire");
}

/// A global admin's stated project is honored as-is.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_event_create_admin_project_passes_through(pool: PgPool) {
    let image = seed_media(&pool, "admin.png").await;
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/events",
        &token,
        event_body("Summit", "insl", "draft", image.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["project"], "insl");
}

/// Events require a project; an admin supplying none gets a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_event_create_without_project_is_rejected(pool: PgPool) {
    let image = seed_media(&pool, "orphan.png").await;
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/events",
        &token,
        serde_json::json!({
            "title": "Nowhere",
            "start_date": "2026-09-12",
            "event_type": "online",
            "online_platform": "zoom",
            "image_id": image.id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Read scoping
// ---------------------------------------------------------------------------

/// Anonymous callers see published events only; drafts are invisible in
/// listings and 404 by id.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_anonymous_sees_published_events_only(pool: PgPool) {
    let image = seed_media(&pool, "list.png").await;
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let draft = body_json(
        post_json_auth(
            app,
            "/api/v1/events",
            &token,
            event_body("Draft Event", "ypsl", "draft", image.id),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/v1/events",
        &token,
        event_body("Public Event", "ypsl", "published", image.id),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/events").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let titles: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Public Event".to_string()]);

    // The draft does not exist as far as the public is concerned.
    let draft_id = draft["id"].as_i64().unwrap();
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/events/{draft_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Project staff see their own project's drafts but not another
/// project's.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_staff_draft_visibility_is_scoped(pool: PgPool) {
    let image = seed_media(&pool, "scoped.png").await;
    let admin = admin_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let draft = body_json(
        post_json_auth(
            app,
            "/api/v1/events",
            &admin,
            event_body("Insiders Only", "sl-inspire", "draft", image.id),
        )
        .await,
    )
    .await;
    let draft_id = draft["id"].as_i64().unwrap();

    let insider = project_admin_token(&pool, "insider@test.com", Project::SlInspire).await;
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/events/{draft_id}"), &insider).await;
    assert_eq!(response.status(), StatusCode::OK);

    let outsider = project_admin_token(&pool, "outsider@test.com", Project::Insl).await;
    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/events/{draft_id}"), &outsider).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Out-of-scope rows 404 on update and delete as well, never 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_cross_project_write_surfaces_as_not_found(pool: PgPool) {
    let image = seed_media(&pool, "cross.png").await;
    let admin = admin_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let event = body_json(
        post_json_auth(
            app,
            "/api/v1/events",
            &admin,
            event_body("YPSL Own", "ypsl", "published", image.id),
        )
        .await,
    )
    .await;
    let event_id = event["id"].as_i64().unwrap();

    let outsider = project_admin_token(&pool, "outsider@test.com", Project::SlInspire).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/events/{event_id}"),
        &outsider,
        serde_json::json!({ "title": "Hijacked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/events/{event_id}"), &outsider).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// User management clamping
// ---------------------------------------------------------------------------

/// A project admin creating a user gets a project manager in their own
/// project no matter what role or project they ask for.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_admin_user_creation_is_clamped(pool: PgPool) {
    let token = project_admin_token(&pool, "pa@test.com", Project::SlInspire).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/users",
        &token,
        serde_json::json!({
            "name": "Aspiring Admin",
            "email": "newbie@test.com",
            "password": "longenoughpw",
            "role": "admin",
            "project": "ypsl",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["role"], "project-manager");
    assert_eq!(json["project"], "sl-inspire");
}

/// Project managers cannot create users at all.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_manager_cannot_create_users(pool: PgPool) {
    let user = seed_user(&pool, "pm@test.com", Role::ProjectManager, Some(Project::Ypsl)).await;
    let token = common::token_for(&user, Role::ProjectManager, Some(Project::Ypsl));
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/users",
        &token,
        serde_json::json!({
            "name": "Nope",
            "email": "nope@test.com",
            "password": "longenoughpw",
            "role": "project-manager",
            "project": "ypsl",
        }),
    )
    .await;
    common::assert_forbidden(response).await;
}

/// A project admin listing users sees themselves plus their project's
/// managers, and nobody else.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_admin_user_listing_is_row_scoped(pool: PgPool) {
    let pa = seed_user(&pool, "pa@test.com", Role::ProjectAdmin, Some(Project::Ypsl)).await;
    seed_user(&pool, "mine@test.com", Role::ProjectManager, Some(Project::Ypsl)).await;
    seed_user(&pool, "other@test.com", Role::ProjectManager, Some(Project::Insl)).await;
    seed_user(&pool, "boss@test.com", Role::Admin, None).await;

    let token = common::token_for(&pa, Role::ProjectAdmin, Some(Project::Ypsl));
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/users", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let mut emails: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["email"].as_str().unwrap().to_string())
        .collect();
    emails.sort();
    assert_eq!(
        emails,
        vec!["mine@test.com".to_string(), "pa@test.com".to_string()]
    );
}

// ---------------------------------------------------------------------------
// Admin-only collections
// ---------------------------------------------------------------------------

/// The merchandise catalogue rejects non-global staff with 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_merchant_writes_are_admin_only(pool: PgPool) {
    let image = seed_media(&pool, "hoodie.png").await;
    let token = project_admin_token(&pool, "pa@test.com", Project::Ypsl).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/merchants",
        &token,
        serde_json::json!({
            "merchant_id": "YPSL-HD-001",
            "merchant_name": "Hoodie",
            "price": 4500.0,
            "sizes": ["S", "M", "L"],
            "image_id": image.id,
        }),
    )
    .await;
    common::assert_forbidden(response).await;
}

/// Merch categories are public to read but admin-only to write, and the
/// slug is derived from the name when the caller omits it.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_merch_category_writes_are_admin_only(pool: PgPool) {
    let pa = project_admin_token(&pool, "pa@test.com", Project::Ypsl).await;
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/merch-categories",
        &pa,
        serde_json::json!({ "name": "Hoodies" }),
    )
    .await;
    common::assert_forbidden(response).await;

    let admin = admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/merch-categories",
        &admin,
        serde_json::json!({ "name": "T Shirts" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "T Shirts");
    assert_eq!(created["slug"], "t-shirts");

    // Reads need no token at all.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/merch-categories").await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["slug"], "t-shirts");
}

/// An explicit slug on a category update is normalized before it lands.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_merch_category_slug_is_normalized_on_update(pool: PgPool) {
    let admin = admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json_auth(
            app,
            "/api/v1/merch-categories",
            &admin,
            serde_json::json!({ "name": "Hoodies", "slug": "hoodie" }),
        )
        .await,
    )
    .await;
    assert_eq!(created["slug"], "hoodie");

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/merch-categories/{}", created["id"]),
        &admin,
        serde_json::json!({ "slug": "  Zip Hoodie  " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["slug"], "zip-hoodie");
    assert_eq!(updated["name"], "Hoodies");
}

/// Payment slips never appear in media listings, even for admins.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_payment_slips_hidden_from_media_listing(pool: PgPool) {
    let slip = ypsl_db::models::media::CreateMedia {
        alt: "Payslip for YPSL-ORD-20260829-1234 - Test".to_string(),
        category: "merch-payslips".to_string(),
        filename: "YPSL-ORD-20260829-1234.jpg".to_string(),
        mime_type: "image/jpeg".to_string(),
        size_bytes: 10,
        url: "http://localhost:3000/media/YPSL-ORD-20260829-1234.jpg".to_string(),
    };
    ypsl_db::repositories::MediaRepo::create(&pool, &slip)
        .await
        .expect("slip row");
    seed_media(&pool, "visible.png").await;

    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/media", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let filenames: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["filename"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(filenames, vec!["visible.png".to_string()]);
}
