//! Integration tests for tenant plan upgrades.

use axum::http::StatusCode;

use crate::helpers::TestApp;

async fn tenant_plan(app: &TestApp, slug: &str) -> String {
    sqlx::query_scalar::<_, String>("SELECT plan::text FROM tenants WHERE slug = $1")
        .bind(slug)
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to read tenant plan")
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_admin_upgrades_own_tenant() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "admin@acme.test", "password123", "admin")
        .await;
    let token = app.login("admin@acme.test", "password123").await;

    let response = app
        .request("POST", "/tenants/acme/upgrade", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(tenant_plan(&app, "acme").await, "pro");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_upgrade_is_idempotent() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "admin@acme.test", "password123", "admin")
        .await;
    let token = app.login("admin@acme.test", "password123").await;

    for _ in 0..2 {
        let response = app
            .request("POST", "/tenants/acme/upgrade", None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    assert_eq!(tenant_plan(&app, "acme").await, "pro");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_member_cannot_upgrade() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "user@acme.test", "password123", "member")
        .await;
    let token = app.login("user@acme.test", "password123").await;

    let response = app
        .request("POST", "/tenants/acme/upgrade", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(tenant_plan(&app, "acme").await, "free");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_admin_cannot_upgrade_other_tenant() {
    let app = TestApp::new().await;
    let acme_id = app.create_tenant("acme", "Acme").await;
    app.create_tenant("globex", "Globex").await;
    app.create_user(acme_id, "admin@acme.test", "password123", "admin")
        .await;
    let token = app.login("admin@acme.test", "password123").await;

    let response = app
        .request("POST", "/tenants/globex/upgrade", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(tenant_plan(&app, "globex").await, "free");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_unknown_slug_is_not_found() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "admin@acme.test", "password123", "admin")
        .await;
    let token = app.login("admin@acme.test", "password123").await;

    let response = app
        .request("POST", "/tenants/initech/upgrade", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_upgrade_requires_token() {
    let app = TestApp::new().await;
    app.create_tenant("acme", "Acme").await;

    let response = app.request("POST", "/tenants/acme/upgrade", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
