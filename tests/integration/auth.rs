//! Integration tests for health and the login flow.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_login_success_returns_token_and_public_user_fields() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "admin@acme.test", "password123", "admin")
        .await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "admin@acme.test",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert!(data["token"].as_str().is_some());
    assert!(data["expires_at"].as_str().is_some());
    assert_eq!(data["user"]["email"], "admin@acme.test");
    assert_eq!(data["user"]["role"], "admin");
    // The password hash must never appear in a response.
    assert!(data["user"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_login_email_lookup_is_case_insensitive() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "admin@acme.test", "password123", "admin")
        .await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "Admin@Acme.Test",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "admin@acme.test", "password123", "admin")
        .await;

    let wrong_password = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "admin@acme.test",
                "password": "wrong",
            })),
            None,
        )
        .await;

    let unknown_email = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "nobody@acme.test",
                "password": "password123",
            })),
            None,
        )
        .await;

    // Same status and byte-identical body: no user-existence oracle.
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_protected_route_without_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/notes", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_protected_route_with_garbage_token() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/notes", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
