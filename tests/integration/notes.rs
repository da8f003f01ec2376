//! Integration tests for note CRUD, quota enforcement, and tenant isolation.

use axum::http::StatusCode;

use crate::helpers::TestApp;

fn note_body(title: &str, content: &str) -> Option<serde_json::Value> {
    Some(serde_json::json!({ "title": title, "content": content }))
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_create_then_get_round_trip() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "user@acme.test", "password123", "member")
        .await;
    let token = app.login("user@acme.test", "password123").await;

    let created = app
        .request("POST", "/notes", note_body("x", "y"), Some(&token))
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.data()["id"].as_str().unwrap().to_string();
    // created_at is server-assigned, not echoed input.
    assert!(created.data()["created_at"].as_str().is_some());

    let fetched = app
        .request("GET", &format!("/notes/{id}"), None, Some(&token))
        .await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["title"], "x");
    assert_eq!(fetched.data()["content"], "y");
    assert_eq!(fetched.data()["created_at"], created.data()["created_at"]);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_list_notes_newest_first() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "user@acme.test", "password123", "member")
        .await;
    let token = app.login("user@acme.test", "password123").await;

    for title in ["first", "second", "third"] {
        let response = app
            .request("POST", "/notes", note_body(title, "body"), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let list = app.request("GET", "/notes", None, Some(&token)).await;

    assert_eq!(list.status, StatusCode::OK);
    let titles: Vec<&str> = list
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_free_plan_quota_blocks_fourth_note() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "user@acme.test", "password123", "member")
        .await;
    let token = app.login("user@acme.test", "password123").await;

    for i in 0..3 {
        let response = app
            .request(
                "POST",
                "/notes",
                note_body(&format!("note {i}"), "body"),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let fourth = app
        .request("POST", "/notes", note_body("one too many", "body"), Some(&token))
        .await;

    assert_eq!(fourth.status, StatusCode::FORBIDDEN);
    assert_eq!(fourth.body["error"], "QUOTA_EXCEEDED");
    assert_eq!(app.note_count(tenant_id).await, 3);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_pro_plan_has_no_quota() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "user@acme.test", "password123", "member")
        .await;
    sqlx::query("UPDATE tenants SET plan = 'pro' WHERE id = $1")
        .bind(tenant_id)
        .execute(&app.db_pool)
        .await
        .unwrap();
    let token = app.login("user@acme.test", "password123").await;

    for i in 0..5 {
        let response = app
            .request(
                "POST",
                "/notes",
                note_body(&format!("note {i}"), "body"),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    assert_eq!(app.note_count(tenant_id).await, 5);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_concurrent_creates_never_overshoot_quota() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "user@acme.test", "password123", "member")
        .await;
    let token = app.login("user@acme.test", "password123").await;

    let requests = (0..5).map(|i| {
        let app = &app;
        let token = token.clone();
        async move {
            app.request(
                "POST",
                "/notes",
                Some(serde_json::json!({ "title": format!("note {i}"), "content": "body" })),
                Some(&token),
            )
            .await
        }
    });

    let responses = futures::future::join_all(requests).await;

    let created = responses
        .iter()
        .filter(|r| r.status == StatusCode::CREATED)
        .count();
    let rejected = responses
        .iter()
        .filter(|r| r.status == StatusCode::FORBIDDEN)
        .count();

    assert_eq!(created, 3);
    assert_eq!(rejected, 2);
    assert_eq!(app.note_count(tenant_id).await, 3);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_update_returns_post_commit_row() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "user@acme.test", "password123", "member")
        .await;
    let token = app.login("user@acme.test", "password123").await;

    let created = app
        .request("POST", "/notes", note_body("before", "old"), Some(&token))
        .await;
    let id = created.data()["id"].as_str().unwrap().to_string();

    let updated = app
        .request(
            "PUT",
            &format!("/notes/{id}"),
            note_body("after", "new"),
            Some(&token),
        )
        .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["title"], "after");
    assert_eq!(updated.data()["content"], "new");
    assert_eq!(updated.data()["id"].as_str().unwrap(), id);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_delete_returns_no_content() {
    let app = TestApp::new().await;
    let tenant_id = app.create_tenant("acme", "Acme").await;
    app.create_user(tenant_id, "user@acme.test", "password123", "member")
        .await;
    let token = app.login("user@acme.test", "password123").await;

    let created = app
        .request("POST", "/notes", note_body("doomed", "body"), Some(&token))
        .await;
    let id = created.data()["id"].as_str().unwrap().to_string();

    let deleted = app
        .request("DELETE", &format!("/notes/{id}"), None, Some(&token))
        .await;

    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(deleted.body.is_null());

    let fetched = app
        .request("GET", &format!("/notes/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_cross_tenant_note_is_indistinguishable_from_missing() {
    let app = TestApp::new().await;
    let acme_id = app.create_tenant("acme", "Acme").await;
    let globex_id = app.create_tenant("globex", "Globex").await;
    app.create_user(acme_id, "user@acme.test", "password123", "member")
        .await;
    app.create_user(globex_id, "user@globex.test", "password123", "member")
        .await;
    let acme_token = app.login("user@acme.test", "password123").await;
    let globex_token = app.login("user@globex.test", "password123").await;

    let created = app
        .request("POST", "/notes", note_body("acme secret", "body"), Some(&acme_token))
        .await;
    let id = created.data()["id"].as_str().unwrap().to_string();

    // Another tenant sees the same 404 as for a note that never existed.
    let got = app
        .request("GET", &format!("/notes/{id}"), None, Some(&globex_token))
        .await;
    let missing = app
        .request(
            "GET",
            &format!("/notes/{}", uuid::Uuid::new_v4()),
            None,
            Some(&globex_token),
        )
        .await;
    assert_eq!(got.status, StatusCode::NOT_FOUND);
    assert_eq!(got.body, missing.body);

    let updated = app
        .request(
            "PUT",
            &format!("/notes/{id}"),
            note_body("hijacked", "body"),
            Some(&globex_token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::NOT_FOUND);

    let deleted = app
        .request("DELETE", &format!("/notes/{id}"), None, Some(&globex_token))
        .await;
    assert_eq!(deleted.status, StatusCode::NOT_FOUND);

    // The note is unchanged and still visible to its owner.
    let fetched = app
        .request("GET", &format!("/notes/{id}"), None, Some(&acme_token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["title"], "acme secret");
}
