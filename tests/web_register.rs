//! Registration integration tests.
//!
//! Covers the full HTTP flow: form rendering, error accumulation, the
//! duplicate-email check, session establishment, and flash messaging.

mod common;

use axum::http::StatusCode;

use common::{register_form, test_server, user_count};

#[tokio::test]
async fn test_get_register_renders_form() {
    let (server, _db) = test_server().await;

    let response = server.get("/register").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("<form action=\"/register\" method=\"POST\">"));
    assert!(body.contains("HobbyHub"));
}

#[tokio::test]
async fn test_empty_name_is_rejected() {
    let (server, db) = test_server().await;

    let response = server
        .post("/register")
        .form(&register_form("", "ada@example.com", "longenough1", "longenough1"))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Name is required"));
    assert_eq!(user_count(&db).await, 0);
}

#[tokio::test]
async fn test_password_mismatch_is_rejected() {
    let (server, db) = test_server().await;

    let response = server
        .post("/register")
        .form(&register_form(
            "Ada",
            "ada@example.com",
            "longenough1",
            "longenough2",
        ))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Passwords do not match"));
    assert_eq!(user_count(&db).await, 0);
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let (server, db) = test_server().await;

    let response = server
        .post("/register")
        .form(&register_form("Ada", "not-an-email", "longenough1", "longenough1"))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Invalid email format"));
    assert_eq!(user_count(&db).await, 0);
}

#[tokio::test]
async fn test_errors_accumulate_in_order() {
    let (server, db) = test_server().await;

    let response = server
        .post("/register")
        .form(&register_form("", "bad-email", "short", "different"))
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("There were 4 errors with your submission"));

    let name_pos = body.find("Name is required").expect("name error");
    let email_pos = body.find("Invalid email format").expect("email error");
    let password_pos = body
        .find("Password must be at least 8 characters long")
        .expect("password error");
    let mismatch_pos = body.find("Passwords do not match").expect("mismatch error");
    assert!(name_pos < email_pos);
    assert!(email_pos < password_pos);
    assert!(password_pos < mismatch_pos);

    assert_eq!(user_count(&db).await, 0);
}

#[tokio::test]
async fn test_failed_submission_is_idempotent() {
    let (server, db) = test_server().await;

    let form = register_form("", "not-an-email", "longenough1", "longenough1");

    let first = server.post("/register").form(&form).await.text();
    let second = server.post("/register").form(&form).await.text();

    assert_eq!(first, second);
    assert_eq!(user_count(&db).await, 0);
}

#[tokio::test]
async fn test_invalid_submission_echoes_name_and_email_only() {
    let (server, _db) = test_server().await;

    let response = server
        .post("/register")
        .form(&register_form(
            "Ada",
            "ada@example.com",
            "secretpass1",
            "secretpass2",
        ))
        .await;

    let body = response.text();
    assert!(body.contains("value=\"Ada\""));
    assert!(body.contains("value=\"ada@example.com\""));
    // Passwords are never echoed back.
    assert!(!body.contains("secretpass1"));
    assert!(!body.contains("secretpass2"));
}

#[tokio::test]
async fn test_echoed_fields_are_html_escaped() {
    let (server, _db) = test_server().await;

    let response = server
        .post("/register")
        .form(&register_form(
            "<script>alert(1)</script>",
            "bad-email",
            "longenough1",
            "longenough1",
        ))
        .await;

    let body = response.text();
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!body.contains("<script>alert(1)</script>"));
}

#[tokio::test]
async fn test_duplicate_email_creates_no_second_row() {
    let (server, db) = test_server().await;

    server
        .post("/register")
        .form(&register_form("Ada", "a@example.com", "longenough1", "longenough1"))
        .await
        .assert_status(StatusCode::SEE_OTHER);
    assert_eq!(user_count(&db).await, 1);

    let response = server
        .post("/register")
        .form(&register_form("Grace", "a@example.com", "different1", "different1"))
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Email already registered"));
    assert!(body.contains("There were 1 errors with your submission"));
    assert_eq!(user_count(&db).await, 1);
}

#[tokio::test]
async fn test_duplicate_email_check_is_case_insensitive() {
    let (server, db) = test_server().await;

    server
        .post("/register")
        .form(&register_form("Ada", "a@example.com", "longenough1", "longenough1"))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let response = server
        .post("/register")
        .form(&register_form("Grace", "A@Example.Com", "different1", "different1"))
        .await;

    assert!(response.text().contains("Email already registered"));
    assert_eq!(user_count(&db).await, 1);
}

#[tokio::test]
async fn test_successful_registration_end_to_end() {
    let (server, db) = test_server().await;

    let response = server
        .post("/register")
        .form(&register_form(
            "Ada",
            "ada@example.com",
            "longenough1",
            "longenough1",
        ))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/dashboard");

    // Exactly one row, with a salted non-reversible credential.
    assert_eq!(user_count(&db).await, 1);
    let (name, email, password): (String, String, String) =
        sqlx::query_as("SELECT name, email, password FROM users")
            .fetch_one(db.pool())
            .await
            .unwrap();
    assert_eq!(name, "Ada");
    assert_eq!(email, "ada@example.com");
    assert_ne!(password, "longenough1");
    assert!(password.starts_with("$argon2id$"));

    // The session is authenticated and carries the success flash.
    let dashboard = server.get("/dashboard").await;
    dashboard.assert_status_ok();
    let body = dashboard.text();
    assert!(body.contains("Welcome, Ada!"));
    assert!(body.contains("Registration successful! Welcome to HobbyHub."));
}

#[tokio::test]
async fn test_flash_message_is_one_shot() {
    let (server, _db) = test_server().await;

    server
        .post("/register")
        .form(&register_form("Ada", "ada@example.com", "longenough1", "longenough1"))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let first = server.get("/dashboard").await.text();
    assert!(first.contains("Registration successful! Welcome to HobbyHub."));

    let second = server.get("/dashboard").await.text();
    assert!(!second.contains("Registration successful! Welcome to HobbyHub."));
}

#[tokio::test]
async fn test_same_password_gets_distinct_hashes() {
    let (server, db) = test_server().await;

    server
        .post("/register")
        .form(&register_form("Ada", "ada@example.com", "samepass1", "samepass1"))
        .await
        .assert_status(StatusCode::SEE_OTHER);
    server
        .post("/register")
        .form(&register_form("Grace", "grace@example.com", "samepass1", "samepass1"))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let hashes: Vec<(String,)> = sqlx::query_as("SELECT password FROM users ORDER BY id")
        .fetch_all(db.pool())
        .await
        .unwrap();
    assert_eq!(hashes.len(), 2);
    assert_ne!(hashes[0].0, hashes[1].0);
}

#[tokio::test]
async fn test_register_while_signed_in_redirects_to_dashboard() {
    let (server, _db) = test_server().await;

    server
        .post("/register")
        .form(&register_form("Ada", "ada@example.com", "longenough1", "longenough1"))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let response = server.get("/register").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/dashboard");
}

#[tokio::test]
async fn test_missing_fields_report_required_errors() {
    let (server, db) = test_server().await;

    // A bare POST with no fields at all.
    let response = server.post("/register").form(&[] as &[(&str, &str)]).await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Name is required"));
    assert!(body.contains("Email is required"));
    assert!(body.contains("Password is required"));
    assert_eq!(user_count(&db).await, 0);
}
