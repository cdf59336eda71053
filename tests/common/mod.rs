//! Test helpers for web integration tests.
//!
//! Builds a `TestServer` over the full router with an in-memory database
//! and a cookie jar, so session flows behave like a browser.

use std::sync::Arc;

use axum_test::TestServer;

use hobbyhub::config::SiteConfig;
use hobbyhub::web::create_router;
use hobbyhub::web::handlers::AppState;
use hobbyhub::Database;

/// Create a test server backed by a fresh in-memory database.
///
/// Cookies are saved between requests so the session survives redirects.
pub async fn test_server() -> (TestServer, Arc<Database>) {
    let db = Arc::new(
        Database::open_in_memory()
            .await
            .expect("in-memory database"),
    );
    let state = AppState::new(db.clone(), SiteConfig::default());

    let mut server = TestServer::new(create_router(state)).expect("test server");
    server.save_cookies();

    (server, db)
}

/// Count rows in the users table.
pub async fn user_count(db: &Database) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(db.pool())
        .await
        .expect("count query")
}

/// Registration form body with every field supplied.
pub fn register_form<'a>(
    name: &'a str,
    email: &'a str,
    password: &'a str,
    confirm_password: &'a str,
) -> [(&'static str, &'a str); 4] {
    [
        ("name", name),
        ("email", email),
        ("password", password),
        ("confirm_password", confirm_password),
    ]
}
