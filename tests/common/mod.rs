//! Shared fixtures for HTTP-level integration tests
//!
//! Builds the real router over a fresh in-memory SQLite database, so each
//! test exercises the full stack: routing, middleware, handlers, storage.

use axum_test::TestServer;
use forklore::auth::sessions::SessionRegistry;
use forklore::routes::create_router;
use forklore::server::state::AppState;
use sqlx::sqlite::SqlitePoolOptions;

/// Spin up a test server with default configuration
pub async fn test_server() -> TestServer {
    test_server_with_branch_check(true).await
}

/// Spin up a test server, choosing the branch-parent policy
pub async fn test_server_with_branch_check(require_branch_parent: bool) -> TestServer {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let state = AppState {
        db_pool: Some(pool),
        sessions: SessionRegistry::new(),
        session_secret: "integration-test-secret".to_string(),
        require_branch_parent,
    };

    TestServer::new(create_router(state)).expect("failed to start test server")
}

/// Register a user and return their session token
pub async fn register_user(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/api/auth/register")
        .json(&serde_json::json!({
            "email": email,
            "password": password,
        }))
        .await;
    assert_eq!(
        response.status_code(),
        200,
        "registration failed for {}",
        email
    );

    let body: serde_json::Value = response.json();
    body["token"]
        .as_str()
        .expect("registration response should carry a token")
        .to_string()
}

/// Create a recipe and return its id
pub async fn create_recipe(
    server: &TestServer,
    token: &str,
    title: &str,
    ingredients: &[&str],
    instructions: &str,
) -> String {
    let response = server
        .post("/api/recipes")
        .authorization_bearer(token)
        .json(&serde_json::json!({
            "title": title,
            "ingredients": ingredients,
            "instructions": instructions,
        }))
        .await;
    assert_eq!(response.status_code(), 200, "recipe creation failed");

    let body: serde_json::Value = response.json();
    body["id"]
        .as_str()
        .expect("recipe response should carry an id")
        .to_string()
}
