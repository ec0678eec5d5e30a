/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, constructed once at process
 * start and handed by value to the router — there is no ambient global.
 * It holds:
 * - the optional database pool
 * - the session registry (session id → user id)
 * - the session-signing secret
 * - the branch-parent policy flag
 *
 * # Thread Safety
 *
 * All fields are cheap to clone and safe to share: the pool is internally
 * reference-counted, the registry shares its map behind `Arc<RwLock<..>>`,
 * and the remaining fields are read-only after startup.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::sessions::SessionRegistry;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// `None` if storage is not configured (e.g. `DATABASE_URL` unset or
    /// the connection failed at startup). Handlers answer 503 in that case.
    pub db_pool: Option<SqlitePool>,

    /// Server-side session registry
    pub sessions: SessionRegistry,

    /// Session-signing secret
    ///
    /// Supplied via configuration or generated randomly at process start.
    pub session_secret: String,

    /// Whether branching verifies that the parent recipe exists
    pub require_branch_parent: bool,
}

/// Allow handlers to extract the optional pool directly from `AppState`.
impl FromRef<AppState> for Option<SqlitePool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract the session registry directly from `AppState`.
impl FromRef<AppState> for SessionRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

#[cfg(test)]
impl AppState {
    /// State over a fresh in-memory database with the schema applied
    pub(crate) async fn for_tests() -> Self {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        sqlx::migrate!()
            .run(&pool)
            .await
            .expect("failed to run migrations");

        Self {
            db_pool: Some(pool),
            sessions: SessionRegistry::new(),
            session_secret: "test-secret".to_string(),
            require_branch_parent: true,
        }
    }

    /// State with storage deliberately absent
    pub(crate) fn for_tests_without_storage() -> Self {
        Self {
            db_pool: None,
            sessions: SessionRegistry::new(),
            session_secret: "test-secret".to_string(),
            require_branch_parent: true,
        }
    }
}
