/**
 * Server Configuration
 *
 * This module handles loading of server configuration from environment
 * variables: the storage connection string, the session-signing secret,
 * and the branch-parent policy.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * If the database cannot be reached the pool is set to `None` and the
 * server runs with storage disabled.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if storage is not available.
pub type DatabaseConfig = Option<SqlitePool>;

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Opens a SQLite connection pool (creating the file if missing)
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(pool)` if storage is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
///
/// Errors are logged but never abort startup; the server runs without
/// storage features and data-touching endpoints answer 503.
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Storage features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let options = match SqliteConnectOptions::from_str(&database_url) {
        Ok(options) => options.create_if_missing(true),
        Err(e) => {
            tracing::error!("Invalid DATABASE_URL: {:?}", e);
            tracing::warn!("Storage features will be disabled.");
            return None;
        }
    };

    let pool = match SqlitePoolOptions::new().connect_with(options).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Storage features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    // Run migrations
    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Migrations might have already been applied by an earlier run.
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

/// Load the session-signing secret
///
/// Reads `SESSION_SECRET` from the environment; when absent, generates a
/// random per-process secret, so sessions simply do not survive a restart.
pub fn session_secret() -> String {
    match std::env::var("SESSION_SECRET") {
        Ok(secret) if !secret.is_empty() => secret,
        _ => {
            tracing::warn!("SESSION_SECRET not set; generating a random per-process secret");
            generate_secret()
        }
    }
}

/// Generate a random secret of sufficient entropy
fn generate_secret() -> String {
    format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}

/// Whether branching must verify that the parent recipe exists
///
/// Controlled by `REQUIRE_BRANCH_PARENT`; defaults to enabled. Set to
/// `false` or `0` to let branch writes proceed unchecked, leaving a
/// dangling parent link when the target is gone.
pub fn require_branch_parent() -> bool {
    match std::env::var("REQUIRE_BRANCH_PARENT") {
        Ok(value) => !matches!(value.trim(), "false" | "0" | "off"),
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_secret_is_long_and_unique() {
        let a = generate_secret();
        let b = generate_secret();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }
}
