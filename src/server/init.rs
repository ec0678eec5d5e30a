/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: configuration loading, state creation, and route assembly.
 *
 * # Initialization Process
 *
 * 1. Load the session-signing secret and branch-parent policy
 * 2. Create the session registry
 * 3. Load the optional database pool (never fatal)
 * 4. Assemble application state and the router
 */

use axum::Router;

use crate::auth::sessions::SessionRegistry;
use crate::routes::router::create_router;
use crate::server::config::{load_database, require_branch_parent, session_secret};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Error Handling
///
/// Startup is resilient by design: a missing or unreachable database is
/// logged and the server still comes up, answering 503 on data-touching
/// endpoints.
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing forklore server");

    let session_secret = session_secret();
    let require_branch_parent = require_branch_parent();
    let sessions = SessionRegistry::new();

    let db_pool = load_database().await;

    let app_state = AppState {
        db_pool,
        sessions,
        session_secret,
        require_branch_parent,
    };

    tracing::info!(
        "Router configured (branch parent check: {})",
        app_state.require_branch_parent
    );

    create_router(app_state)
}
