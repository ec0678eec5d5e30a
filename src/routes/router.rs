/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configuration into a single Axum router.
 */

use axum::Router;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool, session registry, config)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes (auth + recipes)
    let router = configure_api_routes(router, &app_state);

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    // Use AppState as router state
    router.with_state(app_state)
}
