/**
 * API Route Handlers
 *
 * This module defines route handlers for API endpoints:
 * - Authentication endpoints (register, login, logout, get current user)
 * - Recipe endpoints (create, branch, delete, list, list branched)
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `POST /api/auth/logout` - Session invalidation (public: safe with no session)
 * - `GET /api/auth/me` - Get current user info (protected)
 *
 * ## Recipes (all protected)
 * - `POST /api/recipes` - Create a recipe
 * - `GET /api/recipes` - List own recipes
 * - `GET /api/recipes/branched` - List recipes branched from own recipes
 * - `GET /api/recipes/{recipe_id}` - Get one recipe
 * - `POST /api/recipes/{recipe_id}/branch` - Branch a recipe
 * - `DELETE /api/recipes/{recipe_id}` - Delete own recipe (silent no-op otherwise)
 */

use axum::{middleware, Router};

use crate::auth::{get_me, login, logout, register};
use crate::middleware::auth::auth_middleware;
use crate::recipes::{
    branch_recipe, create_recipe, get_recipe, list_branched_recipes, list_recipes,
    remove_recipe,
};
use crate::server::state::AppState;

/// Configure API routes
///
/// Protected routes are wrapped in the auth middleware; public routes
/// (register, login, logout) are reachable without a session.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Application state, needed to instantiate the auth gate
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/logout", axum::routing::post(logout));

    let protected = Router::new()
        .route("/api/auth/me", axum::routing::get(get_me))
        .route(
            "/api/recipes",
            axum::routing::post(create_recipe).get(list_recipes),
        )
        .route(
            "/api/recipes/branched",
            axum::routing::get(list_branched_recipes),
        )
        .route(
            "/api/recipes/{recipe_id}",
            axum::routing::get(get_recipe).delete(remove_recipe),
        )
        .route(
            "/api/recipes/{recipe_id}/branch",
            axum::routing::post(branch_recipe),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router.merge(public).merge(protected)
}
