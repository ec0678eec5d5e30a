/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * the user behind the request's session.
 *
 * The route sits behind the auth middleware, so by the time this handler
 * runs the session has already been resolved; the handler just re-reads the
 * user row and strips the sensitive fields.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `404 Not Found` - the user row vanished after the session was created
/// * `503 Service Unavailable` - storage is not configured
/// * `500 Internal Server Error` - storage query failed
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AppError::Unavailable
    })?;

    let user = get_user_by_id(pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", auth.user_id);
            AppError::NotFound
        })?;

    Ok(Json(UserResponse {
        id: user.id.to_string(),
        email: user.email,
        created_at: user.created_at,
    }))
}
