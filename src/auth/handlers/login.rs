/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by exact email match
 * 2. Verify the password using bcrypt
 * 3. Open a session and return its token
 *
 * # Security
 *
 * - Unknown email and wrong password both answer 401 with the same
 *   message, so account existence cannot be probed
 * - Password verification uses constant-time comparison (via bcrypt)
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::AppError;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies the email/password pair and, on success, opens a session and
/// returns its token alongside the user.
///
/// # Errors
///
/// * `401 Unauthorized` - user not found or password incorrect
/// * `503 Service Unavailable` - storage is not configured
/// * `500 Internal Server Error` - storage or token generation failed
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AppError::Unavailable
    })?;
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            AppError::InvalidCredentials
        })?;

    // Verify password
    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        AppError::internal("password verification failed")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(AppError::InvalidCredentials);
    }

    // Open a session
    let session_id = state.sessions.create(user.id).await;
    let token = create_token(session_id, &state.session_secret).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        AppError::internal("token generation failed")
    })?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse {
            id: user.id.to_string(),
            email: user.email,
            created_at: user.created_at,
        },
    }))
}
