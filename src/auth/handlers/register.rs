/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Check email and password are present
 * 2. Check no user already holds the email
 * 3. Hash the password using bcrypt
 * 4. Create the user in the database
 * 5. Open a session and return its token
 *
 * # Validation
 *
 * Presence only: email and password must be non-empty. There is no
 * email-format or password-strength rule.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt (cost factor 10) before storage
 * - Passwords are never logged or returned in responses
 * - The unique index on `email` backs up the pre-insert lookup, so a
 *   racing duplicate registration still answers 409
 */

use axum::{extract::State, response::Json};
use bcrypt::hash;

use crate::auth::handlers::types::{AuthResponse, RegisterRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::AppError;
use crate::server::state::AppState;

/// bcrypt work factor
const BCRYPT_COST: u32 = 10;

/// Registration handler
///
/// Creates a new user account and logs it straight in: the response carries
/// a session token alongside the created user.
///
/// # Errors
///
/// * `400 Bad Request` - email or password missing
/// * `409 Conflict` - a user with this email already exists
/// * `503 Service Unavailable` - storage is not configured
/// * `500 Internal Server Error` - hashing, storage, or token generation failed
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AppError::Unavailable
    })?;
    tracing::info!("Registration request for: {}", request.email);

    if request.email.is_empty() {
        return Err(AppError::validation("Email is required."));
    }
    if request.password.is_empty() {
        return Err(AppError::validation("Password is required."));
    }

    // Check if the email is already registered
    if get_user_by_email(pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(AppError::EmailTaken);
    }

    // Hash the password
    let password_hash = hash(&request.password, BCRYPT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        AppError::internal("password hashing failed")
    })?;

    // Create the user; a concurrent duplicate trips the unique index here
    let user = match create_user(pool, request.email.clone(), password_hash).await {
        Ok(user) => user,
        Err(e) => {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                tracing::warn!("Email already exists (race): {}", request.email);
                return Err(AppError::EmailTaken);
            }
            tracing::error!("Failed to create user: {:?}", e);
            return Err(AppError::Storage(e));
        }
    };

    // Open a session for the new user
    let session_id = state.sessions.create(user.id).await;
    let token = create_token(session_id, &state.session_secret).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        AppError::internal("token generation failed")
    })?;

    tracing::info!("User created successfully: {}", user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse {
            id: user.id.to_string(),
            email: user.email,
            created_at: user.created_at,
        },
    }))
}
