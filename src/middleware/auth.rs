/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts the session token from the
 * Authorization header, verifies its signature, resolves the session in
 * the server-side registry, and provides the user to handlers.
 *
 * A token that verifies but whose session is gone from the registry (e.g.
 * after logout) is rejected exactly like a missing or malformed token.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::session_id_from_token;
use crate::auth::users::get_user_by_id;
use crate::error::AppError;
use crate::server::state::AppState;

/// Authenticated user data resolved from the request's session
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the session token from the Authorization header
/// 2. Verifies the token signature
/// 3. Resolves the session id in the registry
/// 4. Loads the user and attaches it to request extensions
///
/// Returns 401 Unauthorized if any step fails.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Get Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            AppError::Unauthenticated
        })?;

    // Extract token (format: "Bearer <token>")
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        AppError::Unauthenticated
    })?;

    // Verify signature and extract the session id
    let session_id = session_id_from_token(token, &state.session_secret).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        AppError::Unauthenticated
    })?;

    // Resolve the session; logout removes the entry, killing the token
    let user_id = state.sessions.resolve(session_id).await.ok_or_else(|| {
        tracing::warn!("Unknown or revoked session: {}", session_id);
        AppError::Unauthenticated
    })?;

    // Load the user behind the session
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AppError::Unavailable
    })?;
    let user = get_user_by_id(pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User behind session no longer exists: {}", user_id);
            AppError::Unauthenticated
        })?;

    // Attach authenticated user to request extensions
    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Usable as a handler parameter on any route behind `auth_middleware`;
/// pulls the `AuthenticatedUser` the middleware stored in request
/// extensions.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AppError::Unauthenticated
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request as HttpRequest;

    #[tokio::test]
    async fn test_extractor_reads_extensions() {
        let state = AppState::for_tests_without_storage();
        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
        };

        let mut request = HttpRequest::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        request.extensions_mut().insert(user.clone());
        let (mut parts, _) = request.into_parts();

        let extracted = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(extracted.is_ok());
        assert_eq!(extracted.unwrap().0.user_id, user.user_id);
    }

    #[tokio::test]
    async fn test_extractor_missing_user() {
        let state = AppState::for_tests_without_storage();

        let request = HttpRequest::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let extracted = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(
            extracted.unwrap_err(),
            AppError::Unauthenticated
        ));
    }
}
