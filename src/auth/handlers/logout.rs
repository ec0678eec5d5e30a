/**
 * Logout Handler
 *
 * This module implements the logout handler for POST /api/auth/logout.
 *
 * Logout is unconditional and idempotent: whatever the request carries — a
 * live session, an already-revoked one, a malformed token, or no token at
 * all — the response is a success. A live session is removed from the
 * registry, after which its token no longer resolves anywhere.
 */

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::auth::handlers::types::MessageResponse;
use crate::auth::sessions::session_id_from_token;
use crate::error::AppError;
use crate::server::state::AppState;

/// Logout handler
///
/// Invalidates the presented session, if any. Never fails: calling with no
/// active session is safe.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    let token = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    if let Some(token) = token {
        match session_id_from_token(token, &state.session_secret) {
            Ok(session_id) => {
                if state.sessions.revoke(session_id).await {
                    tracing::info!("Session revoked: {}", session_id);
                } else {
                    tracing::debug!("Logout for unknown session: {}", session_id);
                }
            }
            Err(e) => {
                // Bad token on logout is not an error worth surfacing.
                tracing::debug!("Logout with unverifiable token: {}", e);
            }
        }
    }

    Ok(Json(MessageResponse {
        message: "Logged out successfully.".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::create_token;
    use axum::extract::State;
    use uuid::Uuid;

    fn bearer_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            format!("Bearer {}", token).parse().unwrap(),
        );
        headers
    }

    #[tokio::test]
    async fn test_logout_revokes_session() {
        let state = AppState::for_tests().await;
        let user_id = Uuid::new_v4();

        let session_id = state.sessions.create(user_id).await;
        let token = create_token(session_id, &state.session_secret).unwrap();

        let result = logout(State(state.clone()), bearer_headers(&token)).await;
        assert!(result.is_ok());
        assert_eq!(state.sessions.resolve(session_id).await, None);
    }

    #[tokio::test]
    async fn test_logout_without_token_succeeds() {
        let state = AppState::for_tests().await;

        let result = logout(State(state), HeaderMap::new()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let state = AppState::for_tests().await;
        let session_id = state.sessions.create(Uuid::new_v4()).await;
        let token = create_token(session_id, &state.session_secret).unwrap();

        let first = logout(State(state.clone()), bearer_headers(&token)).await;
        let second = logout(State(state), bearer_headers(&token)).await;
        assert!(first.is_ok());
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_logout_with_garbage_token_succeeds() {
        let state = AppState::for_tests().await;

        let result = logout(State(state), bearer_headers("not.a.token")).await;
        assert!(result.is_ok());
    }
}
