/**
 * Session Management
 *
 * This module implements the session lifecycle: an authenticated login
 * creates a server-side session entry keyed by an opaque session id, and
 * the client receives that id wrapped in a signed token. Resolving a
 * request's token means verifying the signature, then looking the session
 * id up in the registry — so logout genuinely invalidates a session even
 * though the token itself would still verify.
 *
 * The registry is the key-value session backend: an in-process map from
 * session id to user id, shared across request tasks.
 */

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Session token lifetime: 30 days
const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Claims carried by the signed session token
///
/// `sub` is the session id — not the user id. The user is only reachable
/// through the server-side registry, which is what makes logout effective.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Session ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Create a signed session token for a session id
///
/// # Arguments
/// * `session_id` - Server-side session identity
/// * `secret` - Session-signing secret from configuration
///
/// # Returns
/// Signed token string
pub fn create_token(
    session_id: Uuid,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let claims = Claims {
        sub: session_id.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
///
/// # Arguments
/// * `token` - Signed token string
/// * `secret` - Session-signing secret from configuration
///
/// # Returns
/// Decoded claims or error
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Extract the session id from a token
///
/// Fails if the signature does not verify or the subject is not a UUID.
pub fn session_id_from_token(token: &str, secret: &str) -> Result<Uuid, String> {
    let claims =
        verify_token(token, secret).map_err(|e| format!("Token verification failed: {}", e))?;
    Uuid::parse_str(&claims.sub).map_err(|e| format!("Invalid session ID in token: {}", e))
}

/// Server-side session registry
///
/// Maps opaque session ids to user ids. Cloning shares the underlying map,
/// so the registry can live in application state and be handed to every
/// request task.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, Uuid>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a session for a user, returning the new session id
    pub async fn create(&self, user_id: Uuid) -> Uuid {
        let session_id = Uuid::new_v4();
        self.sessions.write().await.insert(session_id, user_id);
        session_id
    }

    /// Resolve a session id back to its user id
    pub async fn resolve(&self, session_id: Uuid) -> Option<Uuid> {
        self.sessions.read().await.get(&session_id).copied()
    }

    /// Remove a session; returns whether it existed
    ///
    /// Removing an unknown session id is a no-op, which is what makes
    /// logout idempotent.
    pub async fn revoke(&self, session_id: Uuid) -> bool {
        self.sessions.write().await.remove(&session_id).is_some()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
