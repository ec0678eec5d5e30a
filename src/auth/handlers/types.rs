/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication
 * handlers. These types are shared across register, login, logout, and
 * get_me handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration request
///
/// Contains the email and password for creating an account.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
///
/// Contains the email and password for user authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

/// Auth response
///
/// Returned by register and login handlers. Contains the session token
/// and user information for immediate authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Signed session token
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's email address
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Simple message response, used by logout
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    /// Human-readable outcome message
    pub message: String,
}
