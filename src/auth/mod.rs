//! Authentication Module
//!
//! This module handles user registration, credential verification, and
//! session management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Session tokens and the session registry
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     ├── logout.rs   - Session invalidation handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → user created → session opened → token returned
//! 2. **Login**: email + password → credentials verified → session opened → token returned
//! 3. **Protected request**: token → signature verified → session resolved → user loaded
//! 4. **Logout**: token → session removed from the registry (idempotent)
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost factor 10) before storage
//! - The wire token carries only an opaque session id; the user is reachable
//!   only through the server-side registry, so logout is effective
//! - Invalid credentials return 401 with one shared message (no information
//!   leakage)

/// User data model and database operations
pub mod users;

/// Session tokens and the session registry
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{get_me, login, logout, register};
pub use sessions::SessionRegistry;
