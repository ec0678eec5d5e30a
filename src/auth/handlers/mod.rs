//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Session invalidation handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`logout`** - POST /api/auth/logout - Session invalidation
//! - **`get_me`** - GET /api/auth/me - Get current user info

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use register::register;
