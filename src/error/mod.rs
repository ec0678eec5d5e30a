//! Error Module
//!
//! This module defines the error types used across the service. Errors are
//! raised by handlers and the auth/recipe modules and can be converted to
//! HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Taxonomy
//!
//! - `InvalidCredentials` - email/password pair did not verify (401)
//! - `EmailTaken` - registration conflict (409)
//! - `Unauthenticated` - no resolvable session on a protected route (401)
//! - `NotFound` - referenced record absent (404)
//! - `Validation` - request payload rejected at the boundary (400)
//! - `Unavailable` - storage not configured (503)
//! - `Storage` - storage operation failed (500)
//! - `Internal` - hashing/token generation failed (500)
//!
//! # HTTP Response Conversion
//!
//! `AppError` implements `IntoResponse`, so handlers can return it directly.
//! Storage and internal errors are rendered with a generic message; the
//! underlying cause is logged, never sent to the client.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AppError;
