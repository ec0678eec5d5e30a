//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint wiring
//! ```
//!
//! # Route Organization
//!
//! Public routes (register, login, logout) are reachable without a
//! session; everything under `/api/recipes` plus `/api/auth/me` sits
//! behind the auth middleware. Unknown paths hit the 404 fallback.

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
