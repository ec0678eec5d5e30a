//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (database, secret, policy)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: session secret, branch-parent policy,
//!    database pool (optional — startup storage failures are logged, not
//!    fatal)
//! 2. **State Creation**: `AppState` with the pool, session registry,
//!    secret, and policy
//! 3. **Router Creation**: all routes and the auth middleware

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
