//! Middleware Module
//!
//! This module contains HTTP middleware for the server. Middleware runs
//! before handlers; currently that means the authentication gate every
//! protected route goes through.

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
