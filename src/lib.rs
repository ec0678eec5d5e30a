//! forklore — a recipe sharing and branching service
//!
//! Users register and log in with email/password, create recipes, and
//! branch existing recipes into derivative versions tied to a parent.
//!
//! # Module Structure
//!
//! - **`auth`** - registration, credential verification, sessions
//! - **`recipes`** - the recipe entity graph and its mutation rules
//! - **`middleware`** - the authentication gate for protected routes
//! - **`error`** - the service-wide error taxonomy
//! - **`routes`** - HTTP route assembly
//! - **`server`** - configuration, state, and app initialization

pub mod auth;
pub mod error;
pub mod middleware;
pub mod recipes;
pub mod routes;
pub mod server;
