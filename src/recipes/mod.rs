//! Recipes Module
//!
//! This module implements the recipe entity graph and its mutation rules:
//! creating recipes, branching existing ones into derivative versions, and
//! owner-guarded deletion.
//!
//! # Module Structure
//!
//! ```text
//! recipes/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - Recipe model and database operations
//! └── handlers.rs - HTTP handlers and request/response types
//! ```
//!
//! # Lineage
//!
//! Branched recipes carry a weak reference to their parent in
//! `parent_recipe`; root recipes have none. Parents are never back-linked
//! or modified by branching, so recipe lineages form a forest that is
//! traversed child-to-parent.

/// Recipe model and database operations
pub mod db;

/// HTTP handlers for recipe endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use db::Recipe;
pub use handlers::{
    branch_recipe, create_recipe, get_recipe, list_branched_recipes, list_recipes,
    remove_recipe, BranchRecipeRequest, CreateRecipeRequest, RecipeResponse,
};
