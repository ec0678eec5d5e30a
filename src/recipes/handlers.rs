/**
 * Recipe Handlers
 *
 * This module implements the HTTP handlers for recipe operations:
 * creating, branching, deleting, and listing recipes. All routes sit
 * behind the auth middleware; ownership and lineage rules are enforced
 * here, on top of the queries in `db.rs`.
 *
 * # Ownership and lineage
 *
 * - A recipe's owner is the authenticated creator, set once at creation
 * - Only the owner can delete a recipe; a non-matching delete is a silent
 *   no-op, not an error
 * - Branching creates a new recipe that references its parent; the parent
 *   row is never modified, so lineage is discoverable only by querying
 *   children through `parent_recipe`
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::recipes::db::{
    delete_recipe, get_recipe_by_id, insert_recipe, list_branches_of_owner,
    list_recipes_by_owner, Recipe,
};
use crate::server::state::AppState;

/// Title given to every branched recipe
const BRANCH_TITLE: &str = "Branched Recipe";

/// Create recipe request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateRecipeRequest {
    /// Recipe title
    pub title: String,
    /// Ordered list of ingredients; may be empty
    pub ingredients: Vec<String>,
    /// Free-text instructions
    pub instructions: String,
}

/// Branch recipe request
///
/// No title field: branches always get a fixed default title.
#[derive(Deserialize, Serialize, Debug)]
pub struct BranchRecipeRequest {
    /// Ordered list of ingredients for the variant; may be empty
    pub ingredients: Vec<String>,
    /// Free-text instructions for the variant
    pub instructions: String,
}

/// Recipe response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RecipeResponse {
    /// Recipe's unique ID (UUID)
    pub id: String,
    /// Recipe title
    pub title: String,
    /// Ordered list of ingredients
    pub ingredients: Vec<String>,
    /// Free-text instructions
    pub instructions: String,
    /// ID of the owning user
    pub owner: String,
    /// ID of the parent recipe, for branches
    pub parent_recipe: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            title: recipe.title,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            owner: recipe.owner.to_string(),
            parent_recipe: recipe.parent_recipe.map(|id| id.to_string()),
            created_at: recipe.created_at,
        }
    }
}

fn validate_instructions(instructions: &str) -> Result<(), AppError> {
    if instructions.trim().is_empty() {
        return Err(AppError::validation("Instructions are required."));
    }
    Ok(())
}

fn validate_ingredients(ingredients: &[String]) -> Result<(), AppError> {
    // An empty list is allowed; blank entries are not.
    if ingredients.iter().any(|i| i.trim().is_empty()) {
        return Err(AppError::validation(
            "Ingredients must not contain blank entries.",
        ));
    }
    Ok(())
}

/// Create recipe handler
///
/// Persists a new root recipe (no parent) owned by the caller.
///
/// # Errors
///
/// * `400 Bad Request` - blank title or instructions, or blank ingredient entries
/// * `503 Service Unavailable` - storage is not configured
/// * `500 Internal Server Error` - storage write failed
pub async fn create_recipe(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<CreateRecipeRequest>,
) -> Result<Json<RecipeResponse>, AppError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AppError::Unavailable
    })?;

    if request.title.trim().is_empty() {
        return Err(AppError::validation("Title is required."));
    }
    validate_ingredients(&request.ingredients)?;
    validate_instructions(&request.instructions)?;

    let recipe = insert_recipe(
        pool,
        auth.user_id,
        &request.title,
        &request.ingredients,
        &request.instructions,
        None,
    )
    .await?;

    tracing::info!("Recipe created: {} by {}", recipe.id, auth.user_id);

    Ok(Json(recipe.into()))
}

/// Branch recipe handler
///
/// Creates a derivative recipe referencing the parent given in the path.
/// The branch takes the caller's ingredients and instructions, a fixed
/// default title, and the caller as owner. The parent row is untouched.
///
/// When branch-parent checking is enabled (the default), a missing parent
/// fails with 404 and nothing is written; with it disabled the write goes
/// through unchecked and the parent link is dangling.
///
/// # Errors
///
/// * `400 Bad Request` - blank instructions or blank ingredient entries
/// * `404 Not Found` - parent recipe does not exist (when checking is enabled)
/// * `503 Service Unavailable` - storage is not configured
/// * `500 Internal Server Error` - storage write failed
pub async fn branch_recipe(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(parent_id): Path<Uuid>,
    Json(request): Json<BranchRecipeRequest>,
) -> Result<Json<RecipeResponse>, AppError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AppError::Unavailable
    })?;

    validate_ingredients(&request.ingredients)?;
    validate_instructions(&request.instructions)?;

    if state.require_branch_parent && get_recipe_by_id(pool, parent_id).await?.is_none() {
        tracing::warn!("Branch target not found: {}", parent_id);
        return Err(AppError::NotFound);
    }

    let recipe = insert_recipe(
        pool,
        auth.user_id,
        BRANCH_TITLE,
        &request.ingredients,
        &request.instructions,
        Some(parent_id),
    )
    .await?;

    tracing::info!(
        "Recipe {} branched from {} by {}",
        recipe.id,
        parent_id,
        auth.user_id
    );

    Ok(Json(recipe.into()))
}

/// Get recipe handler
///
/// Fetches a single recipe by id, e.g. to show a branch form its parent.
///
/// # Errors
///
/// * `404 Not Found` - no recipe with this id
/// * `503 Service Unavailable` - storage is not configured
pub async fn get_recipe(
    State(state): State<AppState>,
    AuthUser(_auth): AuthUser,
    Path(recipe_id): Path<Uuid>,
) -> Result<Json<RecipeResponse>, AppError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AppError::Unavailable
    })?;

    let recipe = get_recipe_by_id(pool, recipe_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(recipe.into()))
}

/// Delete recipe handler
///
/// Deletes the recipe iff the caller owns it. A non-matching id/owner pair
/// is a silent no-op: the response is 200 either way, with no distinct
/// not-found signal.
///
/// # Errors
///
/// * `503 Service Unavailable` - storage is not configured
/// * `500 Internal Server Error` - storage write failed
pub async fn remove_recipe(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(recipe_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AppError::Unavailable
    })?;

    let removed = delete_recipe(pool, recipe_id, auth.user_id).await?;
    if removed > 0 {
        tracing::info!("Recipe deleted: {} by {}", recipe_id, auth.user_id);
    } else {
        tracing::debug!(
            "Delete no-op for recipe {} by {}",
            recipe_id,
            auth.user_id
        );
    }

    Ok(StatusCode::OK)
}

/// List own recipes handler
///
/// Returns every recipe owned by the caller, newest first.
pub async fn list_recipes(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<Vec<RecipeResponse>>, AppError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AppError::Unavailable
    })?;

    let recipes = list_recipes_by_owner(pool, auth.user_id).await?;
    Ok(Json(recipes.into_iter().map(Into::into).collect()))
}

/// List branched recipes handler
///
/// Returns the recipes other users (or the caller) have branched from the
/// caller's recipes, newest first.
pub async fn list_branched_recipes(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<Vec<RecipeResponse>>, AppError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AppError::Unavailable
    })?;

    let recipes = list_branches_of_owner(pool, auth.user_id).await?;
    Ok(Json(recipes.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::auth::AuthenticatedUser;

    fn auth_user() -> (Uuid, AuthUser) {
        let user_id = Uuid::new_v4();
        (
            user_id,
            AuthUser(AuthenticatedUser {
                user_id,
                email: "cook@example.com".to_string(),
            }),
        )
    }

    fn soup_request() -> CreateRecipeRequest {
        CreateRecipeRequest {
            title: "Soup".to_string(),
            ingredients: vec!["water".to_string(), "salt".to_string()],
            instructions: "boil".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_contains_recipe_once() {
        let state = AppState::for_tests().await;
        let (_, auth) = auth_user();

        let created = create_recipe(State(state.clone()), auth.clone(), Json(soup_request()))
            .await
            .unwrap();

        let listed = list_recipes(State(state), auth).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].title, "Soup");
        assert_eq!(listed[0].ingredients, vec!["water", "salt"]);
        assert_eq!(listed[0].instructions, "boil");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let state = AppState::for_tests().await;
        let (_, auth) = auth_user();

        let request = CreateRecipeRequest {
            title: "   ".to_string(),
            ingredients: vec![],
            instructions: "boil".to_string(),
        };

        let result = create_recipe(State(state), auth, Json(request)).await;
        assert_eq!(result.unwrap_err().status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_branch_sets_parent_and_default_title() {
        let state = AppState::for_tests().await;
        let (_, alice) = auth_user();
        let (bob_id, bob) = auth_user();

        let soup = create_recipe(State(state.clone()), alice, Json(soup_request()))
            .await
            .unwrap();
        let parent_id = Uuid::parse_str(&soup.id).unwrap();

        let request = BranchRecipeRequest {
            ingredients: vec![
                "water".to_string(),
                "salt".to_string(),
                "pepper".to_string(),
            ],
            instructions: "boil longer".to_string(),
        };

        let branch = branch_recipe(State(state), bob, Path(parent_id), Json(request))
            .await
            .unwrap();

        assert_eq!(branch.title, BRANCH_TITLE);
        assert_eq!(branch.parent_recipe, Some(soup.id.clone()));
        assert_eq!(branch.owner, bob_id.to_string());
        assert_eq!(branch.instructions, "boil longer");
    }

    #[tokio::test]
    async fn test_branch_missing_parent_writes_nothing() {
        let state = AppState::for_tests().await;
        let (_, auth) = auth_user();

        let request = BranchRecipeRequest {
            ingredients: vec![],
            instructions: "boil longer".to_string(),
        };

        let result = branch_recipe(
            State(state.clone()),
            auth.clone(),
            Path(Uuid::new_v4()),
            Json(request),
        )
        .await;
        assert_eq!(result.unwrap_err().status_code(), StatusCode::NOT_FOUND);

        let listed = list_recipes(State(state), auth).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_branch_without_parent_check_allows_dangling_link() {
        let mut state = AppState::for_tests().await;
        state.require_branch_parent = false;
        let (_, auth) = auth_user();
        let orphan_parent = Uuid::new_v4();

        let request = BranchRecipeRequest {
            ingredients: vec![],
            instructions: "improvise".to_string(),
        };

        let branch = branch_recipe(State(state), auth, Path(orphan_parent), Json(request))
            .await
            .unwrap();
        assert_eq!(branch.parent_recipe, Some(orphan_parent.to_string()));
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_is_silent_noop() {
        let state = AppState::for_tests().await;
        let (_, owner) = auth_user();
        let (_, stranger) = auth_user();

        let recipe = create_recipe(State(state.clone()), owner.clone(), Json(soup_request()))
            .await
            .unwrap();
        let recipe_id = Uuid::parse_str(&recipe.id).unwrap();

        // Stranger's delete answers 200 but removes nothing.
        let status = remove_recipe(State(state.clone()), stranger, Path(recipe_id))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::OK);

        let listed = list_recipes(State(state), owner).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_get_recipe_not_found() {
        let state = AppState::for_tests().await;
        let (_, auth) = auth_user();

        let result = get_recipe(State(state), auth, Path(Uuid::new_v4())).await;
        assert_eq!(result.unwrap_err().status_code(), StatusCode::NOT_FOUND);
    }
}
