//! Database operations for recipes
//!
//! This module contains database operations for recipe rows, including the
//! self-referential parent link that models branching. `ingredients` is
//! stored as a JSON array of strings, preserving order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Recipe as stored
///
/// `owner` is set once at creation and never reassigned. `parent_recipe` is
/// present only on branched recipes and never mutated afterwards; it is a
/// weak reference, not a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub owner: Uuid,
    pub parent_recipe: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

fn recipe_from_row(row: &SqliteRow) -> Result<Recipe, sqlx::Error> {
    let ingredients_json: String = row.try_get("ingredients")?;
    let ingredients: Vec<String> =
        serde_json::from_str(&ingredients_json).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(Recipe {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        ingredients,
        instructions: row.try_get("instructions")?,
        owner: row.try_get("owner")?,
        parent_recipe: row.try_get("parent_recipe")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Insert a new recipe
///
/// `parent_recipe` is `Some` for branches, `None` for root recipes.
pub async fn insert_recipe(
    pool: &SqlitePool,
    owner: Uuid,
    title: &str,
    ingredients: &[String],
    instructions: &str,
    parent_recipe: Option<Uuid>,
) -> Result<Recipe, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let ingredients_json =
        serde_json::to_string(ingredients).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

    sqlx::query(
        r#"
        INSERT INTO recipes (id, title, ingredients, instructions, owner, parent_recipe, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(&ingredients_json)
    .bind(instructions)
    .bind(owner)
    .bind(parent_recipe)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Recipe {
        id,
        title: title.to_string(),
        ingredients: ingredients.to_vec(),
        instructions: instructions.to_string(),
        owner,
        parent_recipe,
        created_at: now,
    })
}

/// Get a recipe by ID
pub async fn get_recipe_by_id(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<Recipe>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, title, ingredients, instructions, owner, parent_recipe, created_at
        FROM recipes
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(recipe_from_row).transpose()
}

/// Delete a recipe, guarded by ownership
///
/// Deletes only when both id and owner match; returns the number of rows
/// removed (0 or 1). A mismatch is not an error.
pub async fn delete_recipe(
    pool: &SqlitePool,
    recipe_id: Uuid,
    owner: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM recipes
        WHERE id = ? AND owner = ?
        "#,
    )
    .bind(recipe_id)
    .bind(owner)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// List all recipes owned by a user, newest first
pub async fn list_recipes_by_owner(
    pool: &SqlitePool,
    owner: Uuid,
) -> Result<Vec<Recipe>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, title, ingredients, instructions, owner, parent_recipe, created_at
        FROM recipes
        WHERE owner = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(owner)
    .fetch_all(pool)
    .await?;

    rows.iter().map(recipe_from_row).collect()
}

/// List recipes branched from a user's recipes, newest first
///
/// A branch belongs to whoever created it; this query finds the branches
/// whose *parent* is owned by the given user, by joining through the
/// parent link.
pub async fn list_branches_of_owner(
    pool: &SqlitePool,
    owner: Uuid,
) -> Result<Vec<Recipe>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT r.id, r.title, r.ingredients, r.instructions, r.owner, r.parent_recipe, r.created_at
        FROM recipes r
        JOIN recipes parent ON r.parent_recipe = parent.id
        WHERE parent.owner = ?
        ORDER BY r.created_at DESC
        "#,
    )
    .bind(owner)
    .fetch_all(pool)
    .await?;

    rows.iter().map(recipe_from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::state::AppState;

    async fn pool() -> SqlitePool {
        AppState::for_tests().await.db_pool.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_fetch_roundtrip() {
        let pool = pool().await;
        let owner = Uuid::new_v4();
        let ingredients = vec!["water".to_string(), "salt".to_string()];

        let recipe = insert_recipe(&pool, owner, "Soup", &ingredients, "boil", None)
            .await
            .unwrap();

        let fetched = get_recipe_by_id(&pool, recipe.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Soup");
        assert_eq!(fetched.ingredients, ingredients);
        assert_eq!(fetched.instructions, "boil");
        assert_eq!(fetched.owner, owner);
        assert_eq!(fetched.parent_recipe, None);
    }

    #[tokio::test]
    async fn test_ingredient_order_preserved() {
        let pool = pool().await;
        let ingredients: Vec<String> = (0..10).map(|i| format!("item-{}", i)).collect();

        let recipe = insert_recipe(
            &pool,
            Uuid::new_v4(),
            "Ordered",
            &ingredients,
            "mix in order",
            None,
        )
        .await
        .unwrap();

        let fetched = get_recipe_by_id(&pool, recipe.id).await.unwrap().unwrap();
        assert_eq!(fetched.ingredients, ingredients);
    }

    #[tokio::test]
    async fn test_empty_ingredients_roundtrip() {
        let pool = pool().await;

        let recipe = insert_recipe(&pool, Uuid::new_v4(), "Water", &[], "pour", None)
            .await
            .unwrap();

        let fetched = get_recipe_by_id(&pool, recipe.id).await.unwrap().unwrap();
        assert!(fetched.ingredients.is_empty());
    }

    #[tokio::test]
    async fn test_delete_requires_matching_owner() {
        let pool = pool().await;
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let recipe = insert_recipe(&pool, owner, "Mine", &[], "keep", None)
            .await
            .unwrap();

        let removed = delete_recipe(&pool, recipe.id, stranger).await.unwrap();
        assert_eq!(removed, 0);
        assert!(get_recipe_by_id(&pool, recipe.id).await.unwrap().is_some());

        let removed = delete_recipe(&pool, recipe.id, owner).await.unwrap();
        assert_eq!(removed, 1);
        assert!(get_recipe_by_id(&pool, recipe.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_branches_joins_through_parent() {
        let pool = pool().await;
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let soup = insert_recipe(&pool, alice, "Soup", &[], "boil", None)
            .await
            .unwrap();
        let branch = insert_recipe(
            &pool,
            bob,
            "Branched Recipe",
            &[],
            "boil longer",
            Some(soup.id),
        )
        .await
        .unwrap();

        // Bob's branch shows up under Alice (she owns the parent) ...
        let branches = list_branches_of_owner(&pool, alice).await.unwrap();
        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0].id, branch.id);
        assert_eq!(branches[0].owner, bob);

        // ... and not under Bob, who owns no branched-from recipe.
        assert!(list_branches_of_owner(&pool, bob).await.unwrap().is_empty());
    }
}
