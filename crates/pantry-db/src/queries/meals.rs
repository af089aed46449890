//! Database query functions for the `meals` and `ingredients` tables.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::{Category, IngredientRow, MealRow};

/// Insert a meal and its ordered ingredient list in a single transaction.
///
/// The caller supplies the id (ids are assigned by the catalog's in-memory
/// counter). Either the meal row and every ingredient row land together, or
/// nothing does — later readers never observe a meal without its
/// ingredients.
pub async fn insert_meal(
    pool: &PgPool,
    id: i32,
    category: Category,
    name: &str,
    ingredients: &[String],
) -> Result<MealRow> {
    let mut tx = pool.begin().await.context("failed to begin transaction")?;

    let meal = sqlx::query_as::<_, MealRow>(
        "INSERT INTO meals (id, category, name) \
         VALUES ($1, $2, $3) \
         RETURNING *",
    )
    .bind(id)
    .bind(category)
    .bind(name)
    .fetch_one(&mut *tx)
    .await
    .with_context(|| format!("failed to insert meal {name:?}"))?;

    for (position, ingredient) in ingredients.iter().enumerate() {
        sqlx::query("INSERT INTO ingredients (meal_id, position, name) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(position as i32)
            .bind(ingredient)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("failed to insert ingredient {ingredient:?}"))?;
    }

    tx.commit().await.context("failed to commit transaction")?;

    Ok(meal)
}

/// Fetch a meal by its id.
pub async fn get_meal(pool: &PgPool, id: i32) -> Result<Option<MealRow>> {
    let meal = sqlx::query_as::<_, MealRow>("SELECT * FROM meals WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch meal")?;

    Ok(meal)
}

/// List every meal, ordered by id (creation order).
pub async fn list_meals(pool: &PgPool) -> Result<Vec<MealRow>> {
    let meals = sqlx::query_as::<_, MealRow>("SELECT * FROM meals ORDER BY id")
        .fetch_all(pool)
        .await
        .context("failed to list meals")?;

    Ok(meals)
}

/// List all meals of one category, sorted by name ascending
/// (case-insensitive).
pub async fn list_meals_by_category(pool: &PgPool, category: Category) -> Result<Vec<MealRow>> {
    let meals = sqlx::query_as::<_, MealRow>(
        "SELECT * FROM meals WHERE category = $1 ORDER BY lower(name)",
    )
    .bind(category)
    .fetch_all(pool)
    .await
    .context("failed to list meals by category")?;

    Ok(meals)
}

/// Find a meal by name within a category, matching case-insensitively.
pub async fn find_meal_by_name(
    pool: &PgPool,
    category: Category,
    name: &str,
) -> Result<Option<MealRow>> {
    let meal = sqlx::query_as::<_, MealRow>(
        "SELECT * FROM meals WHERE category = $1 AND lower(name) = lower($2)",
    )
    .bind(category)
    .bind(name)
    .fetch_optional(pool)
    .await
    .context("failed to find meal by name")?;

    Ok(meal)
}

/// Fetch the ingredient names of a meal in insertion order.
pub async fn get_ingredients(pool: &PgPool, meal_id: i32) -> Result<Vec<String>> {
    let rows: Vec<IngredientRow> = sqlx::query_as(
        "SELECT meal_id, position, name FROM ingredients \
         WHERE meal_id = $1 \
         ORDER BY position",
    )
    .bind(meal_id)
    .fetch_all(pool)
    .await
    .context("failed to fetch ingredients")?;

    Ok(rows.into_iter().map(|r| r.name).collect())
}

/// Highest assigned meal id, or 0 when the table is empty.
///
/// The catalog calls this once at load to seed its id counter.
pub async fn max_meal_id(pool: &PgPool) -> Result<i32> {
    let max: (i32,) = sqlx::query_as("SELECT COALESCE(MAX(id), 0) FROM meals")
        .fetch_one(pool)
        .await
        .context("failed to query max meal id")?;

    Ok(max.0)
}
