//! The meal catalog: an in-memory index of every known meal, backed by the
//! `meals` and `ingredients` tables.
//!
//! The catalog owns all writes. It is loaded once at startup; lookups run
//! against the in-memory index, and `add` persists before it returns, so
//! the index and the tables never diverge.

use std::collections::HashMap;

use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use pantry_db::models::Category;
use pantry_db::queries::meals as db;

use crate::validate::{self, ValidationError};

/// A catalogued meal. Immutable once created: there is no update or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    /// Surrogate id, assigned once, never reused.
    pub id: i32,
    pub category: Category,
    pub name: String,
    /// Non-empty, deduplicated, in insertion order.
    pub ingredients: Vec<String>,
}

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed or duplicate input; recoverable, the catalog is unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database failure; the transactional insert leaves no partial state.
    #[error(transparent)]
    Db(#[from] anyhow::Error),
}

/// In-memory meal index keyed by lowercase name, plus the id counter.
pub struct Catalog {
    pool: PgPool,
    /// Lowercase name -> meal.
    meals: HashMap<String, Meal>,
    /// Next id to assign: max stored id + 1, computed once at load and
    /// incremented per add so ids stay monotonic across restarts.
    next_id: i32,
}

impl Catalog {
    /// Load every meal and its ingredients from the database.
    pub async fn load(pool: PgPool) -> anyhow::Result<Self> {
        let rows = db::list_meals(&pool).await?;

        let mut meals = HashMap::with_capacity(rows.len());
        for row in rows {
            let ingredients = db::get_ingredients(&pool, row.id).await?;
            meals.insert(
                row.name.to_lowercase(),
                Meal {
                    id: row.id,
                    category: row.category,
                    name: row.name,
                    ingredients,
                },
            );
        }

        let next_id = db::max_meal_id(&pool).await? + 1;

        info!(meals = meals.len(), next_id, "catalog loaded");

        Ok(Self {
            pool,
            meals,
            next_id,
        })
    }

    /// Validate and add a meal, persisting it before returning.
    ///
    /// The meal and its ingredients are written in one transaction; on any
    /// failure neither the database nor the in-memory index changes.
    pub async fn add(
        &mut self,
        category: Category,
        name: &str,
        ingredients: Vec<String>,
    ) -> Result<&Meal, CatalogError> {
        if !validate::is_valid_token(name) {
            return Err(ValidationError::InvalidName(name.to_owned()).into());
        }
        for ingredient in &ingredients {
            if !validate::is_valid_token(ingredient) {
                return Err(ValidationError::InvalidIngredient(ingredient.clone()).into());
            }
        }

        // Drop duplicate ingredients, keeping first-occurrence order.
        let mut deduped: Vec<String> = Vec::with_capacity(ingredients.len());
        for ingredient in ingredients {
            if !deduped.contains(&ingredient) {
                deduped.push(ingredient);
            }
        }
        if deduped.is_empty() {
            return Err(ValidationError::EmptyIngredients.into());
        }

        let key = name.to_lowercase();
        if self.meals.contains_key(&key) {
            return Err(ValidationError::DuplicateName(name.to_owned()).into());
        }

        let id = self.next_id;
        db::insert_meal(&self.pool, id, category, name, &deduped)
            .await
            .map_err(CatalogError::Db)?;
        self.next_id += 1;

        info!(id, %category, name, "meal added");

        let meal = Meal {
            id,
            category,
            name: name.to_owned(),
            ingredients: deduped,
        };
        Ok(self.meals.entry(key).or_insert(meal))
    }

    /// All meals of one category, sorted by name ascending
    /// (case-insensitive).
    pub fn list_by_category(&self, category: Category) -> Vec<&Meal> {
        let mut meals: Vec<&Meal> = self
            .meals
            .values()
            .filter(|m| m.category == category)
            .collect();
        meals.sort_by_key(|m| m.name.to_lowercase());
        meals
    }

    /// Look up a meal by id.
    pub fn get_by_id(&self, id: i32) -> Option<&Meal> {
        self.meals.values().find(|m| m.id == id)
    }

    /// Case-insensitive exact-name lookup within a category.
    pub fn find_by_name(&self, category: Category, name: &str) -> Option<&Meal> {
        self.meals
            .get(&name.to_lowercase())
            .filter(|m| m.category == category)
    }

    /// Number of catalogued meals.
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
