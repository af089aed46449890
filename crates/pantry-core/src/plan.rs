//! The weekly plan and its durable store.
//!
//! `WeeklyPlan` is the in-memory shape: one optional meal per (day,
//! category) slot. `PlanStore` is the single source of truth — whatever
//! `commit` wrote is the current plan, and any in-memory value is just a
//! cache of that.

use std::collections::BTreeMap;

use sqlx::PgPool;
use tracing::{info, warn};

use pantry_db::models::{Category, Weekday};
use pantry_db::queries::plan as db;

use crate::catalog::{Catalog, Meal};

/// One week of meal selections, keyed day-major then category-major.
///
/// Both key types order by declaration (Monday..Sunday, breakfast..dinner),
/// so iteration is always in week order. A missing slot means its category
/// had no candidate meals when the plan was made.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyPlan {
    slots: BTreeMap<Weekday, BTreeMap<Category, Meal>>,
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection for one slot, replacing any previous one.
    pub fn set(&mut self, day: Weekday, category: Category, meal: Meal) {
        self.slots.entry(day).or_default().insert(category, meal);
    }

    /// The meal planned for a slot, if any.
    pub fn get(&self, day: Weekday, category: Category) -> Option<&Meal> {
        self.slots.get(&day).and_then(|d| d.get(&category))
    }

    /// Iterate every filled slot in (day, category) order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, Category, &Meal)> {
        self.slots.iter().flat_map(|(day, by_category)| {
            by_category
                .iter()
                .map(|(category, meal)| (*day, *category, meal))
        })
    }

    /// Number of filled slots.
    pub fn filled_slots(&self) -> usize {
        self.slots.values().map(|d| d.len()).sum()
    }

    /// True when no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.slots.values().all(|d| d.is_empty())
    }
}

/// Durable storage for the single current weekly plan.
pub struct PlanStore {
    pool: PgPool,
}

impl PlanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Delete the stored plan entirely.
    pub async fn clear(&self) -> anyhow::Result<()> {
        db::clear_plan(&self.pool).await
    }

    /// Replace the stored plan with `plan`, atomically.
    ///
    /// The previous plan's tuples are deleted and the new ones inserted in
    /// one transaction: a reader sees either the old plan or the new one,
    /// never a mixture, and a failed commit leaves the old plan intact.
    pub async fn commit(&self, plan: &WeeklyPlan) -> anyhow::Result<()> {
        let entries: Vec<(Weekday, Category, i32)> = plan
            .iter()
            .map(|(day, category, meal)| (day, category, meal.id))
            .collect();

        db::replace_plan(&self.pool, &entries).await?;

        info!(slots = entries.len(), "weekly plan committed");
        Ok(())
    }

    /// Rebuild the current plan from storage.
    ///
    /// Each stored meal id is resolved against the catalog; a tuple whose
    /// id no longer resolves is dropped with a warning (meals are never
    /// deleted in this system, so this is purely defensive). An empty
    /// result is a valid plan with no slots, not an error.
    pub async fn load(&self, catalog: &Catalog) -> anyhow::Result<WeeklyPlan> {
        let entries = db::list_plan_entries(&self.pool).await?;

        let mut plan = WeeklyPlan::new();
        for entry in entries {
            match catalog.get_by_id(entry.meal_id) {
                Some(meal) => plan.set(entry.day, entry.category, meal.clone()),
                None => warn!(
                    meal_id = entry.meal_id,
                    day = %entry.day,
                    category = %entry.category,
                    "dropping plan entry for unknown meal"
                ),
            }
        }

        Ok(plan)
    }
}
