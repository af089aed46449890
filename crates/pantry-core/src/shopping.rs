//! Shopping-list aggregation: reduce a weekly plan to ingredient counts.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use crate::plan::WeeklyPlan;

/// Errors from shopping-list aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoppingListError {
    /// No plan slots are filled; there is nothing to shop for.
    #[error("no weekly plan has been made yet")]
    NotPlanned,
}

/// Ingredient name -> occurrence count across the whole week.
///
/// Derived on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingList {
    counts: BTreeMap<String, u32>,
}

impl ShoppingList {
    /// Occurrence count for an ingredient (0 when absent).
    pub fn count(&self, ingredient: &str) -> u32 {
        self.counts.get(ingredient).copied().unwrap_or(0)
    }

    /// Number of distinct ingredients.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Render one line per ingredient: `"<name>"`, or `"<name> x<count>"`
    /// when the count is above one.
    pub fn lines(&self) -> Vec<String> {
        self.counts
            .iter()
            .map(|(name, count)| {
                if *count > 1 {
                    format!("{name} x{count}")
                } else {
                    name.clone()
                }
            })
            .collect()
    }

    /// Write the rendered lines, newline-terminated, to `path`.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut file = File::create(path)?;
        for line in self.lines() {
            writeln!(file, "{line}")?;
        }
        Ok(())
    }
}

/// Tally every ingredient of every meal in the plan's filled slots.
///
/// A meal planned in two slots contributes each of its ingredients twice.
pub fn aggregate(plan: &WeeklyPlan) -> Result<ShoppingList, ShoppingListError> {
    if plan.is_empty() {
        return Err(ShoppingListError::NotPlanned);
    }

    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for (_, _, meal) in plan.iter() {
        for ingredient in &meal.ingredients {
            *counts.entry(ingredient.clone()).or_insert(0) += 1;
        }
    }

    Ok(ShoppingList { counts })
}
