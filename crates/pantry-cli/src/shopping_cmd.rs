//! Handler for `pantry save`: derive the shopping list and write it out.
//!
//! The plan is always re-derived from the store, so saving works in a fresh
//! process long after the plan was made.

use anyhow::{Context, Result};

use pantry_core::catalog::Catalog;
use pantry_core::io::LineIo;
use pantry_core::plan::PlanStore;
use pantry_core::shopping::{self, ShoppingListError};

/// Aggregate the stored plan into a shopping list and write it to a file.
///
/// With no stored plan the command reports and does nothing — in
/// particular, no file is created.
pub async fn cmd_save(
    catalog: &Catalog,
    store: &PlanStore,
    io: &mut dyn LineIo,
    filename: Option<String>,
) -> Result<()> {
    let plan = store.load(catalog).await?;

    let list = match shopping::aggregate(&plan) {
        Ok(list) => list,
        Err(ShoppingListError::NotPlanned) => {
            io.write_line("Unable to save. Plan your meals first.")?;
            return Ok(());
        }
    };

    let filename = match filename {
        Some(f) => f,
        None => {
            io.write_line("Input a filename:")?;
            io.read_line()?.trim().to_owned()
        }
    };

    list.write_to_file(&filename)
        .with_context(|| format!("failed to write shopping list to {filename:?}"))?;

    io.write_line("Saved!")?;
    Ok(())
}
