//! Database query functions for the `plan` table.
//!
//! The plan table holds at most one weekly plan. Committing a new plan is a
//! full replacement: delete everything, insert the new tuples, all inside
//! one transaction so a reader never sees a mix of two plans.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::{Category, PlanEntryRow, Weekday};

/// Delete every persisted plan tuple.
pub async fn clear_plan(pool: &PgPool) -> Result<()> {
    sqlx::query("DELETE FROM plan")
        .execute(pool)
        .await
        .context("failed to clear plan")?;

    Ok(())
}

/// Replace the stored plan with the given (day, category, meal id) tuples.
///
/// All-or-nothing: if any insert fails (for example a meal id that does not
/// exist), the transaction rolls back and the previous plan stays intact.
pub async fn replace_plan(pool: &PgPool, entries: &[(Weekday, Category, i32)]) -> Result<()> {
    let mut tx = pool.begin().await.context("failed to begin transaction")?;

    sqlx::query("DELETE FROM plan")
        .execute(&mut *tx)
        .await
        .context("failed to delete previous plan")?;

    for (day, category, meal_id) in entries {
        sqlx::query("INSERT INTO plan (day, category, meal_id) VALUES ($1, $2, $3)")
            .bind(day)
            .bind(category)
            .bind(meal_id)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("failed to insert plan entry for {day}, {category}"))?;
    }

    tx.commit().await.context("failed to commit transaction")?;

    Ok(())
}

/// Read every plan tuple, ordered by day then category.
///
/// The textual ORDER BY is only for deterministic output; callers re-key the
/// rows through the `Weekday`/`Category` enums for true week order.
pub async fn list_plan_entries(pool: &PgPool) -> Result<Vec<PlanEntryRow>> {
    let entries =
        sqlx::query_as::<_, PlanEntryRow>("SELECT * FROM plan ORDER BY day, category")
            .fetch_all(pool)
            .await
            .context("failed to list plan entries")?;

    Ok(entries)
}
