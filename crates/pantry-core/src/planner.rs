//! The slot-by-slot weekly planner.
//!
//! A fixed sequence of day x category slots, filled in day-major order from
//! the catalog's candidates. Two conditions keep the sequence moving without
//! being errors: a category with no candidates skips its slot, and a name
//! that matches no candidate is reported and re-prompted without bound.

use anyhow::Result;
use tracing::debug;

use pantry_db::models::{Category, Weekday};

use crate::catalog::Catalog;
use crate::io::LineIo;
use crate::plan::{PlanStore, WeeklyPlan};

/// Fill one slot per (day, category) pair and commit the result.
///
/// Steps per slot:
/// 1. Fetch the category's candidates, sorted by name.
/// 2. Empty candidate list: note it and leave the slot unfilled.
/// 3. Otherwise list the candidates and accept a name, re-prompting until
///    it matches one of them case-insensitively.
/// 4. Record the match.
///
/// When every slot has been visited the plan replaces whatever plan was
/// stored before — there is exactly one current plan at any time.
pub async fn plan_week(
    catalog: &Catalog,
    store: &PlanStore,
    io: &mut dyn LineIo,
    days: &[Weekday],
    categories: &[Category],
) -> Result<WeeklyPlan> {
    let mut plan = WeeklyPlan::new();

    for &day in days {
        io.write_line(&day.to_string())?;

        for &category in categories {
            let candidates = catalog.list_by_category(category);

            if candidates.is_empty() {
                debug!(%day, %category, "no candidates, slot left unfilled");
                io.write_line(&format!("No meals available for category: {category}"))?;
                continue;
            }

            for meal in &candidates {
                io.write_line(&meal.name)?;
            }
            io.write_line(&format!(
                "Choose the {category} for {day} from the list above:"
            ))?;

            loop {
                let entered = io.read_line()?.trim().to_lowercase();
                match candidates
                    .iter()
                    .find(|m| m.name.eq_ignore_ascii_case(&entered))
                {
                    Some(meal) => {
                        plan.set(day, category, (*meal).clone());
                        break;
                    }
                    None => {
                        io.write_line(
                            "This meal doesn't exist. Choose a meal from the list above.",
                        )?;
                    }
                }
            }
        }

        io.write_line(&format!("Yeah! We planned the meals for {day}."))?;
        io.write_line("")?;
    }

    store.commit(&plan).await?;

    Ok(plan)
}
