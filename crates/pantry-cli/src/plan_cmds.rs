//! Handlers for `pantry plan` and `pantry list-plan`.

use anyhow::Result;

use pantry_core::catalog::Catalog;
use pantry_core::io::LineIo;
use pantry_core::plan::{PlanStore, WeeklyPlan};
use pantry_core::planner::plan_week;
use pantry_db::models::{Category, Weekday};

/// Run the interactive 21-slot planner, commit the result, and print it.
pub async fn cmd_plan(
    catalog: &Catalog,
    store: &PlanStore,
    io: &mut dyn LineIo,
) -> Result<()> {
    let plan = plan_week(catalog, store, io, &Weekday::ALL, &Category::ALL).await?;
    render_plan(&plan, io)?;
    Ok(())
}

/// Reconstruct the stored plan and print it.
pub async fn cmd_list_plan(
    catalog: &Catalog,
    store: &PlanStore,
    io: &mut dyn LineIo,
) -> Result<()> {
    let plan = store.load(catalog).await?;
    if plan.is_empty() {
        io.write_line("Database does not contain any meal plans.")?;
        return Ok(());
    }
    render_plan(&plan, io)?;
    Ok(())
}

/// Print a plan day by day: the day name, then one `Category: meal` line
/// per filled slot.
pub fn render_plan(plan: &WeeklyPlan, io: &mut dyn LineIo) -> Result<()> {
    for day in Weekday::ALL {
        let filled: Vec<(Category, &str)> = Category::ALL
            .iter()
            .filter_map(|&category| {
                plan.get(day, category)
                    .map(|meal| (category, meal.name.as_str()))
            })
            .collect();

        if filled.is_empty() {
            continue;
        }

        io.write_line(&day.to_string())?;
        for (category, name) in filled {
            io.write_line(&format!("{}: {name}", capitalize(category)))?;
        }
        io.write_line("")?;
    }
    Ok(())
}

/// "breakfast" -> "Breakfast", for the per-day plan lines.
fn capitalize(category: Category) -> String {
    let s = category.to_string();
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => s,
    }
}
