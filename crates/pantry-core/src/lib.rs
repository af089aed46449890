//! Domain layer for pantry: validation rules, the meal catalog, the weekly
//! planner state machine, the durable plan store, and shopping-list
//! aggregation.

pub mod catalog;
pub mod io;
pub mod plan;
pub mod planner;
pub mod shopping;
pub mod validate;

pub use catalog::{Catalog, CatalogError, Meal};
pub use io::LineIo;
pub use plan::{PlanStore, WeeklyPlan};
pub use planner::plan_week;
pub use shopping::{ShoppingList, ShoppingListError, aggregate};
pub use validate::ValidationError;
