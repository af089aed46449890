//! Integration tests for the slot-by-slot planner, driven by scripted
//! line input instead of a console.

use std::collections::VecDeque;
use std::io;

use pantry_core::catalog::Catalog;
use pantry_core::io::LineIo;
use pantry_core::plan::PlanStore;
use pantry_core::planner::plan_week;
use pantry_core::shopping;
use pantry_db::models::{Category, Weekday};
use pantry_test_utils::{create_test_db, drop_test_db};

/// LineIo over a pre-baked input script, recording all output.
struct ScriptedIo {
    inputs: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedIo {
    fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }
}

impl LineIo for ScriptedIo {
    fn read_line(&mut self) -> io::Result<String> {
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_owned());
        Ok(())
    }
}

fn ingredients(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

async fn seeded_catalog(pool: &sqlx::PgPool) -> Catalog {
    let mut catalog = Catalog::load(pool.clone()).await.unwrap();
    catalog
        .add(Category::Breakfast, "oatmeal", ingredients(&["oats", "milk"]))
        .await
        .unwrap();
    catalog
        .add(Category::Breakfast, "toast", ingredients(&["bread", "butter"]))
        .await
        .unwrap();
    catalog
        .add(Category::Lunch, "soup", ingredients(&["water", "carrots"]))
        .await
        .unwrap();
    catalog
}

#[tokio::test]
async fn fills_every_slot_with_candidates_and_reloads_identically() {
    let (pool, db_name) = create_test_db().await;
    let catalog = seeded_catalog(&pool).await;
    let store = PlanStore::new(pool.clone());

    // Per day: breakfast, then lunch. No dinner meals exist, so no dinner
    // prompt is issued.
    let per_day = ["toast", "soup"];
    let script: Vec<&str> = per_day.iter().copied().cycle().take(14).collect();
    let mut io = ScriptedIo::new(&script);

    let plan = plan_week(&catalog, &store, &mut io, &Weekday::ALL, &Category::ALL)
        .await
        .expect("planning should succeed");

    assert_eq!(plan.filled_slots(), 14);
    for day in Weekday::ALL {
        assert_eq!(plan.get(day, Category::Breakfast).unwrap().name, "toast");
        assert_eq!(plan.get(day, Category::Lunch).unwrap().name, "soup");
        assert!(plan.get(day, Category::Dinner).is_none());
    }

    // A reload reproduces exactly the committed selections, including the
    // absent dinner slots.
    let reloaded = store.load(&catalog).await.unwrap();
    assert_eq!(reloaded, plan);

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn unmatched_names_reprompt_until_a_candidate_matches() {
    let (pool, db_name) = create_test_db().await;
    let catalog = seeded_catalog(&pool).await;
    let store = PlanStore::new(pool.clone());

    // Monday breakfast: two misses, then a hit (case-insensitive).
    let mut io = ScriptedIo::new(&["waffles", "toastt", "TOAST", "soup"]);

    let plan = plan_week(
        &catalog,
        &store,
        &mut io,
        &[Weekday::Monday],
        &Category::ALL,
    )
    .await
    .expect("planning should succeed");

    assert_eq!(plan.get(Weekday::Monday, Category::Breakfast).unwrap().name, "toast");
    let reprompts = io
        .output
        .iter()
        .filter(|l| l.contains("doesn't exist"))
        .count();
    assert_eq!(reprompts, 2);

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn a_category_with_no_candidates_is_skipped() {
    let (pool, db_name) = create_test_db().await;
    let catalog = seeded_catalog(&pool).await;
    let store = PlanStore::new(pool.clone());

    let mut io = ScriptedIo::new(&["oatmeal", "soup"]);
    let plan = plan_week(
        &catalog,
        &store,
        &mut io,
        &[Weekday::Sunday],
        &Category::ALL,
    )
    .await
    .expect("planning should succeed");

    assert!(plan.get(Weekday::Sunday, Category::Dinner).is_none());
    assert!(io
        .output
        .iter()
        .any(|l| l.contains("No meals available for category: dinner")));

    // The skipped slot stays absent after a reload too.
    let reloaded = store.load(&catalog).await.unwrap();
    assert!(reloaded.get(Weekday::Sunday, Category::Dinner).is_none());
    assert_eq!(reloaded.filled_slots(), 2);

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn a_second_plan_fully_replaces_the_first() {
    let (pool, db_name) = create_test_db().await;
    let catalog = seeded_catalog(&pool).await;
    let store = PlanStore::new(pool.clone());

    let first_script: Vec<&str> = ["oatmeal", "soup"].iter().copied().cycle().take(14).collect();
    let mut io = ScriptedIo::new(&first_script);
    plan_week(&catalog, &store, &mut io, &Weekday::ALL, &Category::ALL)
        .await
        .unwrap();

    let second_script: Vec<&str> = ["toast", "soup"].iter().copied().cycle().take(14).collect();
    let mut io = ScriptedIo::new(&second_script);
    plan_week(&catalog, &store, &mut io, &Weekday::ALL, &Category::ALL)
        .await
        .unwrap();

    // No slot of the first run survives.
    let reloaded = store.load(&catalog).await.unwrap();
    for day in Weekday::ALL {
        assert_eq!(reloaded.get(day, Category::Breakfast).unwrap().name, "toast");
    }
    assert_eq!(reloaded.filled_slots(), 14);

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn single_slot_plan_aggregates_to_its_ingredients() {
    let (pool, db_name) = create_test_db().await;
    let catalog = seeded_catalog(&pool).await;
    let store = PlanStore::new(pool.clone());

    let mut io = ScriptedIo::new(&["toast"]);
    plan_week(
        &catalog,
        &store,
        &mut io,
        &[Weekday::Monday],
        &[Category::Breakfast],
    )
    .await
    .unwrap();

    let reloaded = store.load(&catalog).await.unwrap();
    let list = shopping::aggregate(&reloaded).unwrap();
    assert_eq!(list.count("bread"), 1);
    assert_eq!(list.count("butter"), 1);
    assert_eq!(list.len(), 2);

    drop_test_db(&db_name).await;
}
