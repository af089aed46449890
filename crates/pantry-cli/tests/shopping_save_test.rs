//! End-to-end tests for the save flow: plan in one session, derive and
//! write the shopping list from storage in another.

use pantry_core::catalog::Catalog;
use pantry_core::plan::{PlanStore, WeeklyPlan};
use pantry_core::shopping::{self, ShoppingListError};
use pantry_db::models::{Category, Weekday};
use pantry_test_utils::{create_test_db, drop_test_db};

fn ingredients(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn saved_list_survives_a_new_session() {
    let (pool, db_name) = create_test_db().await;

    // Session one: build the catalog and commit a plan.
    {
        let mut catalog = Catalog::load(pool.clone()).await.unwrap();
        let scramble = catalog
            .add(Category::Breakfast, "scramble", ingredients(&["eggs", "milk"]))
            .await
            .unwrap()
            .clone();
        let cereal = catalog
            .add(Category::Breakfast, "cereal", ingredients(&["milk", "bread"]))
            .await
            .unwrap()
            .clone();

        let mut plan = WeeklyPlan::new();
        plan.set(Weekday::Monday, Category::Breakfast, scramble.clone());
        plan.set(Weekday::Tuesday, Category::Breakfast, scramble);
        plan.set(Weekday::Wednesday, Category::Breakfast, cereal);
        PlanStore::new(pool.clone()).commit(&plan).await.unwrap();
    }

    // Session two: reload everything from storage and write the file.
    let catalog = Catalog::load(pool.clone()).await.unwrap();
    let store = PlanStore::new(pool.clone());
    let plan = store.load(&catalog).await.unwrap();
    let list = shopping::aggregate(&plan).expect("stored plan should aggregate");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shopping.txt");
    list.write_to_file(&path).expect("write should succeed");

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines: Vec<&str> = contents.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["bread", "eggs x2", "milk x3"]);
    assert!(contents.ends_with('\n'));

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn no_stored_plan_means_nothing_to_save() {
    let (pool, db_name) = create_test_db().await;

    let catalog = Catalog::load(pool.clone()).await.unwrap();
    let store = PlanStore::new(pool.clone());

    let plan = store.load(&catalog).await.unwrap();
    assert_eq!(
        shopping::aggregate(&plan),
        Err(ShoppingListError::NotPlanned)
    );

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn write_failure_is_reported_not_swallowed() {
    let (pool, db_name) = create_test_db().await;

    let mut catalog = Catalog::load(pool.clone()).await.unwrap();
    let toast = catalog
        .add(Category::Breakfast, "toast", ingredients(&["bread", "butter"]))
        .await
        .unwrap()
        .clone();

    let mut plan = WeeklyPlan::new();
    plan.set(Weekday::Monday, Category::Breakfast, toast);
    let list = shopping::aggregate(&plan).unwrap();

    let result = list.write_to_file("/nonexistent-dir/shopping.txt");
    assert!(result.is_err());

    drop_test_db(&db_name).await;
}
