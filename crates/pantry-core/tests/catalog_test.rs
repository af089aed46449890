//! Integration tests for the catalog against a real database.

use pantry_core::catalog::{Catalog, CatalogError};
use pantry_core::validate::ValidationError;
use pantry_db::models::Category;
use pantry_test_utils::{create_test_db, drop_test_db};

fn ingredients(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn add_then_find_round_trips_with_ingredient_order() {
    let (pool, db_name) = create_test_db().await;
    let mut catalog = Catalog::load(pool.clone()).await.unwrap();

    let id = catalog
        .add(
            Category::Breakfast,
            "oatmeal",
            ingredients(&["oats", "milk", "honey"]),
        )
        .await
        .expect("add should succeed")
        .id;
    assert_eq!(id, 1);

    let found = catalog
        .find_by_name(Category::Breakfast, "oatmeal")
        .expect("meal should be found");
    assert_eq!(found.id, 1);
    assert_eq!(found.ingredients, ingredients(&["oats", "milk", "honey"]));

    // Case-insensitive lookup, and category scoping.
    assert!(catalog.find_by_name(Category::Breakfast, "OatMeal").is_some());
    assert!(catalog.find_by_name(Category::Dinner, "oatmeal").is_none());

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn ids_are_strictly_increasing() {
    let (pool, db_name) = create_test_db().await;
    let mut catalog = Catalog::load(pool.clone()).await.unwrap();

    let first = catalog
        .add(Category::Lunch, "soup", ingredients(&["water", "salt"]))
        .await
        .unwrap()
        .id;
    let second = catalog
        .add(Category::Lunch, "salad", ingredients(&["lettuce"]))
        .await
        .unwrap()
        .id;
    assert!(second > first);

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn ids_continue_across_a_catalog_reload() {
    let (pool, db_name) = create_test_db().await;

    let mut catalog = Catalog::load(pool.clone()).await.unwrap();
    catalog
        .add(Category::Dinner, "stew", ingredients(&["beef", "carrots"]))
        .await
        .unwrap();

    // Fresh process: a reloaded catalog must not reuse id 1.
    let mut reloaded = Catalog::load(pool.clone()).await.unwrap();
    let id = reloaded
        .add(Category::Dinner, "curry", ingredients(&["rice"]))
        .await
        .unwrap()
        .id;
    assert_eq!(id, 2);

    // The earlier meal survived the reload with its ingredients.
    let stew = reloaded
        .find_by_name(Category::Dinner, "stew")
        .expect("stew should be loaded");
    assert_eq!(stew.ingredients, ingredients(&["beef", "carrots"]));

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn duplicate_names_are_rejected_in_any_casing() {
    let (pool, db_name) = create_test_db().await;
    let mut catalog = Catalog::load(pool.clone()).await.unwrap();

    catalog
        .add(Category::Breakfast, "pancakes", ingredients(&["flour"]))
        .await
        .unwrap();

    let err = catalog
        .add(Category::Lunch, "Pancakes", ingredients(&["flour"]))
        .await
        .expect_err("duplicate should be rejected");
    assert!(matches!(
        err,
        CatalogError::Validation(ValidationError::DuplicateName(_))
    ));

    // The catalog is unchanged.
    assert_eq!(catalog.len(), 1);
    assert!(catalog.find_by_name(Category::Lunch, "pancakes").is_none());

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn malformed_input_is_rejected_without_side_effects() {
    let (pool, db_name) = create_test_db().await;
    let mut catalog = Catalog::load(pool.clone()).await.unwrap();

    let bad_name = catalog
        .add(Category::Lunch, "soup 2", ingredients(&["water"]))
        .await
        .expect_err("digits in the name should be rejected");
    assert!(matches!(
        bad_name,
        CatalogError::Validation(ValidationError::InvalidName(_))
    ));

    let bad_ingredient = catalog
        .add(Category::Lunch, "soup", ingredients(&["water", "salt!"]))
        .await
        .expect_err("punctuation in an ingredient should be rejected");
    assert!(matches!(
        bad_ingredient,
        CatalogError::Validation(ValidationError::InvalidIngredient(_))
    ));

    let no_ingredients = catalog
        .add(Category::Lunch, "soup", vec![])
        .await
        .expect_err("an empty ingredient list should be rejected");
    assert!(matches!(
        no_ingredients,
        CatalogError::Validation(ValidationError::EmptyIngredients)
    ));

    assert!(catalog.is_empty());

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn list_by_category_sorts_by_name() {
    let (pool, db_name) = create_test_db().await;
    let mut catalog = Catalog::load(pool.clone()).await.unwrap();

    catalog
        .add(Category::Breakfast, "toast", ingredients(&["bread", "butter"]))
        .await
        .unwrap();
    catalog
        .add(Category::Breakfast, "oatmeal", ingredients(&["oats", "milk"]))
        .await
        .unwrap();
    catalog
        .add(Category::Lunch, "soup", ingredients(&["water"]))
        .await
        .unwrap();

    let names: Vec<&str> = catalog
        .list_by_category(Category::Breakfast)
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, vec!["oatmeal", "toast"]);

    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn get_by_id_finds_loaded_and_added_meals() {
    let (pool, db_name) = create_test_db().await;
    let mut catalog = Catalog::load(pool.clone()).await.unwrap();

    catalog
        .add(Category::Dinner, "chili", ingredients(&["beans"]))
        .await
        .unwrap();

    assert_eq!(catalog.get_by_id(1).expect("id one should exist").name, "chili");
    assert!(catalog.get_by_id(99).is_none());

    drop_test_db(&db_name).await;
}
