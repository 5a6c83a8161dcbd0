// ABOUTME: Integration tests for the SQLite ingredient store
// ABOUTME: Covers seeding, filtering, search, id lookup, category summaries, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bakebase::database::Database;
use bakebase::models::{IngredientCategory, IngredientRecord};
use bakebase::seed::{bundled_ingredients, seed_ingredients};
use bakebase::store::{IngredientFilter, IngredientStore};
use uuid::Uuid;

#[tokio::test]
async fn test_seed_assigns_uuid_ids() {
    let database = common::create_test_database().await.unwrap();
    let expected = bundled_ingredients().unwrap().len();

    let inserted = seed_ingredients(&database, false).await.unwrap();
    assert_eq!(inserted, expected);
    assert_eq!(database.count_ingredients().await.unwrap(), expected as u64);

    let records = database
        .list_ingredients(&IngredientFilter::default())
        .await
        .unwrap();
    assert!(records.iter().all(|r| Uuid::parse_str(&r.id).is_ok()));
}

#[tokio::test]
async fn test_reseed_replaces_existing_rows() {
    let database = common::create_seeded_database().await.unwrap();
    let before = database.count_ingredients().await.unwrap();

    seed_ingredients(&database, true).await.unwrap();
    assert_eq!(database.count_ingredients().await.unwrap(), before);
}

#[tokio::test]
async fn test_list_is_sorted_and_filterable() {
    let database = common::create_seeded_database().await.unwrap();

    let all = database
        .list_ingredients(&IngredientFilter::default())
        .await
        .unwrap();
    let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    let flours = database
        .list_ingredients(&IngredientFilter {
            category: Some(IngredientCategory::Flour),
            function: None,
        })
        .await
        .unwrap();
    assert_eq!(flours.len(), 10);
    assert!(flours.iter().all(|r| r.category == IngredientCategory::Flour));

    let emulsifiers = database
        .list_ingredients(&IngredientFilter {
            category: None,
            function: Some("EMULSI".to_owned()),
        })
        .await
        .unwrap();
    assert!(!emulsifiers.is_empty());
    assert!(emulsifiers
        .iter()
        .all(|r| r.primary_function.to_lowercase().contains("emulsi")));
}

#[tokio::test]
async fn test_search_matches_name_and_function() {
    let database = common::create_seeded_database().await.unwrap();

    let yeast = database.search_ingredients("yeast").await.unwrap();
    assert!(yeast.iter().any(|r| r.name == "Instant Yeast"));
    assert!(yeast.iter().any(|r| r.name == "Active Dry Yeast"));

    let none = database.search_ingredients("zzz-unmatched").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_get_by_id_and_ids() {
    let database = common::create_seeded_database().await.unwrap();
    let flour_id = common::ingredient_id(&database, "Bread Flour").await.unwrap();
    let water_id = common::ingredient_id(&database, "Water").await.unwrap();

    let flour = database.get_ingredient(&flour_id).await.unwrap().unwrap();
    assert_eq!(flour.name, "Bread Flour");
    assert!(flour.gluten_forming);
    assert!(database.get_ingredient("missing").await.unwrap().is_none());

    let found = database
        .get_ingredients_by_ids(&[flour_id, water_id, "missing".to_owned()])
        .await
        .unwrap();
    assert_eq!(found.len(), 2);
    assert!(database.get_ingredients_by_ids(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_category_summaries() {
    let database = common::create_seeded_database().await.unwrap();
    let summaries = database.category_summaries().await.unwrap();

    assert_eq!(summaries.len(), 13);
    let total: usize = summaries.iter().map(|s| s.count).sum();
    assert_eq!(total as u64, database.count_ingredients().await.unwrap());

    let flour = summaries
        .iter()
        .find(|s| s.category == IngredientCategory::Flour)
        .unwrap();
    assert_eq!(flour.count, 10);
    assert_eq!(flour.examples.len(), 5);
}

#[tokio::test]
async fn test_clear_and_reject_invalid_records() {
    let database = common::create_seeded_database().await.unwrap();
    database.clear_ingredients().await.unwrap();
    assert_eq!(database.count_ingredients().await.unwrap(), 0);

    let invalid = IngredientRecord::new("", "Impossible Flour", IngredientCategory::Flour)
        .with_composition(80.0, 40.0, 0.0, 0.0, 120.0);
    assert!(database.insert_ingredient(&invalid).await.is_err());
    assert_eq!(database.count_ingredients().await.unwrap(), 0);

    let valid = IngredientRecord::new("", "Test Flour", IngredientCategory::Flour)
        .with_composition(12.0, 11.0, 1.0, 70.0, 0.5);
    let id = database.insert_ingredient(&valid).await.unwrap();
    assert!(Uuid::parse_str(&id).is_ok());
    assert_eq!(database.count_ingredients().await.unwrap(), 1);
}

#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("bakebase.db");
    let url = format!("sqlite:{}", path.display());

    {
        let database = Database::new(&url).await.unwrap();
        seed_ingredients(&database, false).await.unwrap();
        database.pool().close().await;
    }

    let reopened = Database::new(&url).await.unwrap();
    let expected = bundled_ingredients().unwrap().len() as u64;
    assert_eq!(reopened.count_ingredients().await.unwrap(), expected);
}
