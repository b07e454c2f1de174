// ABOUTME: Integration tests for the session ingredient set
// ABOUTME: Covers normalization, idempotent add, exact remove, clear and change notification
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

use fridge_to_table::ingredients::{normalize_ingredient, IngredientSet, IngredientSetManager};

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_normalize_trims_and_title_cases() {
    assert_eq!(
        normalize_ingredient(" chicken BREAST ").as_deref(),
        Some("Chicken Breast")
    );
    assert_eq!(normalize_ingredient("rice").as_deref(), Some("Rice"));
    assert_eq!(normalize_ingredient("   "), None);
    assert_eq!(normalize_ingredient(""), None);
}

#[test]
fn test_set_from_iter_dedupes_after_normalization() {
    let set: IngredientSet = ["rice", "RICE", " Rice ", "eggs"].into_iter().collect();
    assert_eq!(set.as_slice(), ["Rice", "Eggs"]);
}

// ============================================================================
// Manager operations
// ============================================================================

#[test]
fn test_add_is_idempotent_and_keeps_insertion_order() {
    let manager = IngredientSetManager::new();

    assert!(manager.add("chicken"));
    assert!(manager.add("rice"));
    assert!(!manager.add("Chicken"));
    assert!(!manager.add("  CHICKEN "));

    let set = manager.snapshot();
    assert_eq!(set.as_slice(), ["Chicken", "Rice"]);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_blank_add_is_ignored() {
    let manager = IngredientSetManager::new();
    assert!(!manager.add("   "));
    assert!(manager.snapshot().is_empty());
}

#[test]
fn test_remove_requires_stored_form() {
    let manager = IngredientSetManager::new();
    manager.add("chicken breast");

    assert!(!manager.remove("chicken breast"));
    assert!(!manager.remove("Tofu"));
    assert!(manager.snapshot().contains("Chicken Breast"));

    assert!(manager.remove("Chicken Breast"));
    assert!(manager.snapshot().is_empty());
}

#[test]
fn test_clear_empties_the_set() {
    let manager = IngredientSetManager::new();
    assert!(!manager.clear());

    manager.add("eggs");
    manager.add("flour");
    assert!(manager.clear());
    assert!(manager.snapshot().is_empty());
}

// ============================================================================
// Change notification
// ============================================================================

#[tokio::test]
async fn test_subscribers_see_only_effective_changes() {
    let manager = IngredientSetManager::new();
    let mut receiver = manager.subscribe();
    assert!(!receiver.has_changed().unwrap());

    manager.add("rice");
    assert!(receiver.has_changed().unwrap());
    assert_eq!(receiver.borrow_and_update().as_slice(), ["Rice"]);

    manager.add("Rice");
    manager.remove("Tofu");
    assert!(!receiver.has_changed().unwrap());

    manager.clear();
    receiver.changed().await.unwrap();
    assert!(receiver.borrow_and_update().is_empty());
}

#[tokio::test]
async fn test_receiver_closes_when_manager_dropped() {
    let manager = IngredientSetManager::new();
    let mut receiver = manager.subscribe();
    drop(manager);
    assert!(receiver.changed().await.is_err());
}
