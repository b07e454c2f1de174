// ABOUTME: Integration tests for dietary and meal type recipe filtering
// ABOUTME: Verifies AND semantics for restrictions and OR substring semantics for meal types
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

mod common;

use common::{detail, vegetarian};
use fridge_to_table::recipes::{
    filter_recipes, DietaryFlags, DietaryRestriction, FilterCriteria, RecipeDetail,
    UnbackedRestrictionPolicy,
};

fn ids(recipes: &[RecipeDetail]) -> Vec<u64> {
    recipes.iter().map(RecipeDetail::id).collect()
}

fn vegan_gluten_free() -> DietaryFlags {
    DietaryFlags {
        vegetarian: true,
        vegan: true,
        gluten_free: true,
        ..DietaryFlags::default()
    }
}

#[test]
fn test_empty_criteria_passes_everything_in_order() {
    let recipes = vec![
        detail(3, DietaryFlags::default(), &["dinner"]),
        detail(1, vegetarian(), &[]),
        detail(2, vegan_gluten_free(), &["dessert"]),
    ];

    let filtered = filter_recipes(&recipes, &FilterCriteria::default());
    assert_eq!(filtered, recipes);
}

#[test]
fn test_dietary_restrictions_combine_with_and() {
    let recipes = vec![
        detail(1, vegetarian(), &["lunch"]),
        detail(2, vegan_gluten_free(), &["lunch"]),
        detail(
            3,
            DietaryFlags {
                gluten_free: true,
                ..DietaryFlags::default()
            },
            &["lunch"],
        ),
    ];

    let criteria = FilterCriteria::default()
        .with_restriction("Vegetarian")
        .with_restriction("Gluten Free");
    assert_eq!(ids(&filter_recipes(&recipes, &criteria)), vec![2]);
}

#[test]
fn test_meal_types_match_any_by_substring() {
    let recipes = vec![
        detail(1, vegetarian(), &["sweet dessert"]),
        detail(2, vegetarian(), &["main course", "dinner"]),
        detail(3, vegetarian(), &["Breakfast"]),
        detail(4, vegetarian(), &[]),
    ];

    let criteria = FilterCriteria::default()
        .with_meal_type("Dessert")
        .with_meal_type("breakfast");
    assert_eq!(ids(&filter_recipes(&recipes, &criteria)), vec![1, 3]);
}

#[test]
fn test_dietary_and_meal_type_both_required() {
    let recipes = vec![
        detail(1, vegetarian(), &["dinner"]),
        detail(2, DietaryFlags::default(), &["dessert"]),
        detail(3, vegetarian(), &["dessert"]),
    ];

    let criteria = FilterCriteria::default()
        .with_restriction(DietaryRestriction::Vegetarian)
        .with_meal_type("Dessert");
    assert_eq!(ids(&filter_recipes(&recipes, &criteria)), vec![3]);
}

#[test]
fn test_unbacked_restrictions_follow_policy() {
    let recipes = vec![
        detail(1, vegetarian(), &["dinner"]),
        detail(2, DietaryFlags::default(), &["dinner"]),
    ];

    let permissive = FilterCriteria::default().with_restriction("Paleo");
    assert_eq!(ids(&filter_recipes(&recipes, &permissive)), vec![1, 2]);

    let strict = FilterCriteria::default()
        .with_restriction("Pescetarian")
        .with_unbacked_policy(UnbackedRestrictionPolicy::Strict);
    assert!(filter_recipes(&recipes, &strict).is_empty());
}

#[test]
fn test_unknown_restriction_tags_are_satisfied() {
    let recipes = vec![detail(1, DietaryFlags::default(), &["snack"])];

    let criteria = FilterCriteria::default()
        .with_restriction("Low FODMAP")
        .with_unbacked_policy(UnbackedRestrictionPolicy::Strict);
    assert_eq!(ids(&filter_recipes(&recipes, &criteria)), vec![1]);
}

#[test]
fn test_ketogenic_flag_is_used_when_classified() {
    let recipes = vec![
        detail(
            1,
            DietaryFlags {
                ketogenic: Some(true),
                ..DietaryFlags::default()
            },
            &[],
        ),
        detail(
            2,
            DietaryFlags {
                ketogenic: Some(false),
                ..DietaryFlags::default()
            },
            &[],
        ),
        detail(3, DietaryFlags::default(), &[]),
    ];

    let criteria = FilterCriteria::default().with_restriction("Ketogenic");
    assert_eq!(ids(&filter_recipes(&recipes, &criteria)), vec![1, 3]);

    let strict = criteria.with_unbacked_policy(UnbackedRestrictionPolicy::Strict);
    assert_eq!(ids(&filter_recipes(&recipes, &strict)), vec![1]);
}
