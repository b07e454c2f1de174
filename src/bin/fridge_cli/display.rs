// ABOUTME: Output formatting helpers for fridge-cli
// ABOUTME: Renders suggestions, recipe cards and the standalone recipe view as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

use fridge_to_table::constants::vocabulary::{DIETARY_RESTRICTIONS, MEAL_TYPES};
use fridge_to_table::recipes::{IngredientSuggestion, RecipeDetail, RecipeView};
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display autocomplete suggestions, one per line
pub fn display_suggestions(suggestions: &[IngredientSuggestion]) {
    if suggestions.is_empty() {
        println!("No suggestions.");
        return;
    }
    for suggestion in suggestions {
        match suggestion.image_url() {
            Some(url) => println!("  {:<30} {url}", suggestion.name),
            None => println!("  {}", suggestion.name),
        }
    }
}

/// Display recipe cards with ingredient usage and dietary badges
pub fn display_recipes(recipes: &[RecipeDetail], total: usize) {
    println!("\nRecipes ({} of {total})", recipes.len());
    println!("{}", "=".repeat(80));

    for recipe in recipes {
        let candidate = &recipe.candidate;
        println!("[{}] {}", recipe.id(), candidate.title);
        println!(
            "   Used Ingredients: {} | Missing: {}",
            candidate.used_ingredient_count, candidate.missed_ingredient_count
        );
        if !candidate.missed_ingredients.is_empty() {
            println!("   Missing: {}", candidate.missed_ingredients.join(", "));
        }
        let badges = recipe.dietary.badges();
        if !badges.is_empty() {
            println!("   Diet: {}", badges.join(" · "));
        }
        if !recipe.dish_types.is_empty() {
            println!("   Dish types: {}", recipe.dish_types.join(", "));
        }
    }
}

/// Display the standalone recipe page
pub fn display_recipe_view(view: &RecipeView) {
    println!("\n{}", view.title);
    println!("{}", "=".repeat(80));
    if let Some(image) = &view.image {
        println!("Image: {image}");
    }

    println!("\nIngredients:");
    for ingredient in &view.ingredients {
        println!("  • {} - {} {}", ingredient.name, ingredient.amount, ingredient.unit);
    }

    println!("\nInstructions:");
    if view.instructions.is_empty() {
        println!("  (none provided)");
    } else {
        println!("{}", view.instructions);
    }
}

/// Display the selectable filter labels
pub fn display_filters() {
    println!("Dietary restrictions (all must hold):");
    for label in DIETARY_RESTRICTIONS {
        println!("  {label}");
    }
    println!("\nMeal types (any may match):");
    for label in MEAL_TYPES {
        println!("  {label}");
    }
}
