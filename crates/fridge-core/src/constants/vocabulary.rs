// ABOUTME: Display vocabularies for the recipe filter toggles
// ABOUTME: Dietary restriction labels and meal type labels offered to users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

/// Dietary restriction labels, in display order
pub const DIETARY_RESTRICTIONS: [&str; 6] = [
    "Vegetarian",
    "Vegan",
    "Gluten Free",
    "Ketogenic",
    "Paleo",
    "Pescetarian",
];

/// Meal type labels, in display order
pub const MEAL_TYPES: [&str; 7] = [
    "Breakfast",
    "Lunch",
    "Dinner",
    "Appetizer",
    "Salad",
    "Dessert",
    "Snack",
];
