// ABOUTME: Ingredient management module: session ingredient set and autocomplete
// ABOUTME: The set feeds recipe search; autocomplete feeds the set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

/// Debounced ingredient autocomplete
pub mod autocomplete;

/// Ingredient set and its single-writer manager
pub mod set;

pub use autocomplete::{AutocompleteClient, AutocompleteConfig, AutocompleteOutcome};
pub use set::{normalize_ingredient, IngredientSet, IngredientSetManager};
