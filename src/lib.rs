// ABOUTME: Main library entry point for the Fridge-to-Table recipe finder
// ABOUTME: Ingredient-driven recipe search, dietary enrichment and client-side filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

#![deny(unsafe_code)]

//! # Fridge-to-Table
//!
//! Turns the ingredients a user has on hand into a filtered list of recipes.
//! Ingredient matching and dietary classification are delegated to the
//! Spoonacular API; this crate owns the pipeline around it.
//!
//! ## Architecture
//!
//! - **Ingredients**: the session's ingredient set (single writer) and a
//!   debounced autocomplete client
//! - **External**: the `RecipeApi` seam and its Spoonacular HTTP implementation
//! - **Recipes**: two-stage search with fan-out enrichment, the dietary /
//!   meal-type filter engine, and the feed that re-runs search on change
//! - **Config** / **Logging**: environment-driven setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fridge_to_table::config::AppConfig;
//! use fridge_to_table::external::SpoonacularClient;
//! use fridge_to_table::ingredients::IngredientSetManager;
//! use fridge_to_table::recipes::{filter_recipes, FilterCriteria, RecipeSearchClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env();
//! let api = Arc::new(SpoonacularClient::new(config.spoonacular.clone())?);
//! let search = RecipeSearchClient::new(api, config.search.clone());
//!
//! let ingredients = IngredientSetManager::new();
//! ingredients.add("chicken");
//! ingredients.add("rice");
//!
//! let recipes = search.search(&ingredients.snapshot()).await?;
//! let criteria = FilterCriteria::default().with_restriction("Gluten Free");
//! for recipe in filter_recipes(&recipes, &criteria) {
//!     println!("{}", recipe.candidate.title);
//! }
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants (re-exported from `fridge-core`)
pub mod constants;

/// Unified error handling (re-exported from `fridge-core`)
pub mod errors;

/// External recipe API seam and the Spoonacular client
pub mod external;

/// Ingredient set management and autocomplete
pub mod ingredients;

/// Structured logging setup
pub mod logging;

/// Recipe models, search pipeline, filtering and feed
pub mod recipes;
