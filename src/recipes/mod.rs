// ABOUTME: Recipe module: models, two-stage search, filter engine and feed
// ABOUTME: Turns an ingredient set into a filtered list of enriched recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

/// Search re-run driver and published snapshots
pub mod feed;

/// Dietary restriction and meal type filtering
pub mod filter;

/// Recipe and ingredient suggestion models
pub mod models;

/// Two-stage search client
pub mod search;

pub use feed::{FeedSnapshot, FeedStatus, RecipeFeed};
pub use filter::{filter_recipes, DietaryRestriction, FilterCriteria, UnbackedRestrictionPolicy};
pub use models::{
    DietaryFlags, IngredientSuggestion, RecipeCandidate, RecipeDetail, RecipeId,
    RecipeInformation, RecipeView, ViewIngredient,
};
pub use search::{EnrichmentPolicy, RecipeSearchClient, SearchConfig};
