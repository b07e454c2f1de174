// ABOUTME: Trait seam between the recipe pipeline and the upstream recipe service
// ABOUTME: Implemented by the Spoonacular client and by in-memory doubles in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

use crate::errors::AppResult;
use crate::recipes::models::{IngredientSuggestion, RecipeCandidate, RecipeId, RecipeInformation};
use async_trait::async_trait;

/// Upstream recipe service operations used by the pipeline
///
/// Implementations return typed errors; deciding whether a failure degrades
/// to an empty result is left to the caller.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Suggest ingredient names for partial input
    ///
    /// # Errors
    /// Returns an error if the request fails or the body cannot be decoded
    async fn autocomplete_ingredients(
        &self,
        query: &str,
        limit: u32,
    ) -> AppResult<Vec<IngredientSuggestion>>;

    /// Find recipes using the given ingredients, in the service's ranking order
    ///
    /// # Errors
    /// Returns an error if the request fails or the body cannot be decoded
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        limit: u32,
    ) -> AppResult<Vec<RecipeCandidate>>;

    /// Fetch full information for one recipe
    ///
    /// # Errors
    /// Returns an error if the request fails, the body cannot be decoded, or
    /// the returned recipe is not the one requested
    async fn recipe_information(&self, id: RecipeId) -> AppResult<RecipeInformation>;
}
