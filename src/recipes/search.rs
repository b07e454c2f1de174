// ABOUTME: Two-stage recipe search: find candidates by ingredients, then enrich each one
// ABOUTME: Enrichment fans out concurrently and merges results back by recipe id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

//! Recipe Search Client
//!
//! Stage 1 asks the upstream service for recipes that use the selected
//! ingredients. Stage 2 issues one detail request per candidate, all
//! concurrently, and waits for the whole batch. Results are matched back to
//! candidates by id, so the merged list follows the stage-1 order whatever
//! order the detail responses arrive in.

use crate::constants::spoonacular::DEFAULT_SEARCH_LIMIT;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::external::RecipeApi;
use crate::ingredients::IngredientSet;
use crate::recipes::models::{RecipeCandidate, RecipeDetail, RecipeId, RecipeInformation, RecipeView};
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// What to do when some enrichment requests fail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentPolicy {
    /// Any failed detail request fails the whole search
    #[default]
    AllOrNothing,
    /// Failed entries are logged and dropped from the result
    BestEffort,
}

impl FromStr for EnrichmentPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "all_or_nothing" => Ok(Self::AllOrNothing),
            "best_effort" => Ok(Self::BestEffort),
            other => Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Unknown enrichment policy '{other}'"),
            )),
        }
    }
}

/// Search tuning
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of candidates requested in stage 1
    pub result_limit: u32,
    /// Partial-failure handling for stage 2
    pub enrichment_policy: EnrichmentPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_SEARCH_LIMIT,
            enrichment_policy: EnrichmentPolicy::default(),
        }
    }
}

/// Recipe search over the upstream recipe API
#[derive(Clone)]
pub struct RecipeSearchClient {
    api: Arc<dyn RecipeApi>,
    config: SearchConfig,
}

impl RecipeSearchClient {
    /// Create a search client
    #[must_use]
    pub fn new(api: Arc<dyn RecipeApi>, config: SearchConfig) -> Self {
        Self { api, config }
    }

    /// Search configuration
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run both stages for the given ingredients
    ///
    /// An empty set returns an empty list without any request.
    ///
    /// # Errors
    /// Returns an error if stage 1 fails, or if stage 2 fails under
    /// [`EnrichmentPolicy::AllOrNothing`]
    pub async fn search(&self, ingredients: &IngredientSet) -> AppResult<Vec<RecipeDetail>> {
        if ingredients.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self.find_candidates(ingredients).await?;
        let candidate_count = candidates.len();
        let details = self.enrich(candidates).await?;

        info!(
            ingredients = ingredients.len(),
            candidates = candidate_count,
            enriched = details.len(),
            "Recipe search completed"
        );
        Ok(details)
    }

    /// Stage 1: candidates in the service's ranking order, first occurrence of each id kept
    ///
    /// # Errors
    /// Returns an error if the upstream request fails
    pub async fn find_candidates(
        &self,
        ingredients: &IngredientSet,
    ) -> AppResult<Vec<RecipeCandidate>> {
        if ingredients.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self
            .api
            .find_by_ingredients(ingredients.as_slice(), self.config.result_limit)
            .await?;

        let mut seen = HashSet::with_capacity(candidates.len());
        Ok(candidates
            .into_iter()
            .filter(|candidate| seen.insert(candidate.id))
            .collect())
    }

    /// Stage 2: fetch details for every candidate concurrently and merge by id
    ///
    /// # Errors
    /// Under [`EnrichmentPolicy::AllOrNothing`], returns the first failure in
    /// candidate order
    pub async fn enrich(&self, candidates: Vec<RecipeCandidate>) -> AppResult<Vec<RecipeDetail>> {
        let api = &self.api;
        let lookups = candidates.iter().map(|candidate| {
            let id = candidate.id;
            async move { (id, api.recipe_information(id).await) }
        });
        let responses = join_all(lookups).await;

        let mut information: HashMap<RecipeId, RecipeInformation> =
            HashMap::with_capacity(responses.len());
        for (id, result) in responses {
            match result {
                Ok(info) => {
                    information.insert(id, info);
                }
                Err(e) => match self.config.enrichment_policy {
                    EnrichmentPolicy::AllOrNothing => {
                        warn!(recipe.id = id, error = %e, "Recipe enrichment failed; failing search");
                        return Err(e);
                    }
                    EnrichmentPolicy::BestEffort => {
                        warn!(recipe.id = id, error = %e, "Recipe enrichment failed; dropping recipe");
                    }
                },
            }
        }

        Ok(candidates
            .into_iter()
            .filter_map(|candidate| {
                let info = information.remove(&candidate.id)?;
                Some(RecipeDetail::from_parts(candidate, info))
            })
            .collect())
    }

    /// Standalone recipe page for `id`
    ///
    /// # Errors
    /// Returns an error if the upstream request fails or the recipe is unknown
    pub async fn recipe_view(&self, id: RecipeId) -> AppResult<RecipeView> {
        self.api.recipe_information(id).await.map(RecipeView::from)
    }
}
