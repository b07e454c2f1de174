// ABOUTME: Debounced ingredient autocomplete with stale-response discarding
// ABOUTME: A generation counter keeps only the latest query's network response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

//! Ingredient autocomplete
//!
//! Every call to [`AutocompleteClient::suggest`] claims a new generation.
//! After the debounce window the call only proceeds to the network if no
//! newer call was made in the meantime, and its response is only returned
//! if it is still the latest once the request completes. Upstream failures
//! are logged and degrade to an empty list.

use crate::constants::spoonacular::{
    DEFAULT_AUTOCOMPLETE_DEBOUNCE_MS, DEFAULT_AUTOCOMPLETE_LIMIT,
    DEFAULT_AUTOCOMPLETE_MIN_QUERY_CHARS,
};
use crate::external::RecipeApi;
use crate::recipes::models::IngredientSuggestion;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Autocomplete tuning
#[derive(Debug, Clone)]
pub struct AutocompleteConfig {
    /// Quiet window before a query is sent
    pub debounce: Duration,
    /// Maximum number of suggestions returned
    pub limit: u32,
    /// Queries with fewer characters never reach the network
    pub min_query_chars: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_AUTOCOMPLETE_DEBOUNCE_MS),
            limit: DEFAULT_AUTOCOMPLETE_LIMIT,
            min_query_chars: DEFAULT_AUTOCOMPLETE_MIN_QUERY_CHARS,
        }
    }
}

/// Result of one autocomplete call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteOutcome {
    /// Suggestions for this query (empty on short queries and on failure)
    Suggestions(Vec<IngredientSuggestion>),
    /// A newer query replaced this one; nothing should be displayed for it
    Superseded,
}

impl AutocompleteOutcome {
    /// Suggestions, or `None` if the call was superseded
    #[must_use]
    pub fn into_suggestions(self) -> Option<Vec<IngredientSuggestion>> {
        match self {
            Self::Suggestions(suggestions) => Some(suggestions),
            Self::Superseded => None,
        }
    }

    /// Whether a newer query replaced this one
    #[must_use]
    pub const fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}

/// Debounced autocomplete client
pub struct AutocompleteClient {
    api: Arc<dyn RecipeApi>,
    config: AutocompleteConfig,
    generation: AtomicU64,
}

impl AutocompleteClient {
    /// Create a client over the given recipe API
    #[must_use]
    pub fn new(api: Arc<dyn RecipeApi>, config: AutocompleteConfig) -> Self {
        Self {
            api,
            config,
            generation: AtomicU64::new(0),
        }
    }

    /// Suggest ingredients for `query`
    ///
    /// The query is trimmed first. Short queries resolve immediately to an
    /// empty list. Longer ones wait out the debounce window and are dropped if
    /// a newer call arrives first.
    pub async fn suggest(&self, query: &str) -> AutocompleteOutcome {
        let generation = self.next_generation();
        let query = query.trim();

        if query.chars().count() < self.config.min_query_chars {
            return AutocompleteOutcome::Suggestions(Vec::new());
        }

        tokio::time::sleep(self.config.debounce).await;
        if !self.is_current(generation) {
            debug!(query = %query, generation, "Autocomplete query debounced away");
            return AutocompleteOutcome::Superseded;
        }

        let result = self
            .api
            .autocomplete_ingredients(query, self.config.limit)
            .await;

        // in-flight requests are not aborted, so a late response must be dropped here
        if !self.is_current(generation) {
            debug!(query = %query, generation, "Discarding stale autocomplete response");
            return AutocompleteOutcome::Superseded;
        }

        match result {
            Ok(mut suggestions) => {
                suggestions.truncate(self.config.limit as usize);
                AutocompleteOutcome::Suggestions(suggestions)
            }
            Err(e) => {
                warn!(query = %query, error = %e, "Ingredient autocomplete failed");
                AutocompleteOutcome::Suggestions(Vec::new())
            }
        }
    }

    /// Invalidate any pending or in-flight query (e.g. after the input was cleared)
    pub fn reset(&self) {
        self.next_generation();
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
