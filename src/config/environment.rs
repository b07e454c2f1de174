// ABOUTME: Top-level application configuration assembled from environment variables
// ABOUTME: Groups the upstream client, search, autocomplete and filter policy settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

//! Environment-based configuration

use crate::config::api_providers;
use crate::external::SpoonacularClientConfig;
use crate::ingredients::AutocompleteConfig;
use crate::recipes::{SearchConfig, UnbackedRestrictionPolicy};
use tracing::{info, warn};

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Upstream recipe API client
    pub spoonacular: SpoonacularClientConfig,
    /// Two-stage search
    pub search: SearchConfig,
    /// Ingredient autocomplete
    pub autocomplete: AutocompleteConfig,
    /// Evaluation of restrictions without a backing dietary flag
    pub unbacked_restrictions: UnbackedRestrictionPolicy,
}

impl AppConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            spoonacular: api_providers::spoonacular_from_env(),
            search: api_providers::search_from_env(),
            autocomplete: api_providers::autocomplete_from_env(),
            unbacked_restrictions: api_providers::unbacked_restrictions_from_env(),
        }
    }

    /// Whether an API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.spoonacular.api_key.is_empty()
    }

    /// Log a configuration summary; the API key itself is never logged
    pub fn log_summary(&self) {
        if !self.has_api_key() {
            warn!("SPOONACULAR_API_KEY is not set");
        }

        info!(
            spoonacular.base_url = %self.spoonacular.base_url,
            spoonacular.timeout_secs = self.spoonacular.timeout_secs,
            search.result_limit = self.search.result_limit,
            search.enrichment_policy = ?self.search.enrichment_policy,
            autocomplete.debounce_ms = self.autocomplete.debounce.as_millis() as u64,
            autocomplete.limit = self.autocomplete.limit,
            filter.unbacked_policy = ?self.unbacked_restrictions,
            "Configuration loaded"
        );
    }
}
