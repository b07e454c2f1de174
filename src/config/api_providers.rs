// ABOUTME: Spoonacular, search and autocomplete configuration loaded from the environment
// ABOUTME: Unset or unparseable values fall back to the defaults in fridge-core constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

use crate::constants::spoonacular::{
    DEFAULT_AUTOCOMPLETE_DEBOUNCE_MS, DEFAULT_AUTOCOMPLETE_LIMIT,
    DEFAULT_AUTOCOMPLETE_MIN_QUERY_CHARS, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SEARCH_LIMIT,
};
use crate::external::SpoonacularClientConfig;
use crate::ingredients::AutocompleteConfig;
use crate::recipes::{EnrichmentPolicy, SearchConfig, UnbackedRestrictionPolicy};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Load the Spoonacular client configuration
///
/// A missing `SPOONACULAR_API_KEY` is not an error; requests will be
/// rejected upstream.
#[must_use]
pub fn spoonacular_from_env() -> SpoonacularClientConfig {
    SpoonacularClientConfig {
        api_key: env::var("SPOONACULAR_API_KEY").unwrap_or_default(),
        base_url: env_var_or("SPOONACULAR_BASE_URL", DEFAULT_BASE_URL),
        timeout_secs: env_parse_or("SPOONACULAR_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
    }
}

/// Load the search configuration
#[must_use]
pub fn search_from_env() -> SearchConfig {
    SearchConfig {
        result_limit: env_parse_or("RECIPE_SEARCH_LIMIT", DEFAULT_SEARCH_LIMIT),
        enrichment_policy: env_parse_or("RECIPE_ENRICHMENT_POLICY", EnrichmentPolicy::default()),
    }
}

/// Load the autocomplete configuration
#[must_use]
pub fn autocomplete_from_env() -> AutocompleteConfig {
    AutocompleteConfig {
        debounce: Duration::from_millis(env_parse_or(
            "AUTOCOMPLETE_DEBOUNCE_MS",
            DEFAULT_AUTOCOMPLETE_DEBOUNCE_MS,
        )),
        limit: env_parse_or("AUTOCOMPLETE_LIMIT", DEFAULT_AUTOCOMPLETE_LIMIT),
        min_query_chars: env_parse_or(
            "AUTOCOMPLETE_MIN_QUERY_CHARS",
            DEFAULT_AUTOCOMPLETE_MIN_QUERY_CHARS,
        ),
    }
}

/// Load the policy for restrictions without a backing dietary flag
#[must_use]
pub fn unbacked_restrictions_from_env() -> UnbackedRestrictionPolicy {
    env_parse_or(
        "UNBACKED_RESTRICTION_POLICY",
        UnbackedRestrictionPolicy::default(),
    )
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse `key`, logging and falling back to `default` when the value is invalid
fn env_parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!(variable = key, value = %raw, error = %e, "Invalid configuration value; using default");
            default
        }),
        Err(_) => default,
    }
}
