// ABOUTME: Spoonacular API client for ingredient autocomplete and recipe lookup
// ABOUTME: Implements schema-validated decoding and upstream failure classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

//! Spoonacular API Client
//!
//! Thin typed client over three Spoonacular endpoints:
//! - ingredient autocomplete
//! - recipe search by ingredients
//! - recipe information by id
//!
//! Every response body is decoded into private wire structs first and then
//! converted into the crate's models. A body that does not fit the schema is
//! reported as [`ErrorCode::InvalidFormat`](crate::errors::ErrorCode), never
//! passed through. There is no caching, retry or rate limiting.
//!
//! # API Reference
//! <https://spoonacular.com/food-api/docs>
//!
//! # Example
//! ```rust,no_run
//! use fridge_to_table::external::{RecipeApi, SpoonacularClient, SpoonacularClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SpoonacularClientConfig {
//!     api_key: "your_api_key".to_owned(),
//!     ..SpoonacularClientConfig::default()
//! };
//!
//! let client = SpoonacularClient::new(config)?;
//! let suggestions = client.autocomplete_ingredients("tom", 5).await?;
//! # Ok(())
//! # }
//! ```

use crate::constants::service_names::SPOONACULAR_API;
use crate::constants::spoonacular::{
    AUTOCOMPLETE_PATH, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, FIND_BY_INGREDIENTS_PATH,
    RANKING_MAXIMIZE_USED,
};
use crate::errors::{AppError, AppResult};
use crate::external::recipe_api::RecipeApi;
use crate::logging::AppLogger;
use crate::recipes::models::{
    DietaryFlags, IngredientSuggestion, RecipeCandidate, RecipeId, RecipeInformation,
    ViewIngredient,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::warn;

/// Spoonacular client configuration
#[derive(Debug, Clone)]
pub struct SpoonacularClientConfig {
    /// API key sent as the `apiKey` query parameter
    pub api_key: String,
    /// Base URL (default: <https://api.spoonacular.com>)
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SpoonacularClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Autocomplete entry
#[derive(Debug, Deserialize)]
struct AutocompleteEntry {
    name: String,
    #[serde(default)]
    image: Option<String>,
}

/// Search-by-ingredients entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidateResponse {
    id: RecipeId,
    title: String,
    #[serde(default)]
    image: Option<String>,
    used_ingredient_count: u32,
    missed_ingredient_count: u32,
    #[serde(default)]
    missed_ingredients: Vec<NamedIngredient>,
}

#[derive(Debug, Deserialize)]
struct NamedIngredient {
    name: String,
}

/// Recipe information response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InformationResponse {
    id: RecipeId,
    title: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    vegetarian: bool,
    #[serde(default)]
    vegan: bool,
    #[serde(default)]
    gluten_free: bool,
    #[serde(default)]
    dairy_free: bool,
    #[serde(default)]
    ketogenic: Option<bool>,
    #[serde(default)]
    dish_types: Vec<String>,
    #[serde(default)]
    instructions: Option<String>,
    #[serde(default)]
    extended_ingredients: Vec<ExtendedIngredient>,
}

#[derive(Debug, Deserialize)]
struct ExtendedIngredient {
    name: String,
    #[serde(default)]
    amount: f64,
    #[serde(default)]
    unit: String,
}

impl From<CandidateResponse> for RecipeCandidate {
    fn from(response: CandidateResponse) -> Self {
        Self {
            id: response.id,
            title: response.title,
            image: response.image.unwrap_or_default(),
            used_ingredient_count: response.used_ingredient_count,
            missed_ingredient_count: response.missed_ingredient_count,
            missed_ingredients: response
                .missed_ingredients
                .into_iter()
                .map(|ingredient| ingredient.name)
                .collect(),
        }
    }
}

impl From<InformationResponse> for RecipeInformation {
    fn from(response: InformationResponse) -> Self {
        Self {
            id: response.id,
            title: response.title,
            image: response.image,
            dietary: DietaryFlags {
                vegetarian: response.vegetarian,
                vegan: response.vegan,
                gluten_free: response.gluten_free,
                dairy_free: response.dairy_free,
                ketogenic: response.ketogenic,
            },
            dish_types: response.dish_types,
            instructions: response.instructions.unwrap_or_default(),
            ingredients: response
                .extended_ingredients
                .into_iter()
                .map(|ingredient| ViewIngredient {
                    name: ingredient.name,
                    amount: ingredient.amount,
                    unit: ingredient.unit,
                })
                .collect(),
        }
    }
}

/// Spoonacular API client
pub struct SpoonacularClient {
    config: SpoonacularClientConfig,
    http_client: reqwest::Client,
}

impl SpoonacularClient {
    /// Create a new Spoonacular client
    ///
    /// # Errors
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn new(config: SpoonacularClientConfig) -> AppResult<Self> {
        if config.api_key.is_empty() {
            warn!("Spoonacular API key is not set; upstream requests will be rejected");
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AppError::config(format!("Failed to build HTTP client: {e}")).with_source(e)
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Client configuration
    #[must_use]
    pub const fn config(&self) -> &SpoonacularClientConfig {
        &self.config
    }

    /// Issue a GET request and decode the JSON body into `T`
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        let started = Instant::now();

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                AppLogger::log_upstream_request(endpoint, None, elapsed_ms(started), false);
                // the request URL carries the API key
                let e = e.without_url();
                AppError::external_unavailable(SPOONACULAR_API, e.to_string()).with_source(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            AppLogger::log_upstream_request(
                endpoint,
                Some(status.as_u16()),
                elapsed_ms(started),
                false,
            );
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::upstream_status(
                SPOONACULAR_API,
                status.as_u16(),
                &body,
            ));
        }

        let body = response.bytes().await.map_err(|e| {
            let e = e.without_url();
            AppError::external_unavailable(SPOONACULAR_API, format!("Failed to read body: {e}"))
                .with_source(e)
        })?;

        let decoded = decode_body(&body);
        AppLogger::log_upstream_request(
            endpoint,
            Some(status.as_u16()),
            elapsed_ms(started),
            decoded.is_ok(),
        );
        decoded
    }
}

#[async_trait]
impl RecipeApi for SpoonacularClient {
    async fn autocomplete_ingredients(
        &self,
        query: &str,
        limit: u32,
    ) -> AppResult<Vec<IngredientSuggestion>> {
        if query.trim().is_empty() {
            return Err(AppError::invalid_input("Autocomplete query cannot be empty"));
        }

        let entries: Vec<AutocompleteEntry> = self
            .get_json(
                "ingredient_autocomplete",
                AUTOCOMPLETE_PATH,
                &[("query", query.to_owned()), ("number", limit.to_string())],
            )
            .await?;

        Ok(entries
            .into_iter()
            .take(limit as usize)
            .map(|entry| IngredientSuggestion {
                name: entry.name,
                image: entry.image.unwrap_or_default(),
            })
            .collect())
    }

    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        limit: u32,
    ) -> AppResult<Vec<RecipeCandidate>> {
        if ingredients.is_empty() {
            return Err(AppError::invalid_input(
                "At least one ingredient is required to search recipes",
            ));
        }

        let candidates: Vec<CandidateResponse> = self
            .get_json(
                "find_by_ingredients",
                FIND_BY_INGREDIENTS_PATH,
                &[
                    ("ingredients", ingredients.join(",")),
                    ("number", limit.to_string()),
                    ("ranking", RANKING_MAXIMIZE_USED.to_string()),
                    ("ignorePantry", "true".to_owned()),
                ],
            )
            .await?;

        Ok(candidates.into_iter().map(RecipeCandidate::from).collect())
    }

    async fn recipe_information(&self, id: RecipeId) -> AppResult<RecipeInformation> {
        let response: InformationResponse = self
            .get_json(
                "recipe_information",
                &format!("/recipes/{id}/information"),
                &[],
            )
            .await
            .map_err(|e| e.with_resource_id(id.to_string()))?;

        if response.id != id {
            return Err(AppError::decode(
                SPOONACULAR_API,
                format!("Requested recipe {id} but received recipe {}", response.id),
            )
            .with_resource_id(id.to_string()));
        }

        Ok(RecipeInformation::from(response))
    }
}

/// Schema-validated decode of a response body
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        AppError::decode(SPOONACULAR_API, format!("JSON parse error: {e}")).with_source(e)
    })
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
