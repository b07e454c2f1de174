// ABOUTME: Spoonacular API endpoints, request limits and timing defaults
// ABOUTME: Shared by the HTTP client, the search pipeline and configuration loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

/// Default base URL of the Spoonacular REST API
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// CDN prefix for ingredient thumbnails returned by autocomplete
pub const INGREDIENT_IMAGE_CDN: &str = "https://spoonacular.com/cdn/ingredients_100x100/";

/// Ingredient autocomplete path
pub const AUTOCOMPLETE_PATH: &str = "/food/ingredients/autocomplete";

/// Recipe search by ingredients path
pub const FIND_BY_INGREDIENTS_PATH: &str = "/recipes/findByIngredients";

/// Maximum number of candidates requested from the search stage
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Maximum number of suggestions returned by autocomplete
pub const DEFAULT_AUTOCOMPLETE_LIMIT: u32 = 5;

/// Quiet window before an autocomplete query is sent
pub const DEFAULT_AUTOCOMPLETE_DEBOUNCE_MS: u64 = 300;

/// Queries shorter than this never reach the network
pub const DEFAULT_AUTOCOMPLETE_MIN_QUERY_CHARS: usize = 2;

/// HTTP request timeout
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// `ranking=1` asks the service to maximize used ingredients
pub const RANKING_MAXIMIZE_USED: u8 = 1;
