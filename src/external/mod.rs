// ABOUTME: External recipe API modules (Spoonacular)
// ABOUTME: Defines the RecipeApi seam and its HTTP implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

//! External API Clients
//!
//! The pipeline talks to the upstream recipe service only through
//! [`RecipeApi`], so tests can substitute an in-memory implementation.

/// Trait abstracting the upstream recipe service
pub mod recipe_api;

/// Spoonacular HTTP client
pub mod spoonacular_client;

// Re-export commonly used types
pub use recipe_api::RecipeApi;
pub use spoonacular_client::{SpoonacularClient, SpoonacularClientConfig};
