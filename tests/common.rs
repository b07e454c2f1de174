// ABOUTME: Shared test utilities for the integration tests
// ABOUTME: Provides a scriptable in-memory RecipeApi and recipe fixture builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `fridge_to_table`

use async_trait::async_trait;
use fridge_to_table::errors::{AppError, AppResult};
use fridge_to_table::external::RecipeApi;
use fridge_to_table::recipes::{
    DietaryFlags, IngredientSuggestion, RecipeCandidate, RecipeDetail, RecipeId,
    RecipeInformation, ViewIngredient,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// In-memory recipe API with canned responses, delays and failures
#[derive(Default)]
pub struct MockRecipeApi {
    suggestions: Vec<IngredientSuggestion>,
    autocomplete_delay: Duration,
    autocomplete_fails: bool,
    candidates: Vec<RecipeCandidate>,
    search_fails: bool,
    information: HashMap<RecipeId, RecipeInformation>,
    information_delays: HashMap<RecipeId, Duration>,
    failing_ids: Mutex<HashSet<RecipeId>>,
    autocomplete_queries: Mutex<Vec<String>>,
    search_requests: Mutex<Vec<Vec<String>>>,
    information_calls: AtomicUsize,
}

impl MockRecipeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suggestions(mut self, names: &[&str]) -> Self {
        self.suggestions = names
            .iter()
            .map(|name| IngredientSuggestion {
                name: (*name).to_owned(),
                image: format!("{}.jpg", name.replace(' ', "-")),
            })
            .collect();
        self
    }

    pub const fn with_autocomplete_delay(mut self, delay: Duration) -> Self {
        self.autocomplete_delay = delay;
        self
    }

    pub const fn with_failing_autocomplete(mut self) -> Self {
        self.autocomplete_fails = true;
        self
    }

    pub fn with_candidates(mut self, candidates: Vec<RecipeCandidate>) -> Self {
        self.candidates = candidates;
        self
    }

    pub const fn with_failing_search(mut self) -> Self {
        self.search_fails = true;
        self
    }

    pub fn with_information(mut self, information: RecipeInformation) -> Self {
        self.information.insert(information.id, information);
        self
    }

    pub fn with_information_delay(mut self, id: RecipeId, delay: Duration) -> Self {
        self.information_delays.insert(id, delay);
        self
    }

    pub fn with_failing_information(self, id: RecipeId) -> Self {
        self.fail_information(id);
        self
    }

    /// Make detail lookups for `id` fail from now on
    pub fn fail_information(&self, id: RecipeId) {
        self.failing_ids.lock().unwrap().insert(id);
    }

    /// Queries that reached the autocomplete endpoint, in call order
    pub fn autocomplete_queries(&self) -> Vec<String> {
        self.autocomplete_queries.lock().unwrap().clone()
    }

    /// Ingredient lists sent to the search endpoint, in call order
    pub fn search_requests(&self) -> Vec<Vec<String>> {
        self.search_requests.lock().unwrap().clone()
    }

    pub fn information_calls(&self) -> usize {
        self.information_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeApi for MockRecipeApi {
    async fn autocomplete_ingredients(
        &self,
        query: &str,
        limit: u32,
    ) -> AppResult<Vec<IngredientSuggestion>> {
        self.autocomplete_queries
            .lock()
            .unwrap()
            .push(query.to_owned());

        if !self.autocomplete_delay.is_zero() {
            tokio::time::sleep(self.autocomplete_delay).await;
        }
        if self.autocomplete_fails {
            return Err(AppError::external_unavailable("mock", "connection refused"));
        }

        let query = query.to_lowercase();
        Ok(self
            .suggestions
            .iter()
            .filter(|suggestion| suggestion.name.contains(&query))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        limit: u32,
    ) -> AppResult<Vec<RecipeCandidate>> {
        self.search_requests
            .lock()
            .unwrap()
            .push(ingredients.to_vec());

        if self.search_fails {
            return Err(AppError::upstream_status("mock", 402, "quota exceeded"));
        }
        Ok(self
            .candidates
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn recipe_information(&self, id: RecipeId) -> AppResult<RecipeInformation> {
        self.information_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.information_delays.get(&id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_ids.lock().unwrap().contains(&id) {
            return Err(AppError::upstream_status("mock", 500, "boom")
                .with_resource_id(id.to_string()));
        }
        self.information
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("recipe {id}")))
    }
}

pub fn candidate(id: RecipeId, title: &str) -> RecipeCandidate {
    RecipeCandidate {
        id,
        title: title.to_owned(),
        image: format!("https://img.spoonacular.com/recipes/{id}-312x231.jpg"),
        used_ingredient_count: 2,
        missed_ingredient_count: 1,
        missed_ingredients: vec!["Soy Sauce".to_owned()],
    }
}

pub fn information(id: RecipeId, dietary: DietaryFlags, dish_types: &[&str]) -> RecipeInformation {
    RecipeInformation {
        id,
        title: format!("Recipe {id}"),
        image: None,
        dietary,
        dish_types: dish_types.iter().map(|t| (*t).to_owned()).collect(),
        instructions: "Cook everything.".to_owned(),
        ingredients: vec![ViewIngredient {
            name: "rice".to_owned(),
            amount: 1.5,
            unit: "cups".to_owned(),
        }],
    }
}

pub fn vegetarian() -> DietaryFlags {
    DietaryFlags {
        vegetarian: true,
        ..DietaryFlags::default()
    }
}

pub fn detail(id: RecipeId, dietary: DietaryFlags, dish_types: &[&str]) -> RecipeDetail {
    RecipeDetail::from_parts(
        candidate(id, &format!("Recipe {id}")),
        information(id, dietary, dish_types),
    )
}
