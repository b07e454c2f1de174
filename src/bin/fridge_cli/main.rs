// ABOUTME: fridge-cli - command-line driver for the Fridge-to-Table recipe pipeline
// ABOUTME: Suggests ingredients, searches and filters recipes, and shows a recipe page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors
//!
//! Usage:
//! ```bash
//! # Suggest ingredient names
//! fridge-cli suggest "chick"
//!
//! # Find recipes for what is in the fridge
//! fridge-cli search chicken rice
//!
//! # Only vegetarian desserts or snacks
//! fridge-cli search eggs flour sugar --diet Vegetarian --meal Dessert --meal Snack
//!
//! # Show one recipe
//! fridge-cli recipe 716429
//!
//! # List filter labels
//! fridge-cli filters
//! ```

mod display;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use fridge_to_table::config::AppConfig;
use fridge_to_table::constants::vocabulary::{DIETARY_RESTRICTIONS, MEAL_TYPES};
use fridge_to_table::errors::ErrorCode;
use fridge_to_table::external::SpoonacularClient;
use fridge_to_table::ingredients::{AutocompleteClient, IngredientSetManager};
use fridge_to_table::logging::{LogFormat, LoggingConfig};
use fridge_to_table::recipes::{
    EnrichmentPolicy, FeedStatus, FilterCriteria, RecipeFeed, RecipeSearchClient,
    UnbackedRestrictionPolicy,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fridge-cli",
    about = "Fridge-to-Table recipe finder",
    long_about = "Find recipes for the ingredients you have on hand, filtered by diet and meal type."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Suggest ingredient names for partial input
    Suggest {
        /// Partial ingredient name
        query: String,
    },

    /// Search recipes by ingredients and filter them
    Search {
        /// Ingredients on hand
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Dietary restriction every recipe must satisfy (repeatable)
        #[arg(long = "diet")]
        diets: Vec<String>,

        /// Meal type of which a recipe must match one (repeatable)
        #[arg(long = "meal")]
        meal_types: Vec<String>,

        /// Drop recipes whose details fail to load instead of failing the search
        #[arg(long)]
        best_effort: bool,

        /// Treat restrictions without a dietary flag (Paleo, Pescetarian) as unsatisfied
        #[arg(long)]
        strict_diet: bool,
    },

    /// Show a recipe's ingredients and instructions
    Recipe {
        /// Recipe id
        id: u64,
    },

    /// List the dietary restrictions and meal types accepted by `search`
    Filters,
}

fn recipe_api(config: &AppConfig) -> Result<Arc<SpoonacularClient>> {
    Ok(Arc::new(SpoonacularClient::new(config.spoonacular.clone())?))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    logging.format = LogFormat::Compact;
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let config = AppConfig::from_env();

    match cli.command {
        Command::Suggest { query } => {
            config.log_summary();
            let client = AutocompleteClient::new(recipe_api(&config)?, config.autocomplete.clone());
            let suggestions = client
                .suggest(&query)
                .await
                .into_suggestions()
                .unwrap_or_default();
            if cli.json {
                display::print_json(&suggestions)?;
            } else {
                display::display_suggestions(&suggestions);
            }
        }
        Command::Search {
            ingredients,
            diets,
            meal_types,
            best_effort,
            strict_diet,
        } => {
            config.log_summary();
            let mut search_config = config.search.clone();
            if best_effort {
                search_config.enrichment_policy = EnrichmentPolicy::BestEffort;
            }

            let manager = IngredientSetManager::new();
            for ingredient in &ingredients {
                manager.add(ingredient);
            }
            info!(ingredients = ?manager.snapshot().as_slice(), "Searching recipes");

            let mut feed = RecipeFeed::new(RecipeSearchClient::new(
                recipe_api(&config)?,
                search_config,
            ));
            let snapshot = feed.refresh(&manager.snapshot()).await;
            if let FeedStatus::Failed { code, message } = &snapshot.status {
                if *code == ErrorCode::ExternalAuthFailed {
                    bail!("Recipe search failed: {message} (check SPOONACULAR_API_KEY)");
                }
                bail!("Recipe search failed: {message}");
            }

            let mut criteria = FilterCriteria::default().with_unbacked_policy(if strict_diet {
                UnbackedRestrictionPolicy::Strict
            } else {
                config.unbacked_restrictions
            });
            for diet in &diets {
                criteria = criteria.with_restriction(diet.as_str());
            }
            for meal_type in meal_types {
                criteria = criteria.with_meal_type(meal_type);
            }

            let visible = snapshot.visible(&criteria);
            if cli.json {
                display::print_json(&visible)?;
            } else {
                display::display_recipes(&visible, snapshot.recipes.len());
            }
        }
        Command::Recipe { id } => {
            config.log_summary();
            let search = RecipeSearchClient::new(recipe_api(&config)?, config.search.clone());
            let view = search.recipe_view(id).await?;
            if cli.json {
                display::print_json(&view)?;
            } else {
                display::display_recipe_view(&view);
            }
        }
        Command::Filters => {
            if cli.json {
                display::print_json(&json!({
                    "dietary_restrictions": DIETARY_RESTRICTIONS,
                    "meal_types": MEAL_TYPES,
                }))?;
            } else {
                display::display_filters();
            }
        }
    }

    Ok(())
}
