// ABOUTME: Re-runs recipe search whenever the ingredient set changes
// ABOUTME: Publishes idle/loading/ready/failed snapshots for the presentation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

use crate::errors::ErrorCode;
use crate::ingredients::IngredientSet;
use crate::recipes::filter::{filter_recipes, FilterCriteria};
use crate::recipes::models::RecipeDetail;
use crate::recipes::search::RecipeSearchClient;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Pipeline state as seen by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    /// No ingredients selected; nothing requested
    Idle,
    /// A search is in flight
    Loading,
    /// The last search succeeded
    Ready,
    /// The last search failed; recipes from the previous success stay visible
    Failed {
        /// Error classification
        code: ErrorCode,
        /// Error message
        message: String,
    },
}

/// Latest published feed state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshot {
    /// Increments once per ingredient-set change the feed has processed
    pub revision: u64,
    /// Pipeline status
    pub status: FeedStatus,
    /// Enriched recipes from the latest successful search, unfiltered
    pub recipes: Vec<RecipeDetail>,
}

impl FeedSnapshot {
    const fn idle(revision: u64) -> Self {
        Self {
            revision,
            status: FeedStatus::Idle,
            recipes: Vec::new(),
        }
    }

    /// Whether placeholders should be shown
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == FeedStatus::Loading
    }

    /// Whether the last search failed
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, FeedStatus::Failed { .. })
    }

    /// Recipes to display under `criteria`
    #[must_use]
    pub fn visible(&self, criteria: &FilterCriteria) -> Vec<RecipeDetail> {
        filter_recipes(&self.recipes, criteria)
    }
}

/// Drives [`RecipeSearchClient`] from ingredient-set changes
pub struct RecipeFeed {
    search: RecipeSearchClient,
    sender: watch::Sender<FeedSnapshot>,
    revision: u64,
}

impl RecipeFeed {
    /// Create an idle feed
    #[must_use]
    pub fn new(search: RecipeSearchClient) -> Self {
        let (sender, _receiver) = watch::channel(FeedSnapshot::idle(0));
        Self {
            search,
            sender,
            revision: 0,
        }
    }

    /// Receiver for published snapshots
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.sender.subscribe()
    }

    /// Copy of the latest snapshot
    #[must_use]
    pub fn snapshot(&self) -> FeedSnapshot {
        self.sender.borrow().clone()
    }

    /// Run the pipeline once for `ingredients` and publish the outcome
    ///
    /// An empty set clears the recipes without a request. Otherwise the
    /// status moves to `Loading`, then to exactly one of `Ready` or `Failed`.
    pub async fn refresh(&mut self, ingredients: &IngredientSet) -> FeedSnapshot {
        self.revision += 1;
        let revision = self.revision;

        if ingredients.is_empty() {
            self.sender.send_replace(FeedSnapshot::idle(revision));
            debug!(revision, "Ingredient set empty; recipes cleared");
            return self.snapshot();
        }

        self.sender.send_modify(|snapshot| {
            snapshot.revision = revision;
            snapshot.status = FeedStatus::Loading;
        });

        let outcome = self.search.search(ingredients).await;

        self.sender.send_modify(|snapshot| match outcome {
            Ok(recipes) => {
                snapshot.recipes = recipes;
                snapshot.status = FeedStatus::Ready;
            }
            Err(e) => {
                warn!(
                    revision,
                    upstream = e.code.is_upstream(),
                    error = %e,
                    "Recipe search failed; keeping previous recipes"
                );
                snapshot.status = FeedStatus::Failed {
                    code: e.code,
                    message: e.message,
                };
            }
        });
        self.snapshot()
    }

    /// Refresh for the current set, then again on every change until the manager is dropped
    ///
    /// Changes that arrive while a search is in flight are coalesced: the
    /// next run uses the latest set.
    pub async fn run(mut self, mut ingredients: watch::Receiver<IngredientSet>) {
        loop {
            let current = ingredients.borrow_and_update().clone();
            self.refresh(&current).await;

            if ingredients.changed().await.is_err() {
                debug!("Ingredient set manager dropped; recipe feed stopping");
                break;
            }
        }
    }
}
