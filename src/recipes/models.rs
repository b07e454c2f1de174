// ABOUTME: Data models for ingredient suggestions, recipe candidates and enriched recipes
// ABOUTME: Defines RecipeCandidate, RecipeDetail, DietaryFlags and the standalone RecipeView
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

use crate::constants::spoonacular::INGREDIENT_IMAGE_CDN;
use serde::{Deserialize, Serialize};

/// Upstream recipe identifier
pub type RecipeId = u64;

/// Ingredient name suggested by autocomplete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSuggestion {
    /// Display name (e.g. "chicken breast")
    pub name: String,
    /// Image file name on the ingredient CDN
    pub image: String,
}

impl IngredientSuggestion {
    /// Full thumbnail URL for this suggestion, or `None` when no image was returned
    #[must_use]
    pub fn image_url(&self) -> Option<String> {
        if self.image.is_empty() {
            None
        } else {
            Some(format!("{INGREDIENT_IMAGE_CDN}{}", self.image))
        }
    }
}

/// Search-stage result ranked by ingredient overlap, before enrichment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCandidate {
    /// Upstream recipe identifier
    pub id: RecipeId,
    /// Recipe title
    pub title: String,
    /// Image URL
    pub image: String,
    /// How many of the selected ingredients the recipe uses
    pub used_ingredient_count: u32,
    /// How many extra ingredients the recipe needs
    pub missed_ingredient_count: u32,
    /// Names of the extra ingredients
    pub missed_ingredients: Vec<String>,
}

/// Boolean dietary classification reported by the detail endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryFlags {
    /// No meat or fish
    pub vegetarian: bool,
    /// No animal products
    pub vegan: bool,
    /// No gluten-containing ingredients
    pub gluten_free: bool,
    /// No dairy products
    pub dairy_free: bool,
    /// Ketogenic; `None` when the service did not classify the recipe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ketogenic: Option<bool>,
}

impl DietaryFlags {
    /// Badge labels for the flags that are set, in display order
    #[must_use]
    pub fn badges(&self) -> Vec<&'static str> {
        let mut badges = Vec::new();
        if self.vegetarian {
            badges.push("Vegetarian");
        }
        if self.vegan {
            badges.push("Vegan");
        }
        if self.gluten_free {
            badges.push("Gluten Free");
        }
        if self.dairy_free {
            badges.push("Dairy Free");
        }
        if self.ketogenic == Some(true) {
            badges.push("Ketogenic");
        }
        badges
    }
}

/// Ingredient line of the standalone recipe view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewIngredient {
    /// Ingredient name
    pub name: String,
    /// Quantity in `unit`
    pub amount: f64,
    /// Unit label as returned by the service (may be empty)
    pub unit: String,
}

/// Decoded recipe information from the detail endpoint
///
/// One decode serves both the enrichment stage (flags and dish types) and
/// the standalone view (instructions and ingredient lines).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeInformation {
    /// Upstream recipe identifier
    pub id: RecipeId,
    /// Recipe title
    pub title: String,
    /// Image URL, when the recipe has one
    pub image: Option<String>,
    /// Dietary classification
    pub dietary: DietaryFlags,
    /// Dish type tags (e.g. "lunch", "main course")
    pub dish_types: Vec<String>,
    /// Preparation instructions (empty when not provided)
    pub instructions: String,
    /// Ingredient lines with quantities
    pub ingredients: Vec<ViewIngredient>,
}

/// A candidate enriched with dietary flags and dish types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    /// Stage-1 identity, kept as returned by the search
    #[serde(flatten)]
    pub candidate: RecipeCandidate,
    /// Dietary classification
    #[serde(flatten)]
    pub dietary: DietaryFlags,
    /// Dish type tags
    pub dish_types: Vec<String>,
}

impl RecipeDetail {
    /// Merge a candidate with its detail lookup, keeping the candidate's identity
    #[must_use]
    pub fn from_parts(candidate: RecipeCandidate, information: RecipeInformation) -> Self {
        Self {
            candidate,
            dietary: information.dietary,
            dish_types: information.dish_types,
        }
    }

    /// Upstream recipe identifier
    #[must_use]
    pub const fn id(&self) -> RecipeId {
        self.candidate.id
    }
}

/// Standalone recipe page: title, image, ingredient lines and instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeView {
    /// Upstream recipe identifier
    pub id: RecipeId,
    /// Recipe title
    pub title: String,
    /// Image URL, when the recipe has one
    pub image: Option<String>,
    /// Preparation instructions (empty when not provided)
    pub instructions: String,
    /// Ingredient lines with quantities
    pub ingredients: Vec<ViewIngredient>,
}

impl From<RecipeInformation> for RecipeView {
    fn from(information: RecipeInformation) -> Self {
        Self {
            id: information.id,
            title: information.title,
            image: information.image,
            instructions: information.instructions,
            ingredients: information.ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_image_url() {
        let suggestion = IngredientSuggestion {
            name: "apple".to_owned(),
            image: "apple.jpg".to_owned(),
        };
        assert_eq!(
            suggestion.image_url().as_deref(),
            Some("https://spoonacular.com/cdn/ingredients_100x100/apple.jpg")
        );

        let bare = IngredientSuggestion {
            name: "salt".to_owned(),
            image: String::new(),
        };
        assert!(bare.image_url().is_none());
    }

    #[test]
    fn test_badges_follow_flags() {
        let flags = DietaryFlags {
            vegetarian: true,
            gluten_free: true,
            ketogenic: Some(false),
            ..DietaryFlags::default()
        };
        assert_eq!(flags.badges(), vec!["Vegetarian", "Gluten Free"]);
    }

    #[test]
    fn test_detail_serializes_flat() {
        let detail = RecipeDetail {
            candidate: RecipeCandidate {
                id: 7,
                title: "Fried Rice".to_owned(),
                image: "https://img.example/7.jpg".to_owned(),
                used_ingredient_count: 2,
                missed_ingredient_count: 1,
                missed_ingredients: vec!["Soy Sauce".to_owned()],
            },
            dietary: DietaryFlags::default(),
            dish_types: vec!["side dish".to_owned()],
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["vegetarian"], false);
        assert!(json.get("ketogenic").is_none());
        assert_eq!(json["dish_types"][0], "side dish");
    }
}
