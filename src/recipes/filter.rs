// ABOUTME: Client-side recipe filtering by dietary restrictions and meal types
// ABOUTME: Restrictions combine with AND, meal types with OR via substring match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

use crate::errors::{AppError, ErrorCode};
use crate::recipes::models::{DietaryFlags, RecipeDetail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// How restrictions without a backing dietary flag are evaluated
///
/// Paleo and Pescetarian have no flag in the upstream data, and Ketogenic is
/// often left unclassified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnbackedRestrictionPolicy {
    /// Treat them as satisfied by every recipe
    #[default]
    Permissive,
    /// Treat them as satisfied by no recipe
    Strict,
}

impl UnbackedRestrictionPolicy {
    const fn allows(self) -> bool {
        matches!(self, Self::Permissive)
    }
}

impl FromStr for UnbackedRestrictionPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Unknown unbacked restriction policy '{other}'"),
            )),
        }
    }
}

/// Dietary restriction selectable as a filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// No gluten-containing ingredients
    GlutenFree,
    /// Ketogenic
    Ketogenic,
    /// Paleo-compliant (no backing flag)
    Paleo,
    /// Fish but no other meat (no backing flag)
    Pescetarian,
    /// Unrecognized tag; always satisfied
    Other(String),
}

impl DietaryRestriction {
    /// Parse a display label or identifier ("Gluten Free", "gluten_free", "keto")
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let key: String = label
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "vegetarian" => Self::Vegetarian,
            "vegan" => Self::Vegan,
            "glutenfree" => Self::GlutenFree,
            "ketogenic" | "keto" => Self::Ketogenic,
            "paleo" | "paleolithic" => Self::Paleo,
            "pescetarian" | "pescatarian" => Self::Pescetarian,
            _ => Self::Other(label.trim().to_owned()),
        }
    }

    /// Display label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::GlutenFree => "Gluten Free",
            Self::Ketogenic => "Ketogenic",
            Self::Paleo => "Paleo",
            Self::Pescetarian => "Pescetarian",
            Self::Other(label) => label,
        }
    }

    /// Whether a recipe with these flags satisfies the restriction
    #[must_use]
    pub fn is_satisfied_by(&self, flags: &DietaryFlags, policy: UnbackedRestrictionPolicy) -> bool {
        match self {
            Self::Vegetarian => flags.vegetarian,
            Self::Vegan => flags.vegan,
            Self::GlutenFree => flags.gluten_free,
            Self::Ketogenic => flags.ketogenic.unwrap_or_else(|| policy.allows()),
            Self::Paleo | Self::Pescetarian => policy.allows(),
            Self::Other(_) => true,
        }
    }
}

impl From<&str> for DietaryRestriction {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selected filters; both sets empty means "show everything"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Restrictions a recipe must all satisfy
    pub dietary: BTreeSet<DietaryRestriction>,
    /// Meal types of which a recipe must match at least one
    pub meal_types: BTreeSet<String>,
    /// Evaluation of restrictions without a backing flag
    pub unbacked_policy: UnbackedRestrictionPolicy,
}

impl FilterCriteria {
    /// Select a restriction
    #[must_use]
    pub fn with_restriction(mut self, restriction: impl Into<DietaryRestriction>) -> Self {
        self.dietary.insert(restriction.into());
        self
    }

    /// Select a meal type
    #[must_use]
    pub fn with_meal_type(mut self, meal_type: impl Into<String>) -> Self {
        self.meal_types.insert(meal_type.into());
        self
    }

    /// Set the policy for restrictions without a backing flag
    #[must_use]
    pub const fn with_unbacked_policy(mut self, policy: UnbackedRestrictionPolicy) -> Self {
        self.unbacked_policy = policy;
        self
    }

    /// Select the restriction if unselected, otherwise unselect it; returns the new state
    pub fn toggle_restriction(&mut self, restriction: impl Into<DietaryRestriction>) -> bool {
        let restriction = restriction.into();
        if self.dietary.remove(&restriction) {
            false
        } else {
            self.dietary.insert(restriction);
            true
        }
    }

    /// Select the meal type if unselected, otherwise unselect it; returns the new state
    pub fn toggle_meal_type(&mut self, meal_type: &str) -> bool {
        if self.meal_types.remove(meal_type) {
            false
        } else {
            self.meal_types.insert(meal_type.to_owned());
            true
        }
    }

    /// Whether no filter is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dietary.is_empty() && self.meal_types.is_empty()
    }

    /// Whether the recipe satisfies every selected restriction
    #[must_use]
    pub fn meets_dietary(&self, recipe: &RecipeDetail) -> bool {
        self.dietary
            .iter()
            .all(|restriction| restriction.is_satisfied_by(&recipe.dietary, self.unbacked_policy))
    }
}

fn matches_any_meal_type(recipe: &RecipeDetail, wanted_lowercase: &[String]) -> bool {
    if wanted_lowercase.is_empty() {
        return true;
    }
    recipe.dish_types.iter().any(|dish_type| {
        let dish_type = dish_type.to_lowercase();
        wanted_lowercase
            .iter()
            .any(|wanted| dish_type.contains(wanted.as_str()))
    })
}

/// Apply `criteria` to `recipes`, keeping input order
#[must_use]
pub fn filter_recipes(recipes: &[RecipeDetail], criteria: &FilterCriteria) -> Vec<RecipeDetail> {
    if criteria.is_empty() {
        return recipes.to_vec();
    }

    let wanted: Vec<String> = criteria
        .meal_types
        .iter()
        .map(|t| t.to_lowercase())
        .collect();

    recipes
        .iter()
        .filter(|recipe| criteria.meets_dietary(recipe) && matches_any_meal_type(recipe, &wanted))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!(
            DietaryRestriction::parse("Gluten Free"),
            DietaryRestriction::GlutenFree
        );
        assert_eq!(
            DietaryRestriction::parse("gluten_free"),
            DietaryRestriction::GlutenFree
        );
        assert_eq!(DietaryRestriction::parse("Keto"), DietaryRestriction::Ketogenic);
        assert_eq!(
            DietaryRestriction::parse(" Low FODMAP "),
            DietaryRestriction::Other("Low FODMAP".to_owned())
        );
    }

    #[test]
    fn test_labels_round_trip_vocabulary() {
        for label in crate::constants::vocabulary::DIETARY_RESTRICTIONS {
            let restriction = DietaryRestriction::parse(label);
            assert!(!matches!(restriction, DietaryRestriction::Other(_)));
            assert_eq!(restriction.label(), label);
        }
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "STRICT".parse::<UnbackedRestrictionPolicy>().unwrap(),
            UnbackedRestrictionPolicy::Strict
        );
        assert!("lenient".parse::<UnbackedRestrictionPolicy>().is_err());
    }

    #[test]
    fn test_ketogenic_uses_flag_when_present() {
        let flags = DietaryFlags {
            ketogenic: Some(false),
            ..DietaryFlags::default()
        };
        assert!(!DietaryRestriction::Ketogenic
            .is_satisfied_by(&flags, UnbackedRestrictionPolicy::Permissive));

        let unknown = DietaryFlags::default();
        assert!(DietaryRestriction::Ketogenic
            .is_satisfied_by(&unknown, UnbackedRestrictionPolicy::Permissive));
        assert!(!DietaryRestriction::Ketogenic
            .is_satisfied_by(&unknown, UnbackedRestrictionPolicy::Strict));
    }

    #[test]
    fn test_meal_types_match_case_insensitive_substrings() {
        let recipe = |id, dish_types: &[&str]| RecipeDetail {
            candidate: crate::recipes::models::RecipeCandidate {
                id,
                title: format!("Recipe {id}"),
                image: String::new(),
                used_ingredient_count: 1,
                missed_ingredient_count: 0,
                missed_ingredients: Vec::new(),
            },
            dietary: DietaryFlags::default(),
            dish_types: dish_types.iter().map(|t| (*t).to_owned()).collect(),
        };
        let recipes = vec![
            recipe(1, &["Main Course"]),
            recipe(2, &["side dish"]),
            recipe(3, &["morning meal", "BREAKFAST"]),
            recipe(4, &[]),
        ];
        let criteria = FilterCriteria::default()
            .with_meal_type("main course")
            .with_meal_type("Breakfast");

        let kept: Vec<_> = filter_recipes(&recipes, &criteria)
            .iter()
            .map(RecipeDetail::id)
            .collect();

        assert_eq!(kept, vec![1, 3]);
    }

    #[test]
    fn test_toggle() {
        let mut criteria = FilterCriteria::default();
        assert!(criteria.toggle_restriction("Vegan"));
        assert!(criteria.toggle_meal_type("Dessert"));
        assert!(!criteria.is_empty());
        assert!(!criteria.toggle_restriction(DietaryRestriction::Vegan));
        assert!(!criteria.toggle_meal_type("Dessert"));
        assert!(criteria.is_empty());
    }
}
