// ABOUTME: Session ingredient set with title-case normalization and change notification
// ABOUTME: IngredientSetManager is the single writer; readers hold watch receivers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridge-to-Table Contributors

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

/// Normalize raw user input into the stored ingredient form
///
/// Trims, splits into words, upper-cases the first character of each word
/// and lower-cases the rest, then rejoins with single spaces.
/// Returns `None` for blank input.
#[must_use]
pub fn normalize_ingredient(raw: &str) -> Option<String> {
    let words: Vec<String> = raw.split_whitespace().map(title_case_word).collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Ordered, duplicate-free list of normalized ingredient names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IngredientSet {
    items: Vec<String>,
}

impl IngredientSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Names in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Iterate names in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Number of ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no ingredient is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `name` is present (exact match on the stored form)
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    pub(crate) fn insert(&mut self, raw: &str) -> bool {
        let Some(name) = normalize_ingredient(raw) else {
            return false;
        };
        if self.contains(&name) {
            return false;
        }
        self.items.push(name);
        true
    }

    pub(crate) fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != name);
        self.items.len() != before
    }

    pub(crate) fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        true
    }
}

impl<'a> IntoIterator for &'a IngredientSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Builds a detached set, normalizing and de-duplicating like [`IngredientSetManager::add`]
impl<S: AsRef<str>> FromIterator<S> for IngredientSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

/// Owner of the session's ingredient set
///
/// The only component allowed to mutate the set. Every effective change is
/// published to subscribers, which is what drives the recipe re-fetch.
/// No-op operations (duplicate add, unknown remove, clearing an empty set)
/// do not notify.
#[derive(Debug)]
pub struct IngredientSetManager {
    sender: watch::Sender<IngredientSet>,
}

impl Default for IngredientSetManager {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientSetManager {
    /// Create a manager holding an empty set
    #[must_use]
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(IngredientSet::new());
        Self { sender }
    }

    /// Add an ingredient after normalization; returns whether the set changed
    pub fn add(&self, name: &str) -> bool {
        let changed = self.sender.send_if_modified(|set| set.insert(name));
        if changed {
            debug!(ingredient = %name, "Ingredient added");
        }
        changed
    }

    /// Remove an exact match; returns whether the set changed
    pub fn remove(&self, name: &str) -> bool {
        let changed = self.sender.send_if_modified(|set| set.remove(name));
        if changed {
            debug!(ingredient = %name, "Ingredient removed");
        }
        changed
    }

    /// Remove every ingredient; returns whether the set changed
    pub fn clear(&self) -> bool {
        let changed = self.sender.send_if_modified(IngredientSet::clear);
        if changed {
            debug!("Ingredient set cleared");
        }
        changed
    }

    /// Copy of the current set
    #[must_use]
    pub fn snapshot(&self) -> IngredientSet {
        self.sender.borrow().clone()
    }

    /// Read-only handle that is notified on every change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<IngredientSet> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title_cases_each_word() {
        assert_eq!(
            normalize_ingredient(" chicken BREAST ").as_deref(),
            Some("Chicken Breast")
        );
        assert_eq!(normalize_ingredient("oLIVE   oil").as_deref(), Some("Olive Oil"));
        assert_eq!(normalize_ingredient("   "), None);
    }

    #[test]
    fn test_normalize_handles_non_ascii() {
        assert_eq!(normalize_ingredient("éPOISSES").as_deref(), Some("Époisses"));
    }

    #[test]
    fn test_from_iterator_dedupes() {
        let set: IngredientSet = ["rice", "RICE", "chicken"].into_iter().collect();
        assert_eq!(set.as_slice(), ["Rice", "Chicken"]);
    }
}
