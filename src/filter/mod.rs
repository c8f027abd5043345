// ABOUTME: Filter engine deriving the flat recipe list for search and goal views
// ABOUTME: Case-insensitive substring matching composed by intersection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

//! # Filter Engine
//!
//! Starts from every recipe in catalog order and keeps the ones matching both
//! the search text and the goal, when present.
//!
//! - Search text matches the recipe name or functional action only.
//!   Ingredients and steps are not searched.
//! - A goal matches when any of its keywords appears in the name, the
//!   functional action, or the category id.
//!
//! Matching lowercases both sides with full Unicode rules, so `"INCHAÇO"`
//! finds `"Inchaço"`.

/// Health goal definitions
pub mod goals;

pub use goals::Goal;

use tracing::debug;

use crate::models::{Catalog, Recipe};

/// Search text and goal to apply to the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    query: Option<String>,
    goal: Option<Goal>,
}

impl RecipeFilter {
    /// Filter that keeps everything
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: None,
            goal: None,
        }
    }

    /// Restrict to recipes whose name or functional action contains `query`.
    /// An empty query is the same as no query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = if query.is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        };
        self
    }

    /// Restrict to recipes matching a goal's keywords
    #[must_use]
    pub const fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Lowercased search text, if any
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Active goal, if any
    #[must_use]
    pub const fn goal(&self) -> Option<Goal> {
        self.goal
    }

    /// Whether any predicate is set
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.query.is_some() || self.goal.is_some()
    }

    /// Whether a single recipe passes every active predicate
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_lowered(&LoweredFields::of(recipe))
    }

    fn matches_lowered(&self, fields: &LoweredFields) -> bool {
        if let Some(query) = self.query.as_deref() {
            if !fields.name.contains(query) && !fields.action.contains(query) {
                return false;
            }
        }

        if let Some(goal) = self.goal {
            let hit = goal.keywords().iter().any(|keyword| {
                fields.name.contains(keyword)
                    || fields.action.contains(keyword)
                    || fields.category.contains(keyword)
            });
            if !hit {
                return false;
            }
        }

        true
    }

    /// Apply the filter to a catalog, preserving catalog order
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> FilteredRecipes<'a> {
        let all = catalog.all_recipes();
        if !self.is_active() {
            return FilteredRecipes {
                recipes: all,
                filtered: false,
            };
        }

        let total = all.len();
        let recipes: Vec<&Recipe> = all
            .into_iter()
            .filter(|recipe| self.matches_lowered(&LoweredFields::of(recipe)))
            .collect();

        debug!(
            query = self.query.as_deref().unwrap_or(""),
            goal = self.goal.map_or("", |g| g.id()),
            matched = recipes.len(),
            total,
            "Filtered catalog"
        );

        FilteredRecipes {
            recipes,
            filtered: true,
        }
    }
}

struct LoweredFields {
    name: String,
    action: String,
    category: String,
}

impl LoweredFields {
    fn of(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.to_lowercase(),
            action: recipe.functional_action.to_lowercase(),
            category: recipe.category.to_lowercase(),
        }
    }
}

/// Ordered output of the filter engine.
///
/// Keeps "no filter applied" distinct from "filter applied, nothing matched".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredRecipes<'a> {
    recipes: Vec<&'a Recipe>,
    filtered: bool,
}

impl<'a> FilteredRecipes<'a> {
    /// Matching recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[&'a Recipe] {
        &self.recipes
    }

    /// Consume into the matching recipes
    #[must_use]
    pub fn into_recipes(self) -> Vec<&'a Recipe> {
        self.recipes
    }

    /// Whether any predicate was applied
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.filtered
    }

    /// Number of matching recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Matching ids in order
    #[must_use]
    pub fn ids(&self) -> Vec<&'a str> {
        self.recipes.iter().map(|r| r.id.as_str()).collect()
    }
}

/// Filter a catalog by optional search text and optional goal id.
///
/// An empty query applies no search predicate. A goal id that does not name
/// a known goal applies no goal predicate.
#[must_use]
pub fn filter_recipes<'a>(
    catalog: &'a Catalog,
    query: Option<&str>,
    goal: Option<&str>,
) -> FilteredRecipes<'a> {
    let mut filter = RecipeFilter::new();
    if let Some(query) = query {
        filter = filter.with_query(query);
    }
    if let Some(goal_id) = goal {
        match Goal::from_id(goal_id) {
            Some(goal) => filter = filter.with_goal(goal),
            None => debug!(goal_id, "Unknown goal id, ignoring goal filter"),
        }
    }
    filter.apply(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Seed;

    fn catalog() -> Catalog {
        Seed::load().unwrap().catalog
    }

    #[test]
    fn test_no_filter_returns_everything_unfiltered() {
        let catalog = catalog();
        let result = filter_recipes(&catalog, None, None);
        assert!(!result.is_filtered());
        assert_eq!(result.len(), catalog.recipe_count());
    }

    #[test]
    fn test_empty_query_is_not_a_filter() {
        let catalog = catalog();
        let result = filter_recipes(&catalog, Some(""), None);
        assert!(!result.is_filtered());
    }

    #[test]
    fn test_query_without_matches_is_filtered_and_empty() {
        let catalog = catalog();
        let result = filter_recipes(&catalog, Some("chocolate"), None);
        assert!(result.is_filtered());
        assert!(result.is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive_over_unicode() {
        let catalog = catalog();
        let result = filter_recipes(&catalog, Some("INCHAÇO"), None);
        assert_eq!(result.ids(), vec!["d1"]);
    }

    #[test]
    fn test_unknown_goal_applies_no_goal_predicate() {
        let catalog = catalog();
        let result = filter_recipes(&catalog, None, Some("sleep"));
        assert!(!result.is_filtered());
        assert_eq!(result.len(), catalog.recipe_count());
    }

    #[test]
    fn test_goal_matches_category_id() {
        let catalog = catalog();
        // "dor" is both a pain keyword and the category id of dr1..dr3
        let ids = filter_recipes(&catalog, None, Some("pain")).ids();
        for id in ["dr1", "dr2", "dr3"] {
            assert!(ids.contains(&id), "{id} missing from {ids:?}");
        }
    }
}
