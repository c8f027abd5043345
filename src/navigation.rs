// ABOUTME: Resolves the ordered list behind the recipe detail overlay
// ABOUTME: Supplies position and prev/next stepping for the selected recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

//! # Navigation Context Resolver
//!
//! The detail overlay steps through whichever list the recipe was opened
//! from. Resolution order, first match wins:
//!
//! 1. Results view, or any search text or goal active: the filter output.
//! 2. The recipes of the selected recipe's subcategory.
//! 3. The whole catalog, when the subcategory lookup misses.

use tracing::debug;

use crate::filter::RecipeFilter;
use crate::models::{Catalog, Recipe};

/// Which list a navigation context was resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationSource {
    /// Current filter engine output
    Filtered,
    /// Recipes of one subcategory
    Subcategory(String),
    /// Whole catalog, used when the subcategory lookup missed
    Catalog,
}

/// Ordered list containing the selected recipe and its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext<'a> {
    recipes: Vec<&'a Recipe>,
    index: Option<usize>,
    source: NavigationSource,
}

impl<'a> NavigationContext<'a> {
    /// Build a context from any ordered list and the selected id
    #[must_use]
    pub fn new(recipes: Vec<&'a Recipe>, selected_id: &str, source: NavigationSource) -> Self {
        let index = recipes.iter().position(|r| r.id == selected_id);
        Self {
            recipes,
            index,
            source,
        }
    }

    /// Ordered list the overlay steps through
    #[must_use]
    pub fn recipes(&self) -> &[&'a Recipe] {
        &self.recipes
    }

    /// Position of the selected recipe, `None` when it is not in the list
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// Where the list came from
    #[must_use]
    pub const fn source(&self) -> &NavigationSource {
        &self.source
    }

    /// Selected recipe, when present in the list
    #[must_use]
    pub fn current(&self) -> Option<&'a Recipe> {
        self.index.and_then(|i| self.recipes.get(i).copied())
    }

    /// Whether a previous recipe exists
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    /// Whether a next recipe exists.
    ///
    /// A selection missing from the list behaves like position -1, so the
    /// first element counts as "next".
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index
            .map_or(!self.recipes.is_empty(), |i| i + 1 < self.recipes.len())
    }

    /// Recipe after the selected one; `None` at the end of the list
    #[must_use]
    pub fn next(&self) -> Option<&'a Recipe> {
        if !self.has_next() {
            return None;
        }
        let target = self.index.map_or(0, |i| i + 1);
        self.recipes.get(target).copied()
    }

    /// Recipe before the selected one; `None` at the start of the list
    #[must_use]
    pub fn prev(&self) -> Option<&'a Recipe> {
        if !self.has_prev() {
            return None;
        }
        self.index
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.recipes.get(i).copied())
    }
}

/// Resolve the navigation context for a selected recipe.
///
/// `results_view` is true when the results screen is showing; an active
/// filter selects the filtered list even outside it.
#[must_use]
pub fn resolve_navigation<'a>(
    catalog: &'a Catalog,
    selected: &Recipe,
    filter: &RecipeFilter,
    results_view: bool,
) -> NavigationContext<'a> {
    if results_view || filter.is_active() {
        let recipes = filter.apply(catalog).into_recipes();
        return NavigationContext::new(recipes, &selected.id, NavigationSource::Filtered);
    }

    if let Some(subcategory) = catalog.find_subcategory(&selected.category) {
        return NavigationContext::new(
            subcategory.recipes.iter().collect(),
            &selected.id,
            NavigationSource::Subcategory(subcategory.id.clone()),
        );
    }

    debug!(
        recipe_id = %selected.id,
        category = %selected.category,
        "Subcategory lookup missed, navigating whole catalog"
    );
    NavigationContext::new(catalog.all_recipes(), &selected.id, NavigationSource::Catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Seed;
    use crate::filter::Goal;

    fn catalog() -> Catalog {
        Seed::load().unwrap().catalog
    }

    #[test]
    fn test_subcategory_context_for_unfiltered_dashboard() {
        let catalog = catalog();
        let selected = catalog.find_recipe("dr2").unwrap();
        let context = resolve_navigation(&catalog, selected, &RecipeFilter::new(), false);

        assert_eq!(
            context.source(),
            &NavigationSource::Subcategory("dor".to_owned())
        );
        assert_eq!(context.index(), Some(1));
        assert!(context.has_prev());
        assert!(context.has_next());
        assert_eq!(context.prev().unwrap().id, "dr1");
        assert_eq!(context.next().unwrap().id, "dr3");
    }

    #[test]
    fn test_goal_selects_filtered_context_even_outside_results() {
        let catalog = catalog();
        let selected = catalog.find_recipe("d3").unwrap();
        let filter = RecipeFilter::new().with_goal(Goal::Bloat);
        let context = resolve_navigation(&catalog, selected, &filter, false);

        assert_eq!(context.source(), &NavigationSource::Filtered);
        assert_eq!(context.current().unwrap().id, "d3");
    }

    #[test]
    fn test_lookup_miss_falls_back_to_catalog() {
        let catalog = catalog();
        let mut orphan = catalog.find_recipe("o1").unwrap().clone();
        orphan.category = "nowhere".to_owned();
        let context = resolve_navigation(&catalog, &orphan, &RecipeFilter::new(), false);

        assert_eq!(context.source(), &NavigationSource::Catalog);
        assert_eq!(context.index(), Some(catalog.recipe_count() - 1));
        assert!(!context.has_next());
        assert!(context.next().is_none());
    }

    #[test]
    fn test_missing_selection_has_no_prev_and_steps_to_first() {
        let catalog = catalog();
        let selected = catalog.find_recipe("o1").unwrap();
        // o1 is not in the pain results
        let filter = RecipeFilter::new().with_goal(Goal::Pain);
        let context = resolve_navigation(&catalog, selected, &filter, true);

        assert_eq!(context.index(), None);
        assert!(context.current().is_none());
        assert!(!context.has_prev());
        assert!(context.prev().is_none());
        assert_eq!(context.next().map(|r| r.id.as_str()), context.recipes().first().map(|r| r.id.as_str()));
    }
}
