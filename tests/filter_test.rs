// ABOUTME: Integration tests for search and health-goal filtering
// ABOUTME: Checks scoping to name and functional action, goal keywords and composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use biocozinha::filter::{filter_recipes, Goal, RecipeFilter};
use biocozinha::models::Catalog;

use common::seed_catalog;

// ============================================================================
// Search Text
// ============================================================================

#[test]
fn test_search_ignores_ingredients() {
    let catalog = seed_catalog();
    let results = filter_recipes(&catalog, Some("gengibre"), None);

    assert!(results.is_filtered());
    assert_eq!(results.ids(), vec!["dr1"]);
    assert!(!results.ids().contains(&"d1"));
}

#[test]
fn test_search_is_case_insensitive_on_both_sides() {
    let catalog = seed_catalog();
    assert_eq!(
        filter_recipes(&catalog, Some("ANTI-INFLAMAT"), None).ids(),
        vec!["d1", "dr1"]
    );
    assert_eq!(filter_recipes(&catalog, Some("INCHAÇO"), None).ids(), vec!["d1"]);
}

#[test]
fn test_search_results_contain_query_and_rejects_lack_it() {
    let catalog = seed_catalog();
    let query = "chá";
    let results = filter_recipes(&catalog, Some(query), None);
    let kept = results.ids();

    for recipe in catalog.all_recipes() {
        let hit = recipe.name.to_lowercase().contains(query)
            || recipe.functional_action.to_lowercase().contains(query);
        assert_eq!(kept.contains(&recipe.id.as_str()), hit, "recipe {}", recipe.id);
    }
}

#[test]
fn test_empty_query_and_no_goal_is_unfiltered() {
    let catalog = seed_catalog();
    let results = filter_recipes(&catalog, Some(""), None);

    assert!(!results.is_filtered());
    assert_eq!(results.len(), catalog.recipe_count());
}

#[test]
fn test_no_match_is_filtered_and_empty() {
    let catalog = seed_catalog();
    let results = filter_recipes(&catalog, Some("zzz"), None);

    assert!(results.is_filtered());
    assert!(results.is_empty());
}

// ============================================================================
// Health Goals
// ============================================================================

#[test]
fn test_bloat_goal_matches_name_and_action_substrings() {
    let catalog = seed_catalog();
    let results = filter_recipes(&catalog, None, Some("bloat"));

    // d1 by "inchaço" in the name, d3 by "detox" in name and action
    assert_eq!(results.ids(), vec!["d1", "d3"]);
}

#[test]
fn test_every_goal_result_matches_a_keyword() {
    let catalog = seed_catalog();

    for goal in Goal::ALL {
        let results = RecipeFilter::new().with_goal(goal).apply(&catalog);
        for recipe in results.recipes() {
            let fields = [
                recipe.name.to_lowercase(),
                recipe.functional_action.to_lowercase(),
                recipe.category.to_lowercase(),
            ];
            assert!(
                goal.keywords()
                    .iter()
                    .any(|k| fields.iter().any(|f| f.contains(k))),
                "{} matched {} without a keyword",
                goal.id(),
                recipe.id
            );
        }
    }
}

#[test]
fn test_pain_goal_matches_category_and_substrings() {
    let catalog = seed_catalog();
    let results = filter_recipes(&catalog, None, Some("pain"));

    // "dor" is the category of dr1..dr3 and a substring of "Ativador" in d2
    assert_eq!(results.ids(), vec!["d2", "dr1", "dr2", "dr3"]);
}

#[test]
fn test_unknown_goal_applies_no_predicate() {
    let catalog = seed_catalog();
    let results = filter_recipes(&catalog, None, Some("sleep"));

    assert_eq!(results.len(), catalog.recipe_count());
}

#[test]
fn test_goal_ids_resolve_case_insensitively() {
    assert_eq!(Goal::from_id(" Energy "), Some(Goal::Energy));
    assert_eq!(Goal::from_id("gut"), Some(Goal::Gut));
    assert_eq!(Goal::from_id("sleep"), None);
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_query_and_goal_compose_with_and() {
    let catalog = seed_catalog();
    let both = filter_recipes(&catalog, Some("gengibre"), Some("pain"));
    assert_eq!(both.ids(), vec!["dr1"]);

    let disjoint = filter_recipes(&catalog, Some("gengibre"), Some("bloat"));
    assert!(disjoint.is_empty());
}

#[test]
fn test_filtering_is_idempotent_and_order_stable() {
    let catalog = seed_catalog();
    let filter = RecipeFilter::new().with_goal(Goal::Energy);

    let first = filter.apply(&catalog);
    for recipe in first.recipes() {
        assert!(filter.matches(recipe));
    }

    let all_ids: Vec<&str> = catalog.all_recipes().iter().map(|r| r.id.as_str()).collect();
    let positions: Vec<usize> = first
        .ids()
        .iter()
        .map(|id| all_ids.iter().position(|a| a == id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(filter.apply(&catalog).ids(), first.ids());
}

#[test]
fn test_featured_flag_does_not_change_membership() {
    let catalog = seed_catalog();
    let mut pillars = catalog.pillars().to_vec();
    for recipe in pillars
        .iter_mut()
        .flat_map(|p| p.subcategories.iter_mut())
        .flat_map(|s| s.recipes.iter_mut())
    {
        recipe.is_featured = !recipe.is_featured;
    }
    let flipped = Catalog::new(pillars).unwrap();
    assert_ne!(
        flipped.featured_recipes().len(),
        catalog.featured_recipes().len()
    );

    for (query, goal) in [
        (Some("chá"), None),
        (Some("a"), None),
        (None, Some("pain")),
        (Some("receita"), Some("energy")),
    ] {
        assert_eq!(
            filter_recipes(&flipped, query, goal).ids(),
            filter_recipes(&catalog, query, goal).ids(),
            "query {query:?} goal {goal:?}"
        );
    }
}
