// ABOUTME: Output formatting helpers for the biocozinha CLI
// ABOUTME: Provides consistent text rendering of pillars, recipes and the toolkit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

use biocozinha::generation::PendingGenerations;
use biocozinha::models::{Pillar, PillarType, Recipe};
use biocozinha::navigation::NavigationContext;

const RULE_WIDTH: usize = 72;

/// Display the pillar tabs, marking the active one
pub fn display_pillar_tabs(active: PillarType) {
    let tabs: Vec<String> = PillarType::ALL
        .iter()
        .map(|kind| {
            if *kind == active {
                format!("[{}]", kind.nav_label())
            } else {
                kind.nav_label().to_owned()
            }
        })
        .collect();
    println!("{}\n", tabs.join(" | "));
}

/// Display a pillar heading and its subcategories
pub fn display_pillar(pillar: &Pillar, pending: &PendingGenerations) {
    display_pillar_tabs(pillar.kind);
    println!("{}", pillar.kind.label());
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", pillar.description);

    for subcategory in &pillar.subcategories {
        let status = if pending.is_pending(&subcategory.id) {
            "Gerando..."
        } else {
            "Expandir +3"
        };
        println!(
            "\n[{}] {} ({status})",
            subcategory.id, subcategory.name
        );
        println!("  {}", subcategory.description);
        for recipe in &subcategory.recipes {
            display_recipe_line(recipe);
        }
    }
}

/// Display one line per recipe
pub fn display_recipe_list(recipes: &[&Recipe]) {
    for recipe in recipes {
        display_recipe_line(recipe);
    }
}

fn display_recipe_line(recipe: &Recipe) {
    let star = if recipe.is_featured { "*" } else { " " };
    println!(
        "  {star} {:<6} {} | {} min | {}",
        recipe.id, recipe.name, recipe.time, recipe.difficulty
    );
}

/// Display a recipe with its neighbours in the navigation context
pub fn display_recipe_detail(recipe: &Recipe, context: &NavigationContext<'_>) {
    println!("{}", recipe.name);
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Tempo: {} min   Dificuldade: {}", recipe.time, recipe.difficulty);
    println!("Ação funcional: {}", recipe.functional_action);

    println!("\nIngredientes:");
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }

    println!("\nModo de preparo:");
    for (n, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {step}", n + 1);
    }

    if let Some(tip) = &recipe.chef_tip {
        println!("\nDica do chef: {tip}");
    }

    println!("{}", "-".repeat(RULE_WIDTH));
    let position = context
        .index()
        .map_or_else(|| "-".to_owned(), |i| (i + 1).to_string());
    println!("Receita {position} de {}", context.recipes().len());
    if let Some(prev) = context.prev() {
        println!("  < anterior: {} ({})", prev.id, prev.name);
    }
    if let Some(next) = context.next() {
        println!("  > próxima:  {} ({})", next.id, next.name);
    }
}

/// Display the pantry checklist
pub fn display_pantry_checklist(items: &[String]) {
    println!("DESPENSA FUNCIONAL");
    println!("{}", "=".repeat(RULE_WIDTH));
    for item in items {
        println!("  [ ] {item}");
    }
}
