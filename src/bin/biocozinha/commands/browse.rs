// ABOUTME: Browsing commands for the biocozinha CLI
// ABOUTME: Dashboard, search/goal results, recipe detail and toolkit views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

use biocozinha::errors::{AppError, AppResult};
use biocozinha::filter::Goal;
use biocozinha::models::PillarType;
use biocozinha::session::Session;
use tracing::debug;

use crate::helpers::display::{
    display_pantry_checklist, display_pillar, display_recipe_detail, display_recipe_list,
};

/// Parse a goal id, listing the valid ids on failure
fn parse_goal(id: &str) -> AppResult<Goal> {
    Goal::from_id(id).ok_or_else(|| {
        let known: Vec<&str> = Goal::ALL.iter().map(Goal::id).collect();
        AppError::invalid_input(format!(
            "unknown goal `{id}`, expected one of: {}",
            known.join(", ")
        ))
    })
}

/// Apply optional search text and goal to the session
fn apply_filters(session: &mut Session, query: Option<&str>, goal: Option<&str>) -> AppResult<()> {
    if let Some(goal) = goal {
        session.apply_goal(parse_goal(goal)?);
    }
    if let Some(query) = query {
        session.set_search_query(query);
    }
    Ok(())
}

/// Show a pillar and the featured recipes
pub fn dashboard(session: &mut Session, pillar: PillarType) {
    session.select_pillar(pillar);

    if let Some(pillar) = session.current_pillar() {
        display_pillar(pillar, session.pending());
    }

    println!("\nEM DESTAQUE");
    display_recipe_list(&session.featured());
}

/// Show the recipes matching search text and an optional goal
///
/// # Errors
///
/// Returns an invalid-input error for an unknown goal id.
pub fn search(session: &mut Session, query: &str, goal: Option<&str>) -> AppResult<()> {
    apply_filters(session, Some(query), goal)?;

    let results = session.filtered();
    debug!(count = results.len(), view = %session.view(), "Rendering results");

    let heading = session.goal().map_or_else(
        || format!("Resultados para \"{query}\""),
        |goal| format!("Objetivo: {}", goal.name()),
    );
    println!("{heading}");
    if results.is_empty() {
        println!("Nenhuma receita encontrada.");
    } else {
        display_recipe_list(results.recipes());
    }
    Ok(())
}

/// Show one recipe with its position in the list it was opened from
///
/// # Errors
///
/// Returns not-found for an unknown recipe id and invalid-input for an
/// unknown goal id.
pub fn show(
    session: &mut Session,
    recipe_id: &str,
    query: Option<&str>,
    goal: Option<&str>,
) -> AppResult<()> {
    apply_filters(session, query, goal)?;
    session.select_recipe(recipe_id)?;

    let (Some(recipe), Some(context)) = (session.selected_recipe(), session.navigation()) else {
        return Err(AppError::not_found(format!("Recipe {recipe_id}")));
    };

    display_recipe_detail(recipe, &context);
    Ok(())
}

/// Show the pantry checklist
pub fn toolkit(session: &mut Session) {
    session.open_toolkit();
    display_pantry_checklist(session.pantry_checklist());
}
