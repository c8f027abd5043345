// ABOUTME: Generation command for the biocozinha CLI
// ABOUTME: Asks Gemini for more recipes and prints the expanded subcategory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

use std::sync::Arc;

use biocozinha::config::LlmConfig;
use biocozinha::errors::{AppError, AppResult};
use biocozinha::generation::RecipeGenerator;
use biocozinha::llm::GeminiProvider;
use biocozinha::session::Session;
use tracing::info;

use crate::helpers::display::display_recipe_list;

/// Generate more recipes for a subcategory and print the new ones
///
/// # Errors
///
/// Returns a configuration error when `GEMINI_API_KEY` is missing, not-found
/// for an unknown subcategory, or the generation failure.
pub async fn generate(session: &mut Session, subcategory_id: &str) -> AppResult<()> {
    let config = LlmConfig::from_env()?;
    let provider = GeminiProvider::from_config(&config)?;
    let generator = RecipeGenerator::new(Arc::new(provider))?;

    let before = session
        .catalog()
        .find_subcategory(subcategory_id)
        .map(|s| s.recipes.len())
        .ok_or_else(|| AppError::not_found(format!("Subcategory {subcategory_id}")))?;

    println!("Gerando receitas para `{subcategory_id}`...");
    let appended = session.generate_more(&generator, subcategory_id).await?;
    info!(subcategory = %subcategory_id, appended, "Generation finished");

    if let Some(subcategory) = session.catalog().find_subcategory(subcategory_id) {
        println!("\n{} (+{appended})", subcategory.name);
        let added: Vec<_> = subcategory.recipes.iter().skip(before).collect();
        display_recipe_list(&added);
    }
    Ok(())
}
