// ABOUTME: Catalog aggregate of pillars, subcategories and recipes
// ABOUTME: Owns the id invariants and the single append-only mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use super::recipe::Recipe;
use crate::errors::{AppError, AppResult};

/// Number of uuid hex characters appended when re-keying a colliding id
const REKEY_SUFFIX_LEN: usize = 8;

/// Top-level organizing category of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PillarType {
    /// Natural pharmacy: browse by pain or symptom
    #[default]
    #[serde(rename = "FARMÁCIA NATURAL")]
    Pharmacy,
    /// Chronometer: recipes for people short on time
    #[serde(rename = "CRONÔMETRO")]
    Chronometer,
    /// Smart economist: cook with what is already at home
    #[serde(rename = "ECONOMISTA INTELIGENTE")]
    Economist,
}

impl PillarType {
    /// All pillars in display order
    pub const ALL: [Self; 3] = [Self::Pharmacy, Self::Chronometer, Self::Economist];

    /// Full heading label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pharmacy => "FARMÁCIA NATURAL",
            Self::Chronometer => "CRONÔMETRO",
            Self::Economist => "ECONOMISTA INTELIGENTE",
        }
    }

    /// Short label used in the navigation sidebar
    #[must_use]
    pub const fn nav_label(&self) -> &'static str {
        match self {
            Self::Pharmacy => "Farmácia",
            Self::Chronometer => "Cronômetro",
            Self::Economist => "Economista",
        }
    }
}

impl Display for PillarType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Named grouping of recipes within a pillar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategory {
    /// Identifier referenced by `Recipe::category`
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description, also sent to the generation service
    pub description: String,
    /// Recipes in display order; grows only at the end
    pub recipes: Vec<Recipe>,
}

/// Top-level category with its subcategories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    /// Which of the three pillars this is
    #[serde(rename = "type")]
    pub kind: PillarType,
    /// Tagline shown under the pillar heading
    pub description: String,
    /// Subcategories in display order
    pub subcategories: Vec<SubCategory>,
}

/// Root aggregate holding every recipe of a session.
///
/// # Invariants
/// - Recipe ids are unique across all pillars.
/// - Every `Recipe::category` names an existing subcategory.
/// - Recipes are only ever appended; nothing is removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pillars: Vec<Pillar>,
}

impl Catalog {
    /// Build a catalog from pillars and check its invariants
    ///
    /// # Errors
    ///
    /// Returns an internal error when ids are duplicated or a recipe points at
    /// an unknown subcategory. Seed data is static, so this is a programming
    /// error rather than a runtime condition.
    pub fn new(pillars: Vec<Pillar>) -> AppResult<Self> {
        let catalog = Self { pillars };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Pillars in display order
    #[must_use]
    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    /// Look up a pillar by type
    #[must_use]
    pub fn pillar(&self, kind: PillarType) -> Option<&Pillar> {
        self.pillars.iter().find(|p| p.kind == kind)
    }

    /// Every subcategory, in pillar then subcategory order
    pub fn subcategories(&self) -> impl Iterator<Item = &SubCategory> {
        self.pillars.iter().flat_map(|p| p.subcategories.iter())
    }

    /// Look up a subcategory by id
    #[must_use]
    pub fn find_subcategory(&self, id: &str) -> Option<&SubCategory> {
        self.subcategories().find(|s| s.id == id)
    }

    /// All recipes flattened in pillar → subcategory → recipe order
    #[must_use]
    pub fn all_recipes(&self) -> Vec<&Recipe> {
        self.subcategories()
            .flat_map(|s| s.recipes.iter())
            .collect()
    }

    /// Recipes flagged as featured, in catalog order
    #[must_use]
    pub fn featured_recipes(&self) -> Vec<&Recipe> {
        self.subcategories()
            .flat_map(|s| s.recipes.iter())
            .filter(|r| r.is_featured)
            .collect()
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn find_recipe(&self, id: &str) -> Option<&Recipe> {
        self.subcategories()
            .flat_map(|s| s.recipes.iter())
            .find(|r| r.id == id)
    }

    /// Total number of recipes
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.subcategories().map(|s| s.recipes.len()).sum()
    }

    /// Check the id invariants
    ///
    /// # Errors
    ///
    /// Returns an internal error naming the first offending recipe.
    pub fn validate(&self) -> AppResult<()> {
        let subcategory_ids: HashSet<&str> = self.subcategories().map(|s| s.id.as_str()).collect();
        let mut seen = HashSet::new();

        for recipe in self.subcategories().flat_map(|s| s.recipes.iter()) {
            if !seen.insert(recipe.id.as_str()) {
                return Err(AppError::internal(format!(
                    "duplicate recipe id `{}` in catalog",
                    recipe.id
                ))
                .with_resource_id(recipe.id.clone()));
            }
            if !subcategory_ids.contains(recipe.category.as_str()) {
                return Err(AppError::internal(format!(
                    "recipe `{}` references unknown subcategory `{}`",
                    recipe.id, recipe.category
                ))
                .with_resource_id(recipe.id.clone()));
            }
        }

        Ok(())
    }

    /// Append recipes to the end of a subcategory.
    ///
    /// Each appended recipe is bound to the target subcategory and any id that
    /// already exists in the catalog is replaced with a fresh one, so the
    /// catalog invariants survive whatever the generation service returned.
    /// Returns the final ids of the appended recipes in order.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when `subcategory_id` is unknown; the catalog
    /// is left unchanged in that case.
    pub fn append_recipes(
        &mut self,
        subcategory_id: &str,
        recipes: Vec<Recipe>,
    ) -> AppResult<Vec<String>> {
        let mut taken: HashSet<String> = self
            .subcategories()
            .flat_map(|s| s.recipes.iter())
            .map(|r| r.id.clone())
            .collect();

        let subcategory = self
            .pillars
            .iter_mut()
            .flat_map(|p| p.subcategories.iter_mut())
            .find(|s| s.id == subcategory_id)
            .ok_or_else(|| {
                AppError::not_found(format!("Subcategory {subcategory_id}"))
                    .with_resource_id(subcategory_id)
            })?;

        let mut appended = Vec::with_capacity(recipes.len());
        for mut recipe in recipes {
            if recipe.category != subcategory.id {
                debug!(
                    recipe_id = %recipe.id,
                    reported = %recipe.category,
                    subcategory = %subcategory.id,
                    "Binding generated recipe to target subcategory"
                );
                recipe.category.clone_from(&subcategory.id);
            }
            if taken.contains(&recipe.id) {
                let fresh = fresh_id(&subcategory.id, &taken);
                warn!(
                    original = %recipe.id,
                    replacement = %fresh,
                    "Recipe id already in catalog, re-keying"
                );
                recipe.id = fresh;
            }
            taken.insert(recipe.id.clone());
            appended.push(recipe.id.clone());
            subcategory.recipes.push(recipe);
        }

        Ok(appended)
    }
}

fn fresh_id(subcategory_id: &str, taken: &HashSet<String>) -> String {
    loop {
        let suffix = Uuid::new_v4().simple().to_string();
        let candidate = format!("{subcategory_id}-{}", &suffix[..REKEY_SUFFIX_LEN]);
        if !taken.contains(&candidate) {
            return candidate;
        }
    }
}
