// ABOUTME: Static seed data for the recipe catalog and the pantry checklist
// ABOUTME: Loaded once per session from an embedded JSON literal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

//! # Catalog Seed
//!
//! The initial catalog ships inside the binary as `data/catalog.json`. A
//! session loads it once at start; after that the only change is appending
//! generated recipes.

use serde::Deserialize;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{Catalog, Pillar};

const SEED_JSON: &str = include_str!("../data/catalog.json");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedFile {
    pillars: Vec<Pillar>,
    pantry_checklist: Vec<String>,
}

/// Everything a session starts with
#[derive(Debug, Clone)]
pub struct Seed {
    /// Initial catalog, already validated
    pub catalog: Catalog,
    /// Items listed in the toolkit's pantry checklist
    pub pantry_checklist: Vec<String>,
}

impl Seed {
    /// Parse and validate the embedded seed data
    ///
    /// # Errors
    ///
    /// Returns an internal error if the embedded JSON is malformed or breaks a
    /// catalog invariant. Both indicate a broken build, not bad user input.
    pub fn load() -> AppResult<Self> {
        Self::from_json(SEED_JSON)
    }

    /// Parse seed data from a JSON document with the same layout as the
    /// embedded one
    ///
    /// # Errors
    ///
    /// Returns an internal error if the document is malformed or breaks a
    /// catalog invariant.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let file: SeedFile = serde_json::from_str(json)
            .map_err(|e| AppError::internal(format!("invalid catalog seed: {e}")).with_source(e))?;
        let catalog = Catalog::new(file.pillars)?;

        debug!(
            pillars = catalog.pillars().len(),
            recipes = catalog.recipe_count(),
            "Loaded catalog seed"
        );

        Ok(Self {
            catalog,
            pantry_checklist: file.pantry_checklist,
        })
    }
}
