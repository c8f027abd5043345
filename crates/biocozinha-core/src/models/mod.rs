// ABOUTME: Catalog data model module declarations and re-exports
// ABOUTME: Recipe, SubCategory, Pillar and the Catalog aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

/// Pillars, subcategories and the catalog aggregate
pub mod catalog;
/// Recipe record and difficulty label
pub mod recipe;

pub use catalog::{Catalog, Pillar, PillarType, SubCategory};
pub use recipe::{Difficulty, Recipe};
