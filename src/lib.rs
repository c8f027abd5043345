// ABOUTME: Main library entry point for the BioCozinha functional recipe catalog
// ABOUTME: Provides filtering, overlay navigation, sessions and AI recipe generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

#![deny(unsafe_code)]

//! # BioCozinha
//!
//! A curated catalog of functional recipes grouped into three pillars
//! (natural pharmacy, time-saving, budget-conscious), each split into
//! subcategories.
//!
//! ## Features
//!
//! - **Filtering**: free-text search plus predefined health goals
//! - **Navigation**: prev/next stepping in the list a recipe was opened from
//! - **Generation**: ask Gemini for three more recipes in a subcategory
//!
//! ## Architecture
//!
//! - **Models / Errors**: shared types from `biocozinha-core`
//! - **Catalog**: embedded seed data
//! - **Filter** and **Navigation**: pure functions over the catalog
//! - **Session**: the mutable state a front end drives
//! - **LLM** and **Generation**: provider seam and the recipe client
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use biocozinha::errors::AppResult;
//! use biocozinha::filter::Goal;
//! use biocozinha::session::Session;
//!
//! fn main() -> AppResult<()> {
//!     let mut session = Session::from_seed()?;
//!     session.apply_goal(Goal::Pain);
//!     for recipe in session.filtered().recipes() {
//!         println!("{} ({} min)", recipe.name, recipe.time);
//!     }
//!     Ok(())
//! }
//! ```

pub use biocozinha_core::{errors, models};

/// Embedded seed catalog and pantry checklist
pub mod catalog;

/// Environment-based configuration
pub mod config;

/// Search and health-goal filtering
pub mod filter;

/// Recipe generation through an LLM provider
pub mod generation;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Tracing subscriber setup
pub mod logging;

/// Detail overlay navigation context
pub mod navigation;

/// Per-user browsing state
pub mod session;
