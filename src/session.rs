// ABOUTME: Per-user browsing session over the recipe catalog
// ABOUTME: Tracks view, pillar, search, goal, selection and pending generations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

//! # Session Controller
//!
//! A [`Session`] is the single owner of the catalog for one user. Front ends
//! call its transitions in response to input and read back the derived lists.
//!
//! Generation is split in two halves so the network call never borrows the
//! session: [`Session::begin_generation`] hands out a [`GenerationTicket`],
//! the caller awaits [`RecipeGenerator::request_more`] with it, then returns
//! the outcome through [`Session::finish_generation`].

use std::fmt::{Display, Formatter, Result as FmtResult};

use tracing::{debug, error, info};

use crate::catalog::Seed;
use crate::errors::{AppError, AppResult, GenerationError};
use crate::filter::{FilteredRecipes, Goal, RecipeFilter};
use crate::generation::{PendingGenerations, RecipeGenerator};
use crate::models::{Catalog, Pillar, PillarType, Recipe};
use crate::navigation::{resolve_navigation, NavigationContext};

/// Screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing screen
    #[default]
    Welcome,
    /// Pillar browser with featured recipes
    Dashboard,
    /// Search and goal results
    Results,
    /// Pantry checklist
    Toolkit,
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Welcome => write!(f, "welcome"),
            Self::Dashboard => write!(f, "dashboard"),
            Self::Results => write!(f, "results"),
            Self::Toolkit => write!(f, "toolkit"),
        }
    }
}

/// Claim on one in-flight generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    /// Subcategory the recipes will be appended to
    pub subcategory_id: String,
    /// Subcategory display name sent in the prompt
    pub name: String,
    /// Subcategory description sent in the prompt
    pub description: String,
}

/// Browsing state for one user
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    pantry_checklist: Vec<String>,
    view: View,
    pillar: PillarType,
    query: String,
    goal: Option<Goal>,
    selected: Option<String>,
    pending: PendingGenerations,
}

impl Session {
    /// Start a session on the welcome screen
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self {
            catalog: seed.catalog,
            pantry_checklist: seed.pantry_checklist,
            view: View::default(),
            pillar: PillarType::default(),
            query: String::new(),
            goal: None,
            selected: None,
            pending: PendingGenerations::new(),
        }
    }

    /// Start a session on the embedded seed catalog
    ///
    /// # Errors
    ///
    /// Returns an internal error if the embedded seed is broken.
    pub fn from_seed() -> AppResult<Self> {
        Ok(Self::new(Seed::load()?))
    }

    // ------------------------------------------------------------------------
    // State accessors
    // ------------------------------------------------------------------------

    /// Current catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current screen
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Pillar shown on the dashboard
    #[must_use]
    pub const fn active_pillar(&self) -> PillarType {
        self.pillar
    }

    /// Raw search text, empty when none
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Active health goal
    #[must_use]
    pub const fn goal(&self) -> Option<Goal> {
        self.goal
    }

    /// Pending generation requests
    #[must_use]
    pub const fn pending(&self) -> &PendingGenerations {
        &self.pending
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Leave the welcome screen
    pub fn enter_dashboard(&mut self) {
        self.view = View::Dashboard;
    }

    /// Show a pillar on the dashboard, dropping any goal
    pub fn select_pillar(&mut self, pillar: PillarType) {
        self.view = View::Dashboard;
        self.pillar = pillar;
        self.goal = None;
    }

    /// Show the pantry checklist
    pub fn open_toolkit(&mut self) {
        self.view = View::Toolkit;
    }

    /// Back to the welcome screen with search and goal cleared
    pub fn go_home(&mut self) {
        self.view = View::Welcome;
        self.goal = None;
        self.query.clear();
    }

    /// Update the search text.
    ///
    /// Non-empty text switches to results. Clearing it returns to the
    /// dashboard unless a goal keeps the results open.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        if !self.query.is_empty() {
            self.view = View::Results;
        } else if self.goal.is_none() {
            self.view = View::Dashboard;
        }
    }

    /// Filter by a health goal and show the results
    pub fn apply_goal(&mut self, goal: Goal) {
        self.goal = Some(goal);
        self.view = View::Results;
    }

    /// Drop search text and goal and return to the dashboard
    pub fn clear_filters(&mut self) {
        self.goal = None;
        self.query.clear();
        self.view = View::Dashboard;
    }

    /// Open the detail overlay for a recipe
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no recipe has this id.
    pub fn select_recipe(&mut self, recipe_id: &str) -> AppResult<()> {
        if self.catalog.find_recipe(recipe_id).is_none() {
            return Err(AppError::not_found(format!("Recipe {recipe_id}")).with_resource_id(recipe_id));
        }
        self.selected = Some(recipe_id.to_owned());
        Ok(())
    }

    /// Close the detail overlay
    pub fn close_recipe(&mut self) {
        self.selected = None;
    }

    /// Step to the next recipe in the navigation context; `false` at the end
    pub fn select_next(&mut self) -> bool {
        let target = self
            .navigation()
            .and_then(|context| context.next().map(|r| r.id.clone()));
        self.step_to(target)
    }

    /// Step to the previous recipe in the navigation context; `false` at the start
    pub fn select_prev(&mut self) -> bool {
        let target = self
            .navigation()
            .and_then(|context| context.prev().map(|r| r.id.clone()));
        self.step_to(target)
    }

    fn step_to(&mut self, target: Option<String>) -> bool {
        let Some(id) = target else {
            return false;
        };
        debug!(recipe_id = %id, "Stepping detail overlay");
        self.selected = Some(id);
        true
    }

    // ------------------------------------------------------------------------
    // Derived lists
    // ------------------------------------------------------------------------

    /// Filter built from the current search text and goal
    #[must_use]
    pub fn filter(&self) -> RecipeFilter {
        let mut filter = RecipeFilter::new().with_query(self.query.as_str());
        if let Some(goal) = self.goal {
            filter = filter.with_goal(goal);
        }
        filter
    }

    /// Recipes matching the current search text and goal
    #[must_use]
    pub fn filtered(&self) -> FilteredRecipes<'_> {
        self.filter().apply(&self.catalog)
    }

    /// Recipes flagged as featured
    #[must_use]
    pub fn featured(&self) -> Vec<&Recipe> {
        self.catalog.featured_recipes()
    }

    /// Pillar shown on the dashboard
    #[must_use]
    pub fn current_pillar(&self) -> Option<&Pillar> {
        self.catalog.pillar(self.pillar)
    }

    /// Toolkit checklist items
    #[must_use]
    pub fn pantry_checklist(&self) -> &[String] {
        &self.pantry_checklist
    }

    /// Recipe shown in the detail overlay
    #[must_use]
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected
            .as_deref()
            .and_then(|id| self.catalog.find_recipe(id))
    }

    /// Navigation context of the open detail overlay
    #[must_use]
    pub fn navigation(&self) -> Option<NavigationContext<'_>> {
        let selected = self.selected_recipe()?;
        Some(resolve_navigation(
            &self.catalog,
            selected,
            &self.filter(),
            self.view == View::Results,
        ))
    }

    // ------------------------------------------------------------------------
    // Generation
    // ------------------------------------------------------------------------

    /// Mark a subcategory as pending and return what the request needs.
    ///
    /// Returns `Ok(None)` when a request for the subcategory is already in
    /// flight.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown subcategory.
    pub fn begin_generation(&mut self, subcategory_id: &str) -> AppResult<Option<GenerationTicket>> {
        let subcategory = self.catalog.find_subcategory(subcategory_id).ok_or_else(|| {
            AppError::from(GenerationError::UnknownSubcategory {
                id: subcategory_id.to_owned(),
            })
        })?;

        let ticket = GenerationTicket {
            subcategory_id: subcategory.id.clone(),
            name: subcategory.name.clone(),
            description: subcategory.description.clone(),
        };

        if !self.pending.start(subcategory_id) {
            debug!(subcategory = %subcategory_id, "Generation already pending");
            return Ok(None);
        }
        Ok(Some(ticket))
    }

    /// Apply the outcome of a generation request and clear its pending mark.
    ///
    /// On success the recipes are appended to the ticket's subcategory and
    /// the number appended is returned.
    ///
    /// # Errors
    ///
    /// Returns the generation failure converted to [`AppError`]; the catalog
    /// is unchanged in that case.
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket,
        result: Result<Vec<Recipe>, GenerationError>,
    ) -> AppResult<usize> {
        let GenerationTicket { subcategory_id, .. } = ticket;
        self.pending.finish(&subcategory_id);

        match result {
            Ok(recipes) => {
                let ids = self.catalog.append_recipes(&subcategory_id, recipes)?;
                info!(
                    subcategory = %subcategory_id,
                    appended = ids.len(),
                    "Appended generated recipes"
                );
                Ok(ids.len())
            }
            Err(e) => {
                error!(subcategory = %subcategory_id, error = %e, "Recipe generation failed");
                Err(e.into())
            }
        }
    }

    /// Drop a ticket whose result will never arrive
    pub fn abandon_generation(&mut self, ticket: GenerationTicket) {
        let GenerationTicket { subcategory_id, .. } = ticket;
        if self.pending.finish(&subcategory_id) {
            debug!(subcategory = %subcategory_id, "Abandoned pending generation");
        }
    }

    /// Request more recipes for a subcategory and append them.
    ///
    /// Returns `Ok(0)` without calling the service when a request for the
    /// subcategory is already pending.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown subcategory, or the
    /// generation failure; the catalog is unchanged in both cases.
    pub async fn generate_more(
        &mut self,
        generator: &RecipeGenerator,
        subcategory_id: &str,
    ) -> AppResult<usize> {
        let Some(ticket) = self.begin_generation(subcategory_id)? else {
            return Ok(0);
        };
        let result = generator
            .request_more(&ticket.name, &ticket.description)
            .await;
        self.finish_generation(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::from_seed().unwrap()
    }

    #[test]
    fn test_starts_on_welcome_with_pharmacy() {
        let session = session();
        assert_eq!(session.view(), View::Welcome);
        assert_eq!(session.active_pillar(), PillarType::Pharmacy);
        assert!(session.selected_recipe().is_none());
        assert!(session.navigation().is_none());
    }

    #[test]
    fn test_clearing_query_keeps_results_while_goal_active() {
        let mut session = session();
        session.apply_goal(Goal::Pain);
        session.set_search_query("chá");
        assert_eq!(session.view(), View::Results);
        session.set_search_query("");
        assert_eq!(session.view(), View::Results);

        session.clear_filters();
        assert_eq!(session.view(), View::Dashboard);
        assert!(session.goal().is_none());
    }

    #[test]
    fn test_select_pillar_drops_goal_but_keeps_query() {
        let mut session = session();
        session.set_search_query("detox");
        session.apply_goal(Goal::Bloat);
        session.select_pillar(PillarType::Economist);
        assert_eq!(session.view(), View::Dashboard);
        assert!(session.goal().is_none());
        assert_eq!(session.query(), "detox");
    }

    #[test]
    fn test_select_unknown_recipe_is_not_found() {
        let mut session = session();
        let error = session.select_recipe("missing").unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_begin_generation_refuses_duplicate() {
        let mut session = session();
        let ticket = session.begin_generation("desinflama").unwrap().unwrap();
        assert!(session.begin_generation("desinflama").unwrap().is_none());
        session.abandon_generation(ticket);
        assert!(!session.pending().is_pending("desinflama"));
    }
}
