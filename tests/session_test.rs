// ABOUTME: Integration tests for session view transitions and overlay stepping
// ABOUTME: Mirrors the user flows of the catalog front end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use biocozinha::filter::Goal;
use biocozinha::models::PillarType;
use biocozinha::navigation::NavigationSource;
use biocozinha::session::{Session, View};

use common::dashboard_session;

// ============================================================================
// View Transitions
// ============================================================================

#[test]
fn test_welcome_to_dashboard_and_home() {
    let mut session = Session::from_seed().unwrap();
    assert_eq!(session.view(), View::Welcome);

    session.enter_dashboard();
    assert_eq!(session.view(), View::Dashboard);

    session.set_search_query("chá");
    session.apply_goal(Goal::Gut);
    session.go_home();
    assert_eq!(session.view(), View::Welcome);
    assert_eq!(session.query(), "");
    assert!(session.goal().is_none());
}

#[test]
fn test_typing_and_clearing_search() {
    let mut session = dashboard_session();

    session.set_search_query("ovo");
    assert_eq!(session.view(), View::Results);
    assert_eq!(session.filtered().ids(), vec!["j2"]);

    session.set_search_query("");
    assert_eq!(session.view(), View::Dashboard);
    assert!(!session.filtered().is_filtered());
}

#[test]
fn test_pillar_and_toolkit() {
    let mut session = dashboard_session();

    session.select_pillar(PillarType::Chronometer);
    let pillar = session.current_pillar().unwrap();
    assert_eq!(pillar.kind, PillarType::Chronometer);
    assert_eq!(pillar.subcategories[0].id, "jato");

    session.open_toolkit();
    assert_eq!(session.view(), View::Toolkit);
    assert_eq!(session.pantry_checklist().len(), 20);
}

#[test]
fn test_featured_recipes() {
    let session = dashboard_session();
    let ids: Vec<&str> = session.featured().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["d1", "dr1", "j1"]);
}

// ============================================================================
// Detail Overlay
// ============================================================================

#[test]
fn test_stepping_through_subcategory() {
    let mut session = dashboard_session();
    session.select_recipe("dr1").unwrap();

    let context = session.navigation().unwrap();
    assert_eq!(context.source(), &NavigationSource::Subcategory("dor".to_owned()));

    assert!(!session.select_prev());
    assert!(session.select_next());
    assert!(session.select_next());
    assert_eq!(session.selected_recipe().unwrap().id, "dr3");
    assert!(!session.select_next());
    assert_eq!(session.selected_recipe().unwrap().id, "dr3");

    assert!(session.select_prev());
    assert_eq!(session.selected_recipe().unwrap().id, "dr2");

    session.close_recipe();
    assert!(session.navigation().is_none());
}

#[test]
fn test_stepping_follows_goal_results() {
    let mut session = dashboard_session();
    session.apply_goal(Goal::Bloat);
    session.select_recipe("d1").unwrap();

    assert!(session.select_next());
    // d2 is skipped because it does not match the goal
    assert_eq!(session.selected_recipe().unwrap().id, "d3");
    assert!(!session.select_next());
}

#[test]
fn test_selection_outside_results_steps_to_first() {
    let mut session = dashboard_session();
    session.select_recipe("o1").unwrap();
    session.apply_goal(Goal::Energy);

    let context = session.navigation().unwrap();
    assert_eq!(context.index(), None);
    assert!(!context.has_prev());

    assert!(!session.select_prev());
    assert!(session.select_next());
    assert_eq!(session.selected_recipe().unwrap().id, "j1");
}
