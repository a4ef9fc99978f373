// ABOUTME: Integration tests for the strict six-axis matching strategy
// ABOUTME: Exact scenario, unknown goals, and both-sides normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;

use annapurna_core::contracts::RecommendationStatus;
use annapurna_intelligence::{Strategy, StrictMatcher};

#[test]
fn exact_profile_matches_single_identical_record() {
    let plans = vec![
        common::plan("wl-1", "weight_loss"),
        common::plan("gain-1", "weight_gain"),
    ];
    let user = common::user("weight_loss");

    let response = StrictMatcher::new().recommend(&plans, &user, 5);

    assert_eq!(response.status, RecommendationStatus::Success);
    assert_eq!(response.total_matches, 1);
    assert_eq!(response.recommendations.len(), 1);
    assert_eq!(
        response.recommendations[0].plan.category.as_deref(),
        Some("weight_loss")
    );
}

#[test]
fn any_axis_mismatch_empties_the_result() {
    let mut plan = common::plan("wl-1", "weight_loss");
    plan.gender = Some("Male".into());
    let user = common::user("weight_loss");

    let response = StrictMatcher::new().recommend(&[plan], &user, 5);

    assert_eq!(response.status, RecommendationStatus::NotAvailable);
    assert_eq!(response.total_matches, 0);
    assert!(response.message.is_some());
}

#[test]
fn unknown_goal_reports_not_available_with_goal_name() {
    let plans = vec![common::plan("wl-1", "weight_loss")];
    let mut user = common::user("run_marathon");

    let response = StrictMatcher::new().recommend(&plans, &user, 5);
    assert_eq!(response.status, RecommendationStatus::NotAvailable);
    assert!(response.message.unwrap().contains("run_marathon"));

    user.goals.clear();
    let response = StrictMatcher::new().recommend(&plans, &user, 5);
    assert_eq!(response.status, RecommendationStatus::NotAvailable);
}

#[test]
fn variant_spellings_on_both_sides_still_match() {
    let mut plan = common::plan("wl-1", "weight_loss");
    plan.diet_type = Some("Vegeterian".into());
    plan.region = Some("North-Indian".into());
    plan.bmi_category = Some("Over Weight".into());
    plan.activity = Some("Moderate Activity".into());

    let mut user = common::user("weight loss");
    user.diet_type = "VEGETARIAN".into();
    user.region = "north indian".into();

    let response = StrictMatcher::new().recommend(&[plan], &user, 5);
    assert_eq!(response.status, RecommendationStatus::Success);
    assert_eq!(response.total_matches, 1);
}

#[test]
fn condition_widened_categories_match_condition_folders() {
    let plans = vec![common::plan("pcos-1", "weight_loss_pcos")];
    let mut user = common::user("weight_loss");
    user.health_conditions = vec!["PCOS".into()];

    let response = StrictMatcher::new().recommend(&plans, &user, 5);
    assert_eq!(response.status, RecommendationStatus::Success);
    assert_eq!(response.total_matches, 1);
}

#[test]
fn top_k_truncates_but_total_reports_all_matches() {
    let plans: Vec<_> = (0..8)
        .map(|i| common::plan(&format!("wl-{i}"), "weight_loss"))
        .collect();
    let user = common::user("weight_loss");

    let response = StrictMatcher::new().recommend(&plans, &user, 3);
    assert_eq!(response.status, RecommendationStatus::Success);
    assert_eq!(response.total_matches, 8);
    assert_eq!(response.recommendations.len(), 3);
}
