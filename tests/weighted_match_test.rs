// ABOUTME: Integration tests for the weighted partial-credit strategy
// ABOUTME: Score ordering, allergen rejection, age tiers, calorie adjustment clamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;

use annapurna_core::contracts::RecommendationStatus;
use annapurna_core::models::{AgeInfo, NutritionRange};
use annapurna_intelligence::strategies::weighted::WeightedMatcher;
use annapurna_intelligence::{Strategy, StrictMatcher};

#[test]
fn diet_exact_outranks_region_match() {
    // Both plans share the user's goal category. One matches the diet exactly
    // but not the region (1000 + 100); the other matches the region but holds
    // a compatible, non-identical diet (1000 + 10).
    let mut diet_exact = common::plan("diet-exact", "weight_loss");
    diet_exact.region = Some("south_indian".into());

    let mut region_only = common::plan("region-only", "weight_loss");
    region_only.diet_type = Some("vegan".into());

    let user = common::user("weight_loss");
    let response = WeightedMatcher::new().recommend(&[region_only, diet_exact], &user, 5);

    assert_eq!(response.status, RecommendationStatus::Success);
    assert_eq!(response.recommendations.len(), 2);
    assert_eq!(response.recommendations[0].plan.id(), "weight_loss/diet-exact.txt");
    let top = response.recommendations[0].score.unwrap();
    let second = response.recommendations[1].score.unwrap();
    assert!(top > second);
}

#[test]
fn allergen_hit_rejects_regardless_of_score() {
    // A perfect-score plan containing paneer must not merely rank lower than
    // an otherwise-mediocre plan for a dairy-allergic user; it must be absent.
    let mut perfect = common::plan("perfect", "weight_loss");
    perfect.ingredients = ["paneer bhurji", "spinach"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    let mut modest = common::plan("modest", "maintenance");
    modest.ingredients = ["rice", "dal"].iter().map(|s| (*s).to_string()).collect();

    let mut user = common::user("weight_loss");
    user.allergies = vec!["dairy".into()];

    let response = WeightedMatcher::new().recommend(&[perfect, modest], &user, 5);
    assert_eq!(response.recommendations.len(), 1);
    assert_eq!(response.recommendations[0].plan.id(), "maintenance/modest.txt");
}

#[test]
fn hard_filter_drops_incompatible_diet() {
    // Vegetarian user, non-veg plan: excluded before scoring.
    let mut nonveg = common::plan("nv", "weight_loss");
    nonveg.diet_type = Some("non_veg".into());

    let user = common::user("weight_loss");
    let response = WeightedMatcher::new().recommend(&[nonveg], &user, 5);

    assert_eq!(response.status, RecommendationStatus::NotAvailable);
    assert!(response.message.is_some());
}

#[test]
fn age_score_tiers_and_neutral_missing_age() {
    let in_range = common::plan("in-range", "weight_loss");
    let user = common::user("weight_loss");
    assert!((WeightedMatcher::age_score(&user, &in_range) - 10.0).abs() < f64::EPSILON);

    let mut near = common::plan("near", "weight_loss");
    near.age_info = Some(AgeInfo {
        age_min: Some(33),
        age_max: Some(40),
        age_avg: None,
    });
    assert!((WeightedMatcher::age_score(&user, &near) - 5.0).abs() < f64::EPSILON);

    let mut far = common::plan("far", "weight_loss");
    far.age_info = Some(AgeInfo {
        age_min: Some(50),
        age_max: Some(60),
        age_avg: None,
    });
    assert!(WeightedMatcher::age_score(&user, &far).abs() < f64::EPSILON);

    let mut unknown = common::plan("unknown", "weight_loss");
    unknown.age_info = None;
    assert!(WeightedMatcher::age_score(&user, &unknown).abs() < f64::EPSILON);
}

#[test]
fn health_condition_in_category_earns_condition_credit() {
    // Same plan, same goal categories; the only difference is the declared
    // condition, so the score gap is exactly the condition credit. The tag is
    // authored prose, not a bare token, matching how widening treats it.
    let plan = common::plan("pcos-1", "weight_loss_pcos");
    let categories = ["weight_loss_pcos"];

    let mut with_condition = common::user("weight_loss");
    with_condition.health_conditions = vec!["PCOS (diagnosed)".into()];
    let without_condition = common::user("weight_loss");

    let scored = WeightedMatcher::score(&with_condition, &plan, &categories);
    let baseline = WeightedMatcher::score(&without_condition, &plan, &categories);
    assert!((scored - baseline - 10.0).abs() < f64::EPSILON);

    // An unrelated condition earns nothing.
    let mut unrelated = common::user("weight_loss");
    unrelated.health_conditions = vec!["thyroid".into()];
    let unrelated_score = WeightedMatcher::score(&unrelated, &plan, &categories);
    assert!((unrelated_score - baseline).abs() < f64::EPSILON);
}

#[test]
fn missing_age_info_leaves_nutrition_untouched() {
    let mut plan = common::plan("no-age", "weight_loss");
    plan.age_info = None;
    let user = common::user("weight_loss");

    assert!(WeightedMatcher::adjust_nutrition(&user, &plan).is_none());
}

#[test]
fn younger_user_gains_calories_older_loses() {
    // Plan average age 30. A 20-year-old gets +100 kcal, a 40-year-old -100.
    let plan = common::plan("wl", "weight_loss");

    let mut young = common::user("weight_loss");
    young.age = 20;
    let adjusted = WeightedMatcher::adjust_nutrition(&young, &plan).unwrap();
    assert!((adjusted.applied_delta - 100.0).abs() < f64::EPSILON);
    assert!((adjusted.calories_min - 1500.0).abs() < f64::EPSILON);
    assert!((adjusted.calories_max - 1700.0).abs() < f64::EPSILON);

    let mut older = common::user("weight_loss");
    older.age = 40;
    let adjusted = WeightedMatcher::adjust_nutrition(&older, &plan).unwrap();
    assert!((adjusted.applied_delta + 100.0).abs() < f64::EPSILON);
    assert!((adjusted.calories_min - 1300.0).abs() < f64::EPSILON);
}

#[test]
fn adjustment_clamps_to_floor_values() {
    // Large negative delta would push the range below the floors.
    let mut plan = common::plan("low-cal", "weight_loss");
    plan.nutrition = Some(NutritionRange {
        calories_min: Some(1050.0),
        calories_max: Some(1150.0),
        ..NutritionRange::default()
    });

    let mut user = common::user("weight_loss");
    user.age = 60; // delta = 10 * (30 - 60) = -300

    let adjusted = WeightedMatcher::adjust_nutrition(&user, &plan).unwrap();
    assert!((adjusted.calories_min - 1000.0).abs() < f64::EPSILON);
    assert!((adjusted.calories_max - 1100.0).abs() < f64::EPSILON);
    assert!((adjusted.applied_delta + 300.0).abs() < f64::EPSILON);
}

#[test]
fn every_strict_match_survives_the_weighted_hard_filter() {
    // Strict equality on all six axes implies the weighted hard filter
    // (equality on its three axes plus diet compatibility).
    let mut plans = vec![
        common::plan("wl-0", "weight_loss"),
        common::plan("wl-1", "weight_loss"),
        common::plan("gain-0", "weight_gain"),
    ];
    plans[1].diet_type = Some("vegeterian".into());

    let user = common::user("weight_loss");
    let strict = StrictMatcher::new().recommend(&plans, &user, 100);
    let weighted = WeightedMatcher::new().recommend(&plans, &user, 100);

    let weighted_ids: Vec<_> = weighted
        .recommendations
        .iter()
        .map(|r| r.plan.id().to_owned())
        .collect();
    for ranked in &strict.recommendations {
        assert!(weighted_ids.contains(&ranked.plan.id().to_owned()));
    }
}
