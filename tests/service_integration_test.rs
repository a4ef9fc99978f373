// ABOUTME: End-to-end tests over a temp index file and authored plan documents
// ABOUTME: Startup failures, legacy index format, recommend-then-cycle flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;

use annapurna::{PlanIndex, RecommendationService, ServiceConfig};
use annapurna_core::contracts::RecommendationStatus;
use annapurna_core::errors::{CycleError, EngineError};
use annapurna_core::models::MealSlot;
use annapurna_intelligence::StrategyKind;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

const PLAN_DOCUMENT: &str = "\
Weight Loss Plan - North Indian Vegetarian

Early Morning (On Waking)
Option 1 – Warm Lemon Water
Nutritive Values: 10 kcal

Breakfast
Option 1 – Vegetable Poha
Ingredients: poha, peas, carrot
Nutritive Values: 320 kcal | 8 g protein | 52 g carbs | 9 g fat | 4 g fiber

Option 2 – Moong Dal Chilla
Nutritive Values: 280 kcal | 14 g protein

Lunch
Option 1 – Dal Tadka + Rice
Nutritive Values: 520 kcal | 18 g protein
";

#[test]
fn missing_index_is_a_fatal_startup_error() {
    let error = PlanIndex::load(Path::new("/nonexistent/plan_index.json")).unwrap_err();
    assert!(matches!(error, EngineError::IndexNotFound { .. }));
}

#[test]
fn malformed_index_reports_format_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, b"{\"plans\": 42}").unwrap();
    let error = PlanIndex::load(file.path()).unwrap_err();
    assert!(matches!(error, EngineError::IndexFormat { .. }));
}

#[test]
fn legacy_bare_array_index_loads() {
    let plans = vec![common::plan("wl-1", "weight_loss")];
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, serde_json::to_string(&plans).unwrap().as_bytes())
        .unwrap();

    let index = PlanIndex::load(file.path()).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.category_stats().get("weight_loss"), Some(&1));
}

#[test]
fn recommend_then_cycle_over_a_real_document() {
    let dir = tempfile::tempdir().unwrap();
    let document_path = dir.path().join("wl-1.txt");
    fs::write(&document_path, PLAN_DOCUMENT).unwrap();

    let mut record = common::plan("wl-1", "weight_loss");
    record.file_path = document_path.display().to_string();
    let index_file = common::write_index(&[record]);

    let config = ServiceConfig {
        index_path: index_file.path().to_path_buf(),
        meal_cache_entries: 16,
    };
    let service = RecommendationService::from_config(&config).unwrap();

    let user = common::user("weight_loss");
    let response = service.recommend(StrategyKind::Weighted, &user, 5);
    assert_eq!(response.status, RecommendationStatus::Success);
    let plan_id = response.recommendations[0].plan.id().to_owned();

    let selected = service.select_by_ids(&[plan_id]);
    let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let cycle = service.generate_cycle(&selected, 6, start).unwrap();

    assert_eq!(cycle.len(), 6);
    assert_eq!(cycle[0].day_name, "Monday");
    // Two breakfast options alternate through the 3-slot rotation; the
    // single-option lunch resolves every day.
    assert_eq!(cycle[0].meals[&MealSlot::Breakfast].name, "Vegetable Poha");
    assert_eq!(cycle[1].meals[&MealSlot::Breakfast].name, "Moong Dal Chilla");
    assert_eq!(cycle[2].meals[&MealSlot::Breakfast].name, "Vegetable Poha");
    for day in &cycle {
        assert_eq!(day.meals[&MealSlot::Lunch].name, "Dal Tadka + Rice");
        assert_eq!(day.meals.len(), MealSlot::ALL.len());
    }
    // Slots the document never mentions come back as named placeholders.
    assert_eq!(cycle[0].meals[&MealSlot::Dinner].name, "Dinner");
    assert_eq!(cycle[0].meals[&MealSlot::Dinner].calories, 0);
}

#[test]
fn unknown_plan_ids_surface_as_no_plans_selected() {
    let index_file = common::write_index(&[common::plan("wl-1", "weight_loss")]);
    let config = ServiceConfig {
        index_path: index_file.path().to_path_buf(),
        meal_cache_entries: 16,
    };
    let service = RecommendationService::from_config(&config).unwrap();

    let selected = service.select_by_ids(&["does/not/exist.txt".into()]);
    let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let error = service.generate_cycle(&selected, 7, start).unwrap_err();
    assert_eq!(error, CycleError::NoPlansSelected);
}

#[test]
fn unreadable_documents_fail_the_cycle_loudly() {
    // The indexed document does not exist on disk; extraction yields nothing.
    let index_file = common::write_index(&[common::plan("wl-1", "weight_loss")]);
    let config = ServiceConfig {
        index_path: index_file.path().to_path_buf(),
        meal_cache_entries: 16,
    };
    let service = RecommendationService::from_config(&config).unwrap();

    let selected = service.select_by_ids(&["weight_loss/wl-1.txt".into()]);
    let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let error = service.generate_cycle(&selected, 7, start).unwrap_err();
    assert_eq!(error, CycleError::NoMealsExtracted);
}
