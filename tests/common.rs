// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Plan record and user profile builders plus a temp index writer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, dead_code)]

use annapurna_core::models::{AgeInfo, NutritionRange, PlanRecord, UserProfile};
use std::collections::BTreeSet;
use std::io::Write;
use tempfile::NamedTempFile;

/// A baseline indexed plan that exactly matches [`user`] on all six axes.
#[must_use]
pub fn plan(id: &str, category: &str) -> PlanRecord {
    PlanRecord {
        file_path: format!("plans/{category}/{id}.txt"),
        relative_path: Some(format!("{category}/{id}.txt")),
        filename: Some(format!("{id}.txt")),
        title: Some(id.replace('-', " ")),
        gender: Some("Female".into()),
        region: Some("north_indian".into()),
        diet_type: Some("vegetarian".into()),
        bmi_category: Some("overweight".into()),
        activity: Some("moderate".into()),
        category: Some(category.into()),
        age_info: Some(AgeInfo {
            age_min: Some(25),
            age_max: Some(35),
            age_avg: Some(30.0),
        }),
        nutrition: Some(NutritionRange {
            calories_min: Some(1400.0),
            calories_max: Some(1600.0),
            protein_min: Some(60.0),
            protein_max: Some(80.0),
            ..NutritionRange::default()
        }),
        ingredients: BTreeSet::new(),
        content_preview: Some(format!("A {category} plan built around {id}")),
    }
}

/// A baseline user that exactly matches [`plan`] on all six axes.
#[must_use]
pub fn user(goal: &str) -> UserProfile {
    UserProfile {
        gender: "female".into(),
        age: 30,
        height_cm: 162.0,
        weight_kg: 72.0,
        target_weight_kg: None,
        bmi_category: "Overweight".into(),
        activity_level: "Moderate".into(),
        diet_type: "Vegetarian".into(),
        region: "North Indian".into(),
        goals: if goal.is_empty() {
            vec![]
        } else {
            vec![goal.into()]
        },
        health_conditions: vec![],
        allergies: vec![],
    }
}

/// Write records into a temp file in the tagged index format.
#[must_use]
pub fn write_index(plans: &[PlanRecord]) -> NamedTempFile {
    let document = serde_json::json!({
        "metadata": { "total_plans": plans.len() },
        "plans": plans,
    });
    let mut file = NamedTempFile::new().expect("temp index file");
    file.write_all(serde_json::to_string(&document).unwrap().as_bytes())
        .expect("write temp index");
    file
}
