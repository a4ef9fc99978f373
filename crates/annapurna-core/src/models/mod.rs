// ABOUTME: Domain models for the annapurna diet-plan engine
// ABOUTME: Plan records, user profiles, meal options, and assembled daily plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

/// Meal slots, meal options, and assembled daily plans
pub mod meal;
/// Indexed plan records with nutrition ranges and age metadata
pub mod plan;
/// Per-request user profiles
pub mod profile;

pub use meal::{DailyPlan, MealOption, MealSlot, MealsBySlot};
pub use plan::{AgeInfo, NutritionRange, PlanRecord};
pub use profile::UserProfile;
