// ABOUTME: Core types for the annapurna diet-plan engine
// ABOUTME: Domain models, attribute normalization, result contracts, and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

//! # annapurna-core
//!
//! Foundation crate for the annapurna diet-plan recommendation engine:
//!
//! - [`models`] - plan records, user profiles, meals, and daily plans
//! - [`normalize`] - canonical attribute enums and total normalization
//! - [`contracts`] - the uniform recommendation result contract
//! - [`errors`] - typed errors for startup and cycle-assembly failures
//!
//! The invariant this crate exists to enforce: plan-record attributes arrive
//! as raw variant spellings ("non veg", "Normal Weight", "heavy active") and
//! every comparison anywhere in the system goes through the single shared
//! normalizer per axis in [`normalize`]. Comparing raw strings across
//! components is the bug class this layout closes.

/// Uniform recommendation result contract shared by all strategies
pub mod contracts;
/// Typed errors for startup and cycle-assembly failures
pub mod errors;
/// Meal extraction collaborator contract
pub mod extraction;
/// Domain models: plan records, user profiles, meals, daily plans
pub mod models;
/// Canonical attribute enums and total normalization functions
pub mod normalize;

pub use contracts::{
    AdjustedNutrition, RankedPlan, RecommendationResponse, RecommendationStatus, SearchCriteria,
};
pub use errors::{CycleError, EngineError};
pub use extraction::MealParser;
pub use models::{
    AgeInfo, DailyPlan, MealOption, MealSlot, MealsBySlot, NutritionRange, PlanRecord, UserProfile,
};
pub use normalize::{ActivityLevel, BmiCategory, DietType, Gender, Region};
