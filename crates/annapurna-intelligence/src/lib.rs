// ABOUTME: Plan-matching strategies and meal-cycle assembly for annapurna
// ABOUTME: Strict, relaxed, and weighted matchers plus the rotation assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

//! # annapurna-intelligence
//!
//! Three independent matching policies over the same read-only plan index:
//!
//! - [`strategies::StrictMatcher`] - all six axes must match exactly
//! - [`strategies::RelaxedMatcher`] - goal + diet + region only, maximizing
//!   recall
//! - [`strategies::WeightedMatcher`] - hard safety filter plus partial-credit
//!   scoring and age-based calorie adjustment
//!
//! plus the [`cycle::CycleAssembler`], which rotates 1-5 selected plans into
//! an N-day schedule of complete daily meal sets.

/// Meal-cycle assembly by plan and option rotation
pub mod cycle;
/// Goal-to-category and allergen-to-ingredient tables
pub mod goals;
/// The three matching strategies
pub mod strategies;

pub use cycle::{CycleAssembler, SelectedPlan};
pub use strategies::{RelaxedMatcher, StrictMatcher, Strategy, StrategyKind, WeightedMatcher};
