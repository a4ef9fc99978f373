// ABOUTME: The three matching policies over the read-only plan index
// ABOUTME: Strategy trait, StrategyKind selector, and the strict/relaxed/weighted matchers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

//! Matching strategies.
//!
//! All three policies consume the same flat record slice and produce the same
//! [`RecommendationResponse`] contract. They differ only in predicate width:
//!
//! | strategy | hard filter | scoring |
//! |----------|-------------|---------|
//! | strict   | all six axes | none (documented shuffle for variety) |
//! | relaxed  | goal + diet + region | none (insertion order) |
//! | weighted | gender + BMI + activity + diet compatibility + allergens | partial credit, ranked |

use annapurna_core::contracts::RecommendationResponse;
use annapurna_core::models::{PlanRecord, UserProfile};
use std::fmt;
use std::str::FromStr;

/// Relaxed goal-only matcher
pub mod relaxed;
/// Strict hierarchical six-axis matcher
pub mod strict;
/// Weighted partial-credit scoring matcher
pub mod weighted;

pub use relaxed::RelaxedMatcher;
pub use strict::StrictMatcher;
pub use weighted::WeightedMatcher;

/// A matching policy over the in-memory plan index.
///
/// Strategies are stateless; the index is read-only after load, so one
/// instance serves concurrent calls without locking.
pub trait Strategy: Send + Sync {
    /// Rank up to `top_k` candidates for `user` out of `plans`.
    fn recommend(
        &self,
        plans: &[PlanRecord],
        user: &UserProfile,
        top_k: usize,
    ) -> RecommendationResponse;
}

/// Selector for the three built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// All six axes must match exactly
    Strict,
    /// Goal + diet + region only
    Relaxed,
    /// Hard safety filter plus partial-credit ranking
    Weighted,
}

impl StrategyKind {
    /// All selectable strategies.
    pub const ALL: [Self; 3] = [Self::Strict, Self::Relaxed, Self::Weighted];

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Relaxed => "relaxed",
            Self::Weighted => "weighted",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" | "exact" => Ok(Self::Strict),
            "relaxed" | "goal" => Ok(Self::Relaxed),
            "weighted" | "scored" => Ok(Self::Weighted),
            other => Err(format!("unknown strategy '{other}' (expected strict, relaxed, or weighted)")),
        }
    }
}
