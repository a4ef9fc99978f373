// ABOUTME: Relaxed goal-only matcher filtering on category, diet, and region
// ABOUTME: Three-tier goal resolution: explicit goal, weight direction, maintain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

use crate::goals;
use crate::strategies::Strategy;
use annapurna_core::contracts::{RecommendationResponse, SearchCriteria};
use annapurna_core::models::{PlanRecord, UserProfile};
use tracing::debug;

/// Relaxed goal match: a record matches iff its category equals the resolved
/// goal category AND its normalized diet equals the user's AND its region
/// equals the user's.
///
/// This strategy deliberately ignores gender, BMI category, activity, age,
/// allergies, and health conditions. That is a recall-maximizing design
/// choice: it guarantees availability when the strict predicate comes up
/// empty, at the price of coarser fit. Matches keep insertion order; all are
/// equally ranked.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelaxedMatcher;

impl RelaxedMatcher {
    /// New stateless matcher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolve the primary goal with the three-tier fallback: the explicit
    /// first goal, else the direction of target weight vs current weight,
    /// else "maintain".
    #[must_use]
    pub fn resolve_goal(user: &UserProfile) -> String {
        if let Some(goal) = user.primary_goal() {
            return goal.to_owned();
        }
        if let Some(target) = user.target_weight_kg {
            if target > user.weight_kg {
                return "weight_gain".to_owned();
            }
            if target < user.weight_kg {
                return "weight_loss".to_owned();
            }
        }
        "maintain".to_owned()
    }
}

impl Strategy for RelaxedMatcher {
    fn recommend(
        &self,
        plans: &[PlanRecord],
        user: &UserProfile,
        top_k: usize,
    ) -> RecommendationResponse {
        let goal = Self::resolve_goal(user);
        let category = goals::relaxed_category(&goal);
        let diet = user.diet_norm();
        let region = user.region_norm();

        debug!(%goal, %category, "relaxed match on goal + diet + region");

        let matched: Vec<&PlanRecord> = plans
            .iter()
            .filter(|plan| {
                plan.category_lower() == category
                    && plan.diet_norm() == diet
                    && plan.region_norm() == region
            })
            .collect();

        let total = matched.len();
        debug!(total, "relaxed match complete");

        let criteria = SearchCriteria::goal_only(user, &goal);

        if matched.is_empty() {
            return RecommendationResponse::not_available(
                format!(
                    "No diet plans found for goal \"{goal}\", diet \"{}\" in region \"{}\"",
                    user.diet_type, user.region
                ),
                criteria,
            );
        }

        let ranked = matched
            .into_iter()
            .take(top_k)
            .cloned()
            .map(Into::into)
            .collect();

        RecommendationResponse::success(ranked, total, criteria)
    }
}
