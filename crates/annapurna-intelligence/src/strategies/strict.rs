// ABOUTME: Strict hierarchical matcher requiring exact equality on all six axes
// ABOUTME: Goal resolves through the strict category table; empty result is a valid outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

use crate::goals;
use crate::strategies::Strategy;
use annapurna_core::contracts::{RecommendationResponse, SearchCriteria};
use annapurna_core::models::{PlanRecord, UserProfile};
use rand::seq::SliceRandom;
use tracing::{debug, warn};

/// Strict hierarchical match: category, region, diet, gender, BMI category,
/// and activity must all be equal post-normalization.
///
/// The axes are conceptually checked in that priority order, but semantically
/// the predicate is a single conjunction; ordering only matters for early
/// exit. Matches are shuffled before truncation - a documented variety
/// choice, not hidden nondeterminism: callers wanting stable order sort by
/// plan id.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictMatcher;

impl StrictMatcher {
    /// New stateless matcher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// All records matching the full six-axis conjunction, insertion order.
    #[must_use]
    pub fn matches<'a>(
        &self,
        plans: &'a [PlanRecord],
        user: &UserProfile,
        categories: &[&str],
    ) -> Vec<&'a PlanRecord> {
        let gender = user.gender_norm();
        let region = user.region_norm();
        let diet = user.diet_norm();
        let bmi = user.bmi_norm();
        let activity = user.activity_norm();

        plans
            .iter()
            .filter(|plan| {
                categories.contains(&plan.category_lower().as_str())
                    && plan.region_norm() == region
                    && plan.diet_norm() == diet
                    && plan.gender_norm() == gender
                    && plan.bmi_norm() == bmi
                    && plan.activity_norm() == activity
            })
            .collect()
    }
}

impl Strategy for StrictMatcher {
    fn recommend(
        &self,
        plans: &[PlanRecord],
        user: &UserProfile,
        top_k: usize,
    ) -> RecommendationResponse {
        let Some(goal) = user.primary_goal() else {
            warn!("strict match requested without a goal");
            return RecommendationResponse::not_available(
                "No goal specified; strict matching requires a resolvable goal.",
                SearchCriteria::full(user, None),
            );
        };

        let criteria = SearchCriteria::full(user, Some(goal));

        let Some(categories) = goals::strict_categories(goal, user) else {
            warn!(goal, "goal has no matching category folder");
            return RecommendationResponse::not_available(
                format!("No diet plan category exists for goal \"{goal}\"."),
                criteria,
            );
        };

        debug!(goal, ?categories, "strict match on all six axes");

        let matched = self.matches(plans, user, &categories);
        let total = matched.len();
        debug!(total, "strict match complete");

        if matched.is_empty() {
            return RecommendationResponse::not_available(
                "No diet plan available for your exact requirements.",
                criteria,
            );
        }

        let mut ranked: Vec<_> = matched.into_iter().cloned().map(Into::into).collect();
        ranked.shuffle(&mut rand::thread_rng());
        ranked.truncate(top_k);

        RecommendationResponse::success(ranked, total, criteria)
    }
}
