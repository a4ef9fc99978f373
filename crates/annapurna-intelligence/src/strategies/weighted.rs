// ABOUTME: Weighted partial-credit matcher with hard safety filter and ranking
// ABOUTME: Category, diet-exact, region, condition, and age scoring plus calorie adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

//! Weighted score match.
//!
//! Hard-filters on gender, BMI category, activity, and diet compatibility,
//! then ranks survivors by additive partial credit. Region and category are
//! scored rather than filtered - this trades recall for ranking richness
//! versus the strict strategy. Allergen hits are a hard rejection regardless
//! of score.
//!
//! Weights are declared as constants so the priority order (category >>
//! diet-exact >> region/condition/age) is visible at a glance.

use crate::goals;
use crate::strategies::Strategy;
use annapurna_core::contracts::{
    AdjustedNutrition, RankedPlan, RecommendationResponse, SearchCriteria,
};
use annapurna_core::models::{AgeInfo, PlanRecord, UserProfile};
use tracing::debug;

/// Primary-goal alignment, worth more than everything else combined
pub const CATEGORY_WEIGHT: f64 = 1000.0;
/// Exact diet match, beyond the compatibility bar of the hard filter
pub const DIET_EXACT_WEIGHT: f64 = 100.0;
/// Region match
pub const REGION_WEIGHT: f64 = 10.0;
/// Any health-condition token appearing in the category label
pub const CONDITION_WEIGHT: f64 = 10.0;
/// User age inside the plan's authored age range
pub const AGE_IN_RANGE_WEIGHT: f64 = 10.0;
/// User age within this many years of the range scores half credit
pub const AGE_NEAR_RANGE_YEARS: f64 = 5.0;
/// Half credit for a near-range age
pub const AGE_NEAR_RANGE_WEIGHT: f64 = 5.0;

/// Calorie shift per year of age difference against the plan's average age
pub const KCAL_PER_YEAR: f64 = 10.0;
/// Adjusted calorie floors; clamping prevents degenerate near-zero ranges
pub const CALORIES_MIN_FLOOR: f64 = 1000.0;
/// Floor for the adjusted calorie ceiling
pub const CALORIES_MAX_FLOOR: f64 = 1100.0;

/// Weighted partial-credit matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedMatcher;

impl WeightedMatcher {
    /// New stateless matcher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Hard filter: gender, BMI category, and activity must be equal
    /// post-normalization, and the plan's diet must be compatible with the
    /// user's under the shared partial order. Region and category are scored,
    /// not filtered.
    #[must_use]
    pub fn hard_filter(user: &UserProfile, plan: &PlanRecord) -> bool {
        plan.gender_norm() == user.gender_norm()
            && plan.bmi_norm() == user.bmi_norm()
            && plan.activity_norm() == user.activity_norm()
            && user.diet_norm().accepts(plan.diet_norm())
    }

    /// Whether any expanded allergen keyword appears in the record's
    /// ingredient set. A hit excludes the record outright - allergy tags
    /// never participate in soft scoring.
    #[must_use]
    pub fn allergen_conflict(user: &UserProfile, plan: &PlanRecord) -> bool {
        if user.allergies.is_empty() {
            return false;
        }
        let keywords = goals::expanded_allergens(user);
        plan.contains_any_ingredient(&keywords)
    }

    /// Age contribution: full credit inside the authored range, half credit
    /// within [`AGE_NEAR_RANGE_YEARS`] of it, zero otherwise. A record with
    /// no age info scores zero - that is neutral, not a mismatch.
    #[must_use]
    pub fn age_score(user: &UserProfile, plan: &PlanRecord) -> f64 {
        let Some((lo, hi)) = plan.age_info.as_ref().and_then(AgeInfo::bounds) else {
            return 0.0;
        };
        let age = f64::from(user.age);
        if (lo..=hi).contains(&age) {
            AGE_IN_RANGE_WEIGHT
        } else if age >= lo - AGE_NEAR_RANGE_YEARS && age <= hi + AGE_NEAR_RANGE_YEARS {
            AGE_NEAR_RANGE_WEIGHT
        } else {
            0.0
        }
    }

    /// Additive partial-credit score for a record that survived the hard
    /// filter. `categories` is the resolved goal-category list, empty when
    /// the goal is unknown (category credit simply never fires).
    #[must_use]
    pub fn score(user: &UserProfile, plan: &PlanRecord, categories: &[&str]) -> f64 {
        let mut score = 0.0;
        let category = plan.category_lower();

        if categories.contains(&category.as_str()) {
            score += CATEGORY_WEIGHT;
        }
        if plan.diet_norm() == user.diet_norm() {
            score += DIET_EXACT_WEIGHT;
        }
        if plan.region_norm() == user.region_norm() {
            score += REGION_WEIGHT;
        }
        if user
            .health_conditions
            .iter()
            .any(|condition| condition_matches_category(condition, &category))
        {
            score += CONDITION_WEIGHT;
        }
        score += Self::age_score(user, plan);
        score
    }

    /// Age-difference calorie adjustment, one consistent linear rule:
    /// `delta = KCAL_PER_YEAR * (plan_average_age - user_age)`. A younger
    /// user than the plan's audience gets more calories, an older one fewer.
    /// The adjusted floor is clamped to at least [`CALORIES_MIN_FLOOR`] and
    /// the ceiling to at least [`CALORIES_MAX_FLOOR`].
    ///
    /// Returns `None` when the record has no age average or no calorie range;
    /// nutrition then passes through unadjusted.
    #[must_use]
    pub fn adjust_nutrition(user: &UserProfile, plan: &PlanRecord) -> Option<AdjustedNutrition> {
        let plan_avg = plan.age_info.as_ref().and_then(AgeInfo::average)?;
        let nutrition = plan.nutrition.as_ref()?;
        let (cal_min, cal_max) = match (nutrition.calories_min, nutrition.calories_max) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => return None,
        };

        let delta = KCAL_PER_YEAR * (plan_avg - f64::from(user.age));
        Some(AdjustedNutrition {
            calories_min: (cal_min + delta).max(CALORIES_MIN_FLOOR),
            calories_max: (cal_max + delta).max(CALORIES_MAX_FLOOR),
            applied_delta: delta,
        })
    }
}

/// Whether a free-text condition tag matches the category label. Tags arrive
/// as authored prose ("PCOS (diagnosed)", "type 2 diabetic"), so the tag is
/// tokenized and each token tested as a substring of the category; the same
/// loose containment [`UserProfile::has_condition`] uses for goal widening.
/// Tokens shorter than three characters are noise ("2", "of") and skipped.
fn condition_matches_category(condition: &str, category: &str) -> bool {
    condition
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| token.len() >= 3 && category.contains(token))
}

impl Strategy for WeightedMatcher {
    fn recommend(
        &self,
        plans: &[PlanRecord],
        user: &UserProfile,
        top_k: usize,
    ) -> RecommendationResponse {
        let goal = user.primary_goal().unwrap_or("maintain");
        let categories = goals::strict_categories(goal, user).unwrap_or_default();
        let criteria = SearchCriteria::full(user, Some(goal));

        debug!(goal, ?categories, "weighted match");

        let mut scored: Vec<RankedPlan> = plans
            .iter()
            .filter(|plan| Self::hard_filter(user, plan))
            .filter(|plan| !Self::allergen_conflict(user, plan))
            .map(|plan| {
                let score = Self::score(user, plan, &categories);
                let adjusted = Self::adjust_nutrition(user, plan);
                RankedPlan {
                    plan: plan.clone(),
                    score: Some(score),
                    adjusted_nutrition: adjusted,
                }
            })
            .collect();

        // Stable sort keeps insertion order among equal scores.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let total = scored.len();
        debug!(total, "weighted match complete");

        if scored.is_empty() {
            return RecommendationResponse::not_available(
                "No diet plan passed the safety and suitability filters.",
                criteria,
            );
        }

        scored.truncate(top_k);
        RecommendationResponse::success(scored, total, criteria)
    }
}
