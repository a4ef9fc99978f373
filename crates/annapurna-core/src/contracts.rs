// ABOUTME: Uniform recommendation result contract shared by every strategy
// ABOUTME: RecommendationResponse, RankedPlan, SearchCriteria, and AdjustedNutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

//! The result contract is identical across the three matching strategies so
//! callers can switch strategies without changing response handling. A
//! zero-candidate outcome is a first-class `NotAvailable` status with a
//! human-readable message and the echoed criteria, never an error.

use crate::models::{PlanRecord, UserProfile};
use serde::{Deserialize, Serialize};

/// Outcome of a recommendation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    /// At least one candidate matched
    Success,
    /// No plan matched the searched criteria - an expected outcome, not an
    /// error
    NotAvailable,
}

/// Echo of the user inputs a strategy actually searched on, returned for
/// diagnostics so a UI can explain why nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Resolved primary goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Gender, when the strategy filtered on it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Age, when the strategy used it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Diet type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<String>,
    /// Region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// BMI category, when the strategy filtered on it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi_category: Option<String>,
    /// Activity level, when the strategy filtered on it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
}

impl SearchCriteria {
    /// Criteria echo for strategies that search all six axes.
    #[must_use]
    pub fn full(user: &UserProfile, goal: Option<&str>) -> Self {
        Self {
            goal: goal.map(str::to_owned),
            gender: Some(user.gender.clone()),
            age: Some(user.age),
            diet_type: Some(user.diet_type.clone()),
            region: Some(user.region.clone()),
            bmi_category: Some(user.bmi_category.clone()),
            activity_level: Some(user.activity_level.clone()),
        }
    }

    /// Criteria echo for the relaxed strategy (goal + diet + region only).
    #[must_use]
    pub fn goal_only(user: &UserProfile, goal: &str) -> Self {
        Self {
            goal: Some(goal.to_owned()),
            diet_type: Some(user.diet_type.clone()),
            region: Some(user.region.clone()),
            ..Self::default()
        }
    }
}

/// Calorie range shifted by the age-difference heuristic, with the applied
/// delta recorded for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedNutrition {
    /// Adjusted calorie floor, clamped to at least 1000 kcal
    pub calories_min: f64,
    /// Adjusted calorie ceiling, clamped to at least 1100 kcal
    pub calories_max: f64,
    /// Signed kcal delta that was applied before clamping
    pub applied_delta: f64,
}

/// A plan record as ranked by a strategy. Score scale is strategy-specific;
/// strategies that do not score leave it unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPlan {
    /// The matched record
    #[serde(flatten)]
    pub plan: PlanRecord,
    /// Strategy-specific score, absent for unscored strategies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Age-adjusted calorie range, absent when the record has no age info or
    /// no calorie range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_nutrition: Option<AdjustedNutrition>,
}

impl From<PlanRecord> for RankedPlan {
    fn from(plan: PlanRecord) -> Self {
        Self {
            plan,
            score: None,
            adjusted_nutrition: None,
        }
    }
}

/// Uniform response of every matching strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Success or `NotAvailable`
    pub status: RecommendationStatus,
    /// Human-readable explanation, always set for `NotAvailable`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Ranked candidates, best first
    pub recommendations: Vec<RankedPlan>,
    /// Matches found before top-k truncation
    pub total_matches: usize,
    /// Echo of the searched inputs
    pub criteria: SearchCriteria,
}

impl RecommendationResponse {
    /// Successful response; `total` is the match count before truncation.
    #[must_use]
    pub fn success(recommendations: Vec<RankedPlan>, total: usize, criteria: SearchCriteria) -> Self {
        Self {
            status: RecommendationStatus::Success,
            message: None,
            recommendations,
            total_matches: total,
            criteria,
        }
    }

    /// Zero-candidate response with a diagnostic message.
    #[must_use]
    pub fn not_available(message: impl Into<String>, criteria: SearchCriteria) -> Self {
        Self {
            status: RecommendationStatus::NotAvailable,
            message: Some(message.into()),
            recommendations: Vec::new(),
            total_matches: 0,
            criteria,
        }
    }
}
