// ABOUTME: Per-request user profile model in user vocabulary
// ABOUTME: Carries the six matching axes plus goals, conditions, and allergies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

use crate::normalize::{ActivityLevel, BmiCategory, DietType, Gender, Region};
use serde::{Deserialize, Serialize};

/// A user's dietary profile for one recommendation request.
///
/// Attributes arrive in user vocabulary (pre-normalization); the typed
/// accessors run them through the same shared normalizers the plan-record
/// side uses. Constructed per request and discarded with the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Gender label
    pub gender: String,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Target weight, drives goal inference when no explicit goal is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    /// BMI-category label
    pub bmi_category: String,
    /// Activity-level label
    pub activity_level: String,
    /// Diet-type label
    pub diet_type: String,
    /// Region label
    pub region: String,
    /// Goals in priority order; the first element is the primary goal
    #[serde(default)]
    pub goals: Vec<String>,
    /// Free-text condition tags ("pcos", "diabetes"), soft-scoring signals
    #[serde(default)]
    pub health_conditions: Vec<String>,
    /// Free-text allergen tags; drive hard rejection, never soft scoring
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl UserProfile {
    /// First declared goal, if any.
    #[must_use]
    pub fn primary_goal(&self) -> Option<&str> {
        self.goals.first().map(String::as_str).filter(|g| !g.is_empty())
    }

    /// Body mass index from height and weight; `None` for degenerate heights.
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        if self.height_cm <= 0.0 {
            return None;
        }
        let meters = self.height_cm / 100.0;
        Some(self.weight_kg / (meters * meters))
    }

    /// Normalized gender
    #[must_use]
    pub fn gender_norm(&self) -> Gender {
        Gender::normalize(&self.gender)
    }

    /// Normalized region
    #[must_use]
    pub fn region_norm(&self) -> Region {
        Region::normalize(&self.region)
    }

    /// Normalized diet type
    #[must_use]
    pub fn diet_norm(&self) -> DietType {
        DietType::normalize(&self.diet_type)
    }

    /// Normalized BMI category
    #[must_use]
    pub fn bmi_norm(&self) -> BmiCategory {
        BmiCategory::normalize(&self.bmi_category)
    }

    /// Normalized activity level
    #[must_use]
    pub fn activity_norm(&self) -> ActivityLevel {
        ActivityLevel::normalize(&self.activity_level)
    }

    /// Whether any declared health condition contains the given token.
    #[must_use]
    pub fn has_condition(&self, token: &str) -> bool {
        self.health_conditions
            .iter()
            .any(|c| c.to_lowercase().contains(token))
    }
}
