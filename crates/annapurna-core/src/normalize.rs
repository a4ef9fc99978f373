// ABOUTME: Canonical attribute enums and total normalization functions
// ABOUTME: Maps variant spellings (case, separators, known typos) to one value per axis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

//! Attribute normalization.
//!
//! The plan index stores attributes exactly as they appear in authored
//! document filenames, so the same concept shows up as `non_veg`, `non veg`,
//! `Non-Vegetarian`, or the misspelled `vegeterian`. Each axis has exactly one
//! total normalization function here, applied identically to the plan-record
//! side and the user-profile side before any equality check. Skipping it on
//! either side silently produces zero matches.
//!
//! All normalizers are total. [`DietType`] defaults to `Vegetarian` for
//! null/unrecognized input (matching the authored corpus, which is
//! vegetarian unless labelled otherwise); the remaining axes preserve the
//! unrecognized lowered token in an `Other` variant so it still compares
//! equal to itself.

use serde::{Deserialize, Serialize};

/// Lowercase, trim, and collapse `-`/`_`/whitespace runs into single spaces.
fn canon(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.trim().chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Dietary pattern of a user or an authored plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Plant-based plus dairy
    Vegetarian,
    /// Strictly plant-based
    Vegan,
    /// No restriction
    NonVeg,
    /// Vegetarian plus eggs
    Eggetarian,
}

impl DietType {
    /// Normalize a raw diet label. Total: unrecognized or empty input falls
    /// back to `Vegetarian`.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match canon(raw).as_str() {
            "vegan" => Self::Vegan,
            "non veg" | "nonveg" | "non vegetarian" | "non vegeterian" | "nonvegetarian" => {
                Self::NonVeg
            }
            "eggetarian" | "eggitarian" => Self::Eggetarian,
            _ => Self::Vegetarian,
        }
    }

    /// Diet compatibility partial order: can a user with this diet eat a plan
    /// authored for `plan`? Vegan accepts vegan only; vegetarian accepts
    /// {vegan, vegetarian}; eggetarian additionally accepts eggetarian;
    /// non-veg accepts anything.
    ///
    /// This is the single compatibility definition for the whole engine.
    #[must_use]
    pub fn accepts(self, plan: Self) -> bool {
        match self {
            Self::Vegan => plan == Self::Vegan,
            Self::Vegetarian => matches!(plan, Self::Vegan | Self::Vegetarian),
            Self::Eggetarian => {
                matches!(plan, Self::Vegan | Self::Vegetarian | Self::Eggetarian)
            }
            Self::NonVeg => true,
        }
    }

    /// Canonical token as stored in the index
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::NonVeg => "non_veg",
            Self::Eggetarian => "eggetarian",
        }
    }
}

/// BMI band of a user or an authored plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to 25
    Normal,
    /// BMI 25 to 30
    Overweight,
    /// BMI 30 and above
    Obese,
    /// Unrecognized label, preserved lowered so it still compares to itself
    #[serde(untagged)]
    Other(String),
}

impl BmiCategory {
    /// Normalize a raw BMI-category label. Total: unrecognized input is
    /// passed through as `Other` with the canonical lowered token.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let c = canon(raw);
        match c.as_str() {
            "underweight" | "under weight" => Self::Underweight,
            "normal" | "normal weight" => Self::Normal,
            "overweight" | "over weight" => Self::Overweight,
            "obese" => Self::Obese,
            _ => Self::Other(c),
        }
    }

    /// Categorize a BMI value using WHO cutoffs.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Goal-aware categorization: borderline-low BMI counts as underweight
    /// for weight-gain goals, borderline-high as overweight for weight-loss.
    #[must_use]
    pub fn from_bmi_for_goal(bmi: f64, goal: &str) -> Self {
        let base = Self::from_bmi(bmi);
        if base == Self::Normal {
            let goal = canon(goal);
            if bmi < 20.0 && (goal == "weight gain" || goal == "muscle building") {
                return Self::Underweight;
            }
            if bmi > 24.0 && goal.starts_with("weight loss") {
                return Self::Overweight;
            }
        }
        base
    }
}

/// Daily activity level of a user or an authored plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days a week
    Light,
    /// Moderate exercise 3-5 days a week
    Moderate,
    /// Heavy training ("very_active" in user vocabulary)
    Heavy,
    /// Unrecognized label, preserved lowered so it still compares to itself
    #[serde(untagged)]
    Other(String),
}

impl ActivityLevel {
    /// Normalize a raw activity label. Authored plans write "heavy active",
    /// "heavy activity", or plain "heavy"; user profiles send "very_active".
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let c = canon(raw);
        if c.contains("heavy") || c == "very active" {
            Self::Heavy
        } else if c.contains("moderate") {
            Self::Moderate
        } else if c.contains("light") {
            Self::Light
        } else if c.contains("sedentary") {
            Self::Sedentary
        } else {
            Self::Other(c)
        }
    }
}

/// Regional cuisine of a user or an authored plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// North Indian cuisine
    NorthIndian,
    /// South Indian cuisine
    SouthIndian,
    /// Pan-Indian plans with no regional slant
    Indian,
    /// Unrecognized label, preserved lowered so it still compares to itself
    #[serde(untagged)]
    Other(String),
}

impl Region {
    /// Normalize a raw region label.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let c = canon(raw);
        match c.as_str() {
            "north indian" => Self::NorthIndian,
            "south indian" => Self::SouthIndian,
            "indian" => Self::Indian,
            _ => Self::Other(c),
        }
    }
}

/// Gender axis of a user or an authored plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Plans authored for men
    Male,
    /// Plans authored for women
    Female,
    /// Unrecognized label, preserved lowered so it still compares to itself
    #[serde(untagged)]
    Other(String),
}

impl Gender {
    /// Normalize a raw gender label.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let c = canon(raw);
        match c.as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Other(c),
        }
    }
}

/// Lowercase a free-text category/goal label into the canonical spaced form
/// used for category comparison and condition-substring scoring.
#[must_use]
pub fn canonical_token(raw: &str) -> String {
    canon(raw)
}
