// ABOUTME: Indexed plan-record model loaded from the pre-built document index
// ABOUTME: AgeInfo and NutritionRange definitions with per-field optionality
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

use crate::normalize::{ActivityLevel, BmiCategory, DietType, Gender, Region};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Age range parsed out of a plan document's profile header.
///
/// Absent entirely when the document carries no parseable age; scoring treats
/// that as neutral, never as a mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeInfo {
    /// Lower bound of the authored age range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_min: Option<u32>,
    /// Upper bound of the authored age range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_max: Option<u32>,
    /// Average of the authored range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_avg: Option<f64>,
}

impl AgeInfo {
    /// Resolved `(min, max)` bounds, falling back to the average when only it
    /// is present. `None` when the record carries no usable age at all.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let min = self
            .age_min
            .map(f64::from)
            .or(self.age_avg)
            .or(self.age_max.map(f64::from));
        let max = self
            .age_max
            .map(f64::from)
            .or(self.age_avg)
            .or(self.age_min.map(f64::from));
        match (min, max) {
            (Some(lo), Some(hi)) => Some((lo, hi)),
            _ => None,
        }
    }

    /// Average age, derived from the bounds midpoint when not authored.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        self.age_avg
            .or_else(|| self.bounds().map(|(lo, hi)| (lo + hi) / 2.0))
    }
}

/// Daily nutrition ranges extracted from a plan document. Every field is
/// optional: authored documents frequently omit one or more macros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionRange {
    /// Daily calorie floor (kcal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_min: Option<f64>,
    /// Daily calorie ceiling (kcal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_max: Option<f64>,
    /// Daily protein floor (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_min: Option<f64>,
    /// Daily protein ceiling (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_max: Option<f64>,
    /// Daily carbohydrate floor (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_min: Option<f64>,
    /// Daily carbohydrate ceiling (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_max: Option<f64>,
    /// Daily fat floor (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_min: Option<f64>,
    /// Daily fat ceiling (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_max: Option<f64>,
    /// Daily fiber floor (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_min: Option<f64>,
    /// Daily fiber ceiling (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_max: Option<f64>,
}

/// One indexed diet-plan document's extracted metadata.
///
/// Categorical attributes are stored exactly as they appear in the authored
/// filenames (raw variant spellings). Consumers never compare these strings
/// directly; the typed accessors below run them through the shared
/// normalizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    /// Locator of the backing document
    pub file_path: String,
    /// Path relative to the corpus root, used as the stable plan id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
    /// Bare document filename
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Plan title extracted from the document's first line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Raw gender label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Raw region label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Raw diet-type label (variant spellings expected)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<String>,
    /// Raw BMI-category label (variant spellings expected)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi_category: Option<String>,
    /// Raw activity label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    /// Goal/topic label, e.g. `weight_loss_pcos`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Age range parsed from the document, absent when unparseable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_info: Option<AgeInfo>,
    /// Daily nutrition ranges, absent or partial for many documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionRange>,
    /// Lowercase ingredient keywords present in the document, used only for
    /// allergen rejection
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub ingredients: BTreeSet<String>,
    /// First lines of the document, used by keyword search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_preview: Option<String>,
}

impl PlanRecord {
    /// Stable identifier: the relative path when present, else the locator.
    #[must_use]
    pub fn id(&self) -> &str {
        self.relative_path.as_deref().unwrap_or(&self.file_path)
    }

    /// Normalized gender
    #[must_use]
    pub fn gender_norm(&self) -> Gender {
        Gender::normalize(self.gender.as_deref().unwrap_or(""))
    }

    /// Normalized region
    #[must_use]
    pub fn region_norm(&self) -> Region {
        Region::normalize(self.region.as_deref().unwrap_or(""))
    }

    /// Normalized diet type (missing label defaults to vegetarian, matching
    /// the authored corpus)
    #[must_use]
    pub fn diet_norm(&self) -> DietType {
        DietType::normalize(self.diet_type.as_deref().unwrap_or(""))
    }

    /// Normalized BMI category
    #[must_use]
    pub fn bmi_norm(&self) -> BmiCategory {
        BmiCategory::normalize(self.bmi_category.as_deref().unwrap_or(""))
    }

    /// Normalized activity level
    #[must_use]
    pub fn activity_norm(&self) -> ActivityLevel {
        ActivityLevel::normalize(self.activity.as_deref().unwrap_or(""))
    }

    /// Lowercase category label, empty when the record has none
    #[must_use]
    pub fn category_lower(&self) -> String {
        self.category
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_lowercase()
    }

    /// Whether any of the given ingredient keywords appears in this record's
    /// ingredient set. Keywords are matched as substrings so that an index
    /// entry like "paneer bhurji" still trips the "paneer" keyword.
    #[must_use]
    pub fn contains_any_ingredient(&self, keywords: &[String]) -> bool {
        self.ingredients.iter().any(|ingredient| {
            keywords
                .iter()
                .any(|keyword| ingredient.contains(keyword.as_str()))
        })
    }
}
