// ABOUTME: Meal-slot vocabulary, meal options, and assembled daily plans
// ABOUTME: MealSlot, MealOption, MealsBySlot, and DailyPlan definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

use crate::models::plan::NutritionRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named time-of-day meal category with its own option list.
///
/// The order of `ALL` is the canonical presentation order for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// On waking, before any activity
    EarlyMorning,
    /// Pre-workout / pre-yoga fuel
    PreActivity,
    /// Main morning meal
    Breakfast,
    /// Mid-morning snack
    MidMorningSnack,
    /// Midday meal
    Lunch,
    /// Evening snack
    EveningSnack,
    /// Main evening meal
    Dinner,
    /// Bedtime snack
    Bedtime,
}

impl MealSlot {
    /// Canonical day order of all slots.
    pub const ALL: [Self; 8] = [
        Self::EarlyMorning,
        Self::PreActivity,
        Self::Breakfast,
        Self::MidMorningSnack,
        Self::Lunch,
        Self::EveningSnack,
        Self::Dinner,
        Self::Bedtime,
    ];

    /// Snake-case key used in serialized output.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::EarlyMorning => "early_morning",
            Self::PreActivity => "pre_activity",
            Self::Breakfast => "breakfast",
            Self::MidMorningSnack => "mid_morning_snack",
            Self::Lunch => "lunch",
            Self::EveningSnack => "evening_snack",
            Self::Dinner => "dinner",
            Self::Bedtime => "bedtime",
        }
    }

    /// Human-readable slot name, also used for placeholder meals.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::EarlyMorning => "Early Morning",
            Self::PreActivity => "Pre-Activity",
            Self::Breakfast => "Breakfast",
            Self::MidMorningSnack => "Mid-Morning Snack",
            Self::Lunch => "Lunch",
            Self::EveningSnack => "Evening Snack",
            Self::Dinner => "Dinner",
            Self::Bedtime => "Bedtime",
        }
    }
}

/// One authored meal option within a slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealOption {
    /// Meal name, e.g. "Ragi Dosa + Coconut Chutney"
    pub name: String,
    /// Calories (kcal), 0 when the document omits them
    #[serde(default)]
    pub calories: i32,
    /// Protein (g)
    #[serde(default)]
    pub protein: i32,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs: i32,
    /// Fat (g)
    #[serde(default)]
    pub fat: i32,
    /// Fiber (g)
    #[serde(default)]
    pub fiber: i32,
    /// Ingredient list as authored free text
    #[serde(default)]
    pub ingredients: String,
    /// Preparation method
    #[serde(default)]
    pub method: String,
    /// Serving size
    #[serde(default)]
    pub serving: String,
    /// Suggested time of day
    #[serde(default)]
    pub time: String,
}

impl MealOption {
    /// All-zero placeholder named after the slot, used when a source plan has
    /// no authored option for that slot. Callers always receive a complete
    /// uniform slot set per day.
    #[must_use]
    pub fn placeholder(slot: MealSlot) -> Self {
        Self {
            name: slot.display_name().to_owned(),
            ..Self::default()
        }
    }
}

/// Meal options grouped by slot, the output contract of meal extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealsBySlot {
    options: BTreeMap<MealSlot, Vec<MealOption>>,
}

impl MealsBySlot {
    /// Empty mapping: the valid low-information result of a failed extraction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for one slot, empty when the slot has none.
    #[must_use]
    pub fn options(&self, slot: MealSlot) -> &[MealOption] {
        self.options.get(&slot).map_or(&[], Vec::as_slice)
    }

    /// Append an option to a slot.
    pub fn push(&mut self, slot: MealSlot, option: MealOption) {
        self.options.entry(slot).or_default().push(option);
    }

    /// Append many options to a slot.
    pub fn extend(&mut self, slot: MealSlot, options: impl IntoIterator<Item = MealOption>) {
        self.options.entry(slot).or_default().extend(options);
    }

    /// True when no slot has any option.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.values().all(Vec::is_empty)
    }

    /// Total option count across all slots.
    #[must_use]
    pub fn total_options(&self) -> usize {
        self.options.values().map(Vec::len).sum()
    }
}

/// One assembled day of a meal cycle.
///
/// `day_name` follows a fixed Monday-first cycle on the day index, independent
/// of the real weekday of `date` - an intentional simplification of the
/// authored format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Calendar date, `start_date + (day - 1)`
    pub date: NaiveDate,
    /// 1-based day index within the cycle
    pub day: u32,
    /// Weekday name from the Monday-first cycle
    pub day_name: String,
    /// Stable id of the source plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    /// Category of the source plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_category: Option<String>,
    /// Backing document of the source plan, absent for generated plans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_file: Option<String>,
    /// Daily nutrition ranges of the source plan, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionRange>,
    /// Exactly one meal per slot, placeholders included
    pub meals: BTreeMap<MealSlot, MealOption>,
}
