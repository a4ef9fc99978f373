// ABOUTME: Line-oriented parser for authored plan documents into per-slot meal options
// ABOUTME: Heading alias table, Option N markers, detail fields, and nutritive-value figures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

//! Plan-document meal extraction.
//!
//! Authored plan documents follow a loose but recognizable shape: slot
//! headings ("Breakfast (Post-Workout)", "Mid-Morning Snack"), numbered
//! options ("Option 2 – Ragi Dosa"), and detail lines ("Ingredients:",
//! "Method:", "Nutritive Values: 430 kcal | 15 g protein | ..."). The parser
//! is deliberately forgiving: unrecognized lines are skipped, unparseable
//! numbers default to zero, and an unreadable document yields an empty map
//! rather than an error. Cycle assembly decides what to do with empty results.

use annapurna_core::extraction::MealParser;
use annapurna_core::models::{MealOption, MealSlot, MealsBySlot};
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Heading aliases in match order: longer, more specific aliases first so
/// "Evening Snack" wins over "Evening" and "Bedtime Snack" over "Bedtime".
/// All lowercase; matching lowers the candidate line.
const HEADING_ALIASES: &[(&str, MealSlot)] = &[
    ("early morning (on waking)", MealSlot::EarlyMorning),
    ("early morning", MealSlot::EarlyMorning),
    ("pre-yoga / light activity", MealSlot::PreActivity),
    ("pre-workout", MealSlot::PreActivity),
    ("pre-activity", MealSlot::PreActivity),
    ("pre-breakfast", MealSlot::PreActivity),
    ("breakfast", MealSlot::Breakfast),
    ("mid-morning snack", MealSlot::MidMorningSnack),
    ("mid-morning", MealSlot::MidMorningSnack),
    ("lunch", MealSlot::Lunch),
    ("evening snack", MealSlot::EveningSnack),
    ("evening", MealSlot::EveningSnack),
    ("dinner", MealSlot::Dinner),
    ("bedtime snack", MealSlot::Bedtime),
    ("bedtime", MealSlot::Bedtime),
];

/// Concrete [`MealParser`] for the authored plan-document text format.
pub struct PlanTextParser {
    option_line: Regex,
    kcal: Regex,
    protein: Regex,
    carbs: Regex,
    fat: Regex,
    fiber: Regex,
}

impl Default for PlanTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanTextParser {
    /// Build the parser, compiling its line patterns.
    #[must_use]
    #[allow(clippy::expect_used)] // Safe: patterns are compile-time constants
    pub fn new() -> Self {
        Self {
            // "Option 1 – Name", "Option 2 - Name", "Option 3: Name",
            // also the authored "Option -1 Dish – Name" variant
            option_line: Regex::new(r"(?i)^option\s*[:\-–—]?\s*(\d+)\s*(?:dish\s*)?[:\-–—]\s*(.+)$")
                .expect("option pattern"),
            kcal: Regex::new(r"(\d+)\s*kcal").expect("kcal pattern"),
            protein: Regex::new(r"(\d+)\s*g\s*protein").expect("protein pattern"),
            carbs: Regex::new(r"(\d+)\s*g\s*carb").expect("carbs pattern"),
            fat: Regex::new(r"(\d+)\s*g\s*fat").expect("fat pattern"),
            fiber: Regex::new(r"(\d+)\s*g\s*fiber").expect("fiber pattern"),
        }
    }

    /// Parse document text into per-slot meal options.
    #[must_use]
    pub fn parse_document_text(&self, content: &str) -> MealsBySlot {
        let mut meals = MealsBySlot::new();
        let mut current_slot: Option<MealSlot> = None;
        let mut current_option: Option<MealOption> = None;

        for raw_line in content.lines() {
            let line = strip_bullet(raw_line.trim());
            if line.is_empty() {
                continue;
            }

            if let Some(slot) = heading_slot(line) {
                flush(&mut meals, current_slot, current_option.take());
                current_slot = Some(slot);
                continue;
            }

            if let Some(captures) = self.option_line.captures(line) {
                flush(&mut meals, current_slot, current_option.take());
                if current_slot.is_some() {
                    current_option = Some(MealOption {
                        name: captures[2].trim().to_owned(),
                        ..MealOption::default()
                    });
                }
                continue;
            }

            if let Some(option) = current_option.as_mut() {
                self.apply_detail_line(option, line);
            }
        }
        flush(&mut meals, current_slot, current_option.take());
        meals
    }

    /// Fill one detail field from a `Key: value` line.
    fn apply_detail_line(&self, option: &mut MealOption, line: &str) {
        if let Some(value) = field_value(line, &["ingredients with quantities", "ingredients"]) {
            option.ingredients = value.to_owned();
        } else if let Some(value) =
            field_value(line, &["method of cooking", "cooking method", "method"])
        {
            option.method = value.to_owned();
        } else if let Some(value) = field_value(line, &["serving size", "servings", "serving"]) {
            option.serving = value.to_owned();
        } else if let Some(value) = field_value(line, &["preparation time", "prep time", "time"]) {
            option.time = value.to_owned();
        } else if let Some(value) = field_value(line, &["nutritive values", "nutritive value"]) {
            self.apply_nutritive_values(option, value);
        }
    }

    /// Pull the five figures out of a nutritive-values line. The separators
    /// (`|` or `,`) are irrelevant; each figure is matched independently and
    /// a missing or unparseable figure stays zero.
    fn apply_nutritive_values(&self, option: &mut MealOption, text: &str) {
        option.calories = capture_int(&self.kcal, text);
        option.protein = capture_int(&self.protein, text);
        option.carbs = capture_int(&self.carbs, text);
        option.fat = capture_int(&self.fat, text);
        option.fiber = capture_int(&self.fiber, text);
    }
}

impl MealParser for PlanTextParser {
    fn parse_meals(&self, locator: &Path) -> MealsBySlot {
        match fs::read_to_string(locator) {
            Ok(content) => {
                let meals = self.parse_document_text(&content);
                debug!(
                    document = %locator.display(),
                    options = meals.total_options(),
                    "plan document parsed"
                );
                meals
            }
            Err(error) => {
                warn!(document = %locator.display(), %error, "plan document unreadable");
                MealsBySlot::new()
            }
        }
    }
}

/// Resolve a line to a slot heading. A heading is an alias standing alone or
/// followed by a colon, a parenthetical, or the word "Options"; the authored
/// "Meal Type: Breakfast" form resolves through its remainder.
fn heading_slot(line: &str) -> Option<MealSlot> {
    let lowered = line.to_lowercase();
    let candidate = lowered
        .strip_prefix("meal type:")
        .map_or(lowered.as_str(), str::trim);

    for &(alias, slot) in HEADING_ALIASES {
        if let Some(rest) = candidate.strip_prefix(alias) {
            let rest = rest.trim_start();
            if rest.is_empty()
                || rest.starts_with(':')
                || rest.starts_with('(')
                || rest.starts_with("options")
            {
                return Some(slot);
            }
        }
    }
    None
}

/// Strip a leading bullet marker from a detail line.
fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(['•', '*'])
        .trim_start_matches("- ")
        .trim()
}

/// Value of a `Key: value` line when the key matches one of `keys`
/// (case-insensitive; keys listed longest first).
fn field_value<'a>(line: &'a str, keys: &[&str]) -> Option<&'a str> {
    let lowered = line.to_lowercase();
    for key in keys {
        if lowered.starts_with(key) {
            let rest = &line[key.len()..];
            if let Some(value) = rest.trim_start().strip_prefix(':') {
                return Some(value.trim());
            }
        }
    }
    None
}

/// First captured integer of `pattern` in `text`, zero when absent or
/// out of range.
fn capture_int(pattern: &Regex, text: &str) -> i32 {
    pattern
        .captures(text)
        .and_then(|captures| captures[1].parse().ok())
        .unwrap_or(0)
}

/// Push the finished option into its slot.
fn flush(meals: &mut MealsBySlot, slot: Option<MealSlot>, option: Option<MealOption>) {
    if let (Some(slot), Some(option)) = (slot, option) {
        meals.push(slot, option);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
7-Day North Indian Vegetarian Plan

Early Morning (On Waking)
Option 1 – Warm Jeera Water
• Ingredients: 1 tsp cumin seeds, 250 ml water
• Method: Boil and strain
• Time: 6:30 AM
• Nutritive Values: 10 kcal | 0 g protein | 2 g carbs | 0 g fat | 0 g fiber

Breakfast (Post-Workout)
Option 1 – Paneer Bhurji + 2 Rotis
Ingredients: 100 g paneer, 2 whole-wheat rotis, onion, tomato
Method: Scramble paneer with spices
Serving Size: 1 plate
Time: 8:30 AM
Nutritive Values: 430 kcal | 22 g protein | 45 g carbs | 14 g fat | 6 g fiber

Option 2: Vegetable Poha
Ingredients: 60 g poha, peas, carrot, peanuts
Nutritive Values: 320 kcal, 8 g protein, 52 g carbs, 9 g fat, 4 g fiber

Lunch
Option 1 - Dal Tadka + Rice + Salad
Nutritive Values: 520 kcal | 18 g protein
";

    #[test]
    fn fixture_document_parses_into_slots() {
        let parser = PlanTextParser::new();
        let meals = parser.parse_document_text(FIXTURE);

        assert_eq!(meals.options(MealSlot::EarlyMorning).len(), 1);
        assert_eq!(meals.options(MealSlot::Breakfast).len(), 2);
        assert_eq!(meals.options(MealSlot::Lunch).len(), 1);
        assert!(meals.options(MealSlot::Dinner).is_empty());
    }

    #[test]
    fn option_details_are_extracted() {
        let parser = PlanTextParser::new();
        let meals = parser.parse_document_text(FIXTURE);

        let bhurji = &meals.options(MealSlot::Breakfast)[0];
        assert_eq!(bhurji.name, "Paneer Bhurji + 2 Rotis");
        assert_eq!(bhurji.calories, 430);
        assert_eq!(bhurji.protein, 22);
        assert_eq!(bhurji.fiber, 6);
        assert_eq!(bhurji.serving, "1 plate");
        assert_eq!(bhurji.time, "8:30 AM");
        assert!(bhurji.ingredients.contains("paneer"));
    }

    #[test]
    fn comma_separated_nutritive_values_parse_too() {
        let parser = PlanTextParser::new();
        let meals = parser.parse_document_text(FIXTURE);

        let poha = &meals.options(MealSlot::Breakfast)[1];
        assert_eq!(poha.name, "Vegetable Poha");
        assert_eq!(poha.calories, 320);
        assert_eq!(poha.carbs, 52);
    }

    #[test]
    fn missing_figures_default_to_zero() {
        let parser = PlanTextParser::new();
        let meals = parser.parse_document_text(FIXTURE);

        let dal = &meals.options(MealSlot::Lunch)[0];
        assert_eq!(dal.calories, 520);
        assert_eq!(dal.fat, 0);
        assert_eq!(dal.fiber, 0);
    }

    #[test]
    fn meal_type_heading_form_is_recognized() {
        let parser = PlanTextParser::new();
        let meals = parser.parse_document_text(
            "Meal Type: Evening Snack\nOption 1 – Roasted Chana\nNutritive Values: 120 kcal",
        );
        assert_eq!(meals.options(MealSlot::EveningSnack).len(), 1);
    }

    #[test]
    fn options_before_any_heading_are_ignored() {
        let parser = PlanTextParser::new();
        let meals = parser.parse_document_text("Option 1 – Stray Meal\nNutritive Values: 99 kcal");
        assert!(meals.is_empty());
    }

    #[test]
    fn unreadable_document_yields_empty_map() {
        let parser = PlanTextParser::new();
        let meals = parser.parse_meals(Path::new("/nonexistent/plan.txt"));
        assert!(meals.is_empty());
    }
}
