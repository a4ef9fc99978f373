// ABOUTME: Typed goal-to-category and allergen-to-ingredient mapping tables
// ABOUTME: Match expressions instead of string-keyed dictionaries, so gaps are visible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

//! Finite mapping tables used by the matching strategies.
//!
//! The corpus folders define ~18 category labels. User-facing goals map onto
//! them through two tables: a strict table returning every acceptable
//! category for a goal (condition-aware for weight loss), and a looser
//! relaxed table collapsing each goal to a single category. Both are match
//! expressions so an unhandled goal is a visible gap, not a silent runtime
//! `None`.

use annapurna_core::models::UserProfile;
use annapurna_core::normalize::canonical_token;

/// Acceptable plan categories for a goal under the strict strategy, widened
/// by declared health conditions: a weight-loss user with PCOS also accepts
/// `weight_loss_pcos`, with diabetes `weight_loss_diabetes`.
///
/// Returns `None` for goals with no category folder in the corpus; the strict
/// strategy treats that as an immediate empty result.
#[must_use]
pub fn strict_categories(goal: &str, user: &UserProfile) -> Option<Vec<&'static str>> {
    let mut categories: Vec<&'static str> = match canonical_token(goal).as_str() {
        "weight loss" | "weight loss only" => vec!["weight_loss"],
        "weight loss pcos" | "pcos" => vec!["weight_loss_pcos", "pcos"],
        "weight loss diabetes" | "weight loss type1 diabetes" | "diabetes" => {
            vec!["weight_loss_diabetes", "diabetes"]
        }
        "weight gain" | "weight gain underweight" => vec!["weight_gain"],
        "muscle building" | "muscle gain" => {
            vec!["weight_gain", "high_protein_balanced", "high_protein_high_fiber"]
        }
        "maintain" | "maintenance" => vec!["maintenance"],
        "clear skin" | "skin health" | "acne oily skin" => vec!["skin_health", "skin_detox"],
        "gut health" => vec!["gut_health", "gut_detox", "gut_cleanse_digestive_detox", "probiotic"],
        "digestive detox" => vec!["gut_cleanse_digestive_detox"],
        "gut detox" => vec!["gut_detox"],
        "energy" => vec!["energy_boost"],
        "better sleep" => vec!["sleep_improvement"],
        "hair loss" | "hair loss thinning" | "hair growth" => vec!["hair_loss"],
        "anti aging" | "anti aging sun damage" => vec!["anti_aging"],
        "detox" => vec!["detox", "liver_detox", "ayurvedic_detox", "skin_detox", "gut_detox"],
        "ayurvedic detox" => vec!["ayurvedic_detox"],
        "liver detox" => vec!["liver_detox"],
        "skin detox" => vec!["skin_detox"],
        "anti inflammatory" => vec!["anti_inflammatory"],
        "probiotic" | "probiotic rich" => vec!["probiotic", "gut_cleanse_digestive_detox"],
        "gas bloating" => vec!["gas_bloating", "gut_cleanse_digestive_detox"],
        "protein rich balanced" => vec!["high_protein_balanced"],
        "high protein high fiber" => vec!["high_protein_high_fiber"],
        _ => return None,
    };

    if categories.first() == Some(&"weight_loss") {
        if user.has_condition("pcos") {
            categories.push("weight_loss_pcos");
        }
        if user.has_condition("diabet") {
            categories.push("weight_loss_diabetes");
        }
    }

    Some(categories)
}

/// Single target category for a goal under the relaxed strategy. Looser than
/// the strict table: several source goals collapse to one category, and an
/// unknown goal falls back to its own canonical token so author-vocabulary
/// goals like `weight_loss_pcos` still match their folder directly.
#[must_use]
pub fn relaxed_category(goal: &str) -> String {
    let token = canonical_token(goal);
    let mapped = match token.as_str() {
        "weight loss" => "weight_loss",
        "weight gain" | "muscle building" => "weight_gain",
        "maintain" => "maintenance",
        "clear skin" | "skin health" => "skin_health",
        "gut health" => "gut_health",
        "energy" => "energy_boost",
        "better sleep" => "sleep_improvement",
        "pcos" => "pcos",
        "diabetes" => "diabetes",
        "hair loss" => "hair_health",
        "anti aging" => "anti_aging",
        "detox" => "detox",
        "anti inflammatory" => "anti_inflammatory",
        "probiotic" => "probiotic",
        "gas bloating" => "digestive_health",
        _ => return token.replace(' ', "_"),
    };
    mapped.to_owned()
}

/// Expand one allergy tag into the lowercase ingredient keywords it implies.
/// An unknown tag expands to itself, so free-text allergies still reject
/// literal ingredient hits.
#[must_use]
pub fn allergen_keywords(allergy: &str) -> Vec<String> {
    let token = canonical_token(allergy);
    let keywords: &[&str] = match token.as_str() {
        "dairy" | "milk" | "lactose" => {
            &["milk", "paneer", "curd", "yogurt", "butter", "ghee", "cheese", "buttermilk"]
        }
        "nuts" | "nut" | "tree nuts" => {
            &["almond", "cashew", "walnut", "pistachio", "peanut", "hazelnut"]
        }
        "peanut" | "peanuts" => &["peanut", "groundnut"],
        "gluten" | "wheat" => &["wheat", "atta", "roti", "chapati", "bread", "semolina", "rava"],
        "soy" | "soya" => &["soy", "soya", "tofu"],
        "egg" | "eggs" => &["egg", "omelette"],
        "seafood" | "fish" | "shellfish" => &["fish", "prawn", "shrimp", "crab", "salmon", "tuna"],
        "sesame" => &["sesame", "til"],
        _ => return vec![token],
    };
    keywords.iter().map(|k| (*k).to_string()).collect()
}

/// All ingredient keywords implied by the user's declared allergies.
#[must_use]
pub fn expanded_allergens(user: &UserProfile) -> Vec<String> {
    user.allergies
        .iter()
        .flat_map(|allergy| allergen_keywords(allergy))
        .collect()
}
