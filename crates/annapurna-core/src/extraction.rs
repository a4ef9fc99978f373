// ABOUTME: Contract for the meal-extraction collaborator
// ABOUTME: Document locator in, MealsBySlot out; failures degrade to an empty map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

use crate::models::MealsBySlot;
use std::path::Path;

/// Pluggable meal extraction over a backing plan document.
///
/// Contract: read or parse failures return an empty [`MealsBySlot`], never an
/// error - strategies and the cycle assembler treat "no meals found" as a
/// valid, low-information result. Implementations should log the failure.
///
/// Document content is static for the process lifetime, so implementations
/// are encouraged to cache parsed results keyed by path.
pub trait MealParser: Send + Sync {
    /// Extract all meal options from the document at `locator`.
    fn parse_meals(&self, locator: &Path) -> MealsBySlot;
}
