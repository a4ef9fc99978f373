// ABOUTME: Meal-cycle assembler rotating selected plans into an N-day schedule
// ABOUTME: Tagged union of document-backed and pre-generated plans, placeholder fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

//! Cycle assembly.
//!
//! Given 1-5 selected plans and a day count, produce one [`DailyPlan`] per
//! day by round-robin over the plans and, within a plan, rotation through up
//! to three authored meal variants per slot. Rotation arithmetic for day `d`
//! (1-based):
//!
//! ```text
//! plan_index   = (d - 1) % plan_count
//! option_index = (d - 1) % 3          // authored convention: <=3 options/slot
//! option       = options[option_index % options.len()]
//! ```
//!
//! The inner modulo against the slot's own option count is load-bearing: a
//! slot with a single option must resolve on every day of a 14-day cycle.

use annapurna_core::errors::CycleError;
use annapurna_core::extraction::MealParser;
use annapurna_core::models::{DailyPlan, MealOption, MealSlot, MealsBySlot, NutritionRange, PlanRecord};
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Upper bound on selected plans per cycle.
pub const MAX_SELECTED_PLANS: usize = 5;
/// Authored convention: up to three meal variants per slot.
pub const OPTION_ROTATION: usize = 3;

/// Monday-first weekday names indexed by `(day - 1) % 7`, independent of the
/// real weekday of the start date.
const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A plan selected for cycle generation: either a document-backed index
/// record whose meals come from the extraction collaborator, or a
/// pre-generated plan that already carries its options.
#[derive(Debug, Clone)]
pub enum SelectedPlan {
    /// Index record backed by an authored document
    Document {
        /// The selected record
        record: PlanRecord,
    },
    /// Pre-generated plan (e.g. AI-assembled) with options attached
    Generated {
        /// Stable identifier for provenance stamping
        id: String,
        /// Goal/topic label, when known
        category: Option<String>,
        /// Daily nutrition ranges, when known
        nutrition: Option<NutritionRange>,
        /// Meal options already keyed by slot
        meals: MealsBySlot,
    },
}

impl SelectedPlan {
    /// Resolve this plan's meal options, consulting the parser for
    /// document-backed plans.
    fn meal_options(&self, parser: &dyn MealParser) -> MealsBySlot {
        match self {
            Self::Document { record } => parser.parse_meals(Path::new(&record.file_path)),
            Self::Generated { meals, .. } => meals.clone(),
        }
    }

    fn id(&self) -> &str {
        match self {
            Self::Document { record } => record.id(),
            Self::Generated { id, .. } => id,
        }
    }

    fn category(&self) -> Option<String> {
        match self {
            Self::Document { record } => record.category.clone(),
            Self::Generated { category, .. } => category.clone(),
        }
    }

    fn file(&self) -> Option<String> {
        match self {
            Self::Document { record } => Some(record.file_path.clone()),
            Self::Generated { .. } => None,
        }
    }

    fn nutrition(&self) -> Option<NutritionRange> {
        match self {
            Self::Document { record } => record.nutrition.clone(),
            Self::Generated { nutrition, .. } => nutrition.clone(),
        }
    }
}

/// Rotates selected plans into consecutive daily schedules.
pub struct CycleAssembler {
    parser: Arc<dyn MealParser>,
}

impl CycleAssembler {
    /// New assembler delegating document extraction to `parser`.
    #[must_use]
    pub fn new(parser: Arc<dyn MealParser>) -> Self {
        Self { parser }
    }

    /// Assemble `days` consecutive [`DailyPlan`]s starting at `start_date`.
    ///
    /// Plans whose extraction yields no options in any slot are dropped from
    /// the rotation with a warning; when every plan is dropped the assembler
    /// fails with [`CycleError::NoMealsExtracted`] rather than emitting an
    /// all-placeholder week.
    ///
    /// # Errors
    ///
    /// [`CycleError::NoPlansSelected`] for an empty selection,
    /// [`CycleError::TooManyPlans`] for more than [`MAX_SELECTED_PLANS`],
    /// [`CycleError::NoMealsExtracted`] when no plan yields meals.
    pub fn assemble(
        &self,
        selected: &[SelectedPlan],
        days: u32,
        start_date: NaiveDate,
    ) -> Result<Vec<DailyPlan>, CycleError> {
        if selected.is_empty() {
            return Err(CycleError::NoPlansSelected);
        }
        if selected.len() > MAX_SELECTED_PLANS {
            return Err(CycleError::TooManyPlans {
                count: selected.len(),
                max: MAX_SELECTED_PLANS,
            });
        }

        info!(plans = selected.len(), days, "generating meal cycle");

        let sources: Vec<(&SelectedPlan, MealsBySlot)> = selected
            .iter()
            .filter_map(|plan| {
                let meals = plan.meal_options(self.parser.as_ref());
                if meals.is_empty() {
                    warn!(plan = plan.id(), "plan yielded no meal options, dropping from rotation");
                    None
                } else {
                    debug!(plan = plan.id(), options = meals.total_options(), "plan meals resolved");
                    Some((plan, meals))
                }
            })
            .collect();

        if sources.is_empty() {
            return Err(CycleError::NoMealsExtracted);
        }

        let mut schedule = Vec::with_capacity(days as usize);
        for day in 1..=days {
            let offset = (day - 1) as usize;
            let (plan, meals) = &sources[offset % sources.len()];
            let option_index = offset % OPTION_ROTATION;

            let daily_meals: BTreeMap<MealSlot, MealOption> = MealSlot::ALL
                .iter()
                .map(|&slot| (slot, pick_option(meals, slot, option_index)))
                .collect();

            let date = start_date
                .checked_add_days(Days::new(u64::from(day - 1)))
                .unwrap_or(start_date);

            schedule.push(DailyPlan {
                date,
                day,
                day_name: DAY_NAMES[offset % 7].to_owned(),
                plan_id: Some(plan.id().to_owned()),
                plan_category: plan.category(),
                plan_file: plan.file(),
                nutrition: plan.nutrition(),
                meals: daily_meals,
            });
        }

        info!(days, "meal cycle generated");
        Ok(schedule)
    }
}

/// Option for one slot on one day: wrap the rotation index on the slot's own
/// option count; synthesize a named all-zero placeholder for an empty slot so
/// every day carries the complete slot set.
fn pick_option(meals: &MealsBySlot, slot: MealSlot, option_index: usize) -> MealOption {
    let options = meals.options(slot);
    if options.is_empty() {
        MealOption::placeholder(slot)
    } else {
        options[option_index % options.len()].clone()
    }
}
