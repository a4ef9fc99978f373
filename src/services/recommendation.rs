// ABOUTME: RecommendationService wiring index, strategies, cache, and cycle assembler
// ABOUTME: One instance per process; the index is read-only so calls need no locking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

use crate::cache::CachingMealParser;
use crate::config::ServiceConfig;
use crate::extraction::PlanTextParser;
use crate::index::PlanIndex;
use annapurna_core::contracts::RecommendationResponse;
use annapurna_core::errors::{CycleError, EngineError};
use annapurna_core::extraction::MealParser;
use annapurna_core::models::{DailyPlan, PlanRecord, UserProfile};
use annapurna_intelligence::cycle::{CycleAssembler, SelectedPlan};
use annapurna_intelligence::strategies::{
    RelaxedMatcher, StrategyKind, StrictMatcher, WeightedMatcher,
};
use annapurna_intelligence::Strategy;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// The engine's orchestrator: loaded index, the three stateless matchers, and
/// the cycle assembler sharing one parsed-meal cache.
///
/// Built once at startup and handed to every caller; module-level singletons
/// are deliberately absent so tests construct isolated instances.
pub struct RecommendationService {
    index: PlanIndex,
    strict: StrictMatcher,
    relaxed: RelaxedMatcher,
    weighted: WeightedMatcher,
    assembler: CycleAssembler,
}

impl RecommendationService {
    /// Compose a service from an already-loaded index and a meal parser.
    #[must_use]
    pub fn new(index: PlanIndex, parser: Arc<dyn MealParser>) -> Self {
        Self {
            index,
            strict: StrictMatcher::new(),
            relaxed: RelaxedMatcher::new(),
            weighted: WeightedMatcher::new(),
            assembler: CycleAssembler::new(parser),
        }
    }

    /// Load the index named by `config` and wire the default document parser
    /// behind the LRU cache.
    ///
    /// # Errors
    ///
    /// Any [`EngineError`] from index loading; fatal at startup.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, EngineError> {
        let index = PlanIndex::load(&config.index_path)?;
        let parser: Arc<dyn MealParser> = Arc::new(CachingMealParser::new(
            Arc::new(PlanTextParser::new()),
            config.meal_cache_entries,
        ));
        info!(
            plans = index.len(),
            cache_entries = config.meal_cache_entries,
            "recommendation service ready"
        );
        Ok(Self::new(index, parser))
    }

    /// Run one matching strategy for `user` and return up to `top_k` plans.
    #[must_use]
    pub fn recommend(
        &self,
        kind: StrategyKind,
        user: &UserProfile,
        top_k: usize,
    ) -> RecommendationResponse {
        let strategy: &dyn Strategy = match kind {
            StrategyKind::Strict => &self.strict,
            StrategyKind::Relaxed => &self.relaxed,
            StrategyKind::Weighted => &self.weighted,
        };
        strategy.recommend(self.index.plans(), user, top_k)
    }

    /// Assemble a meal cycle from the selected plans.
    ///
    /// # Errors
    ///
    /// Any [`CycleError`] from the assembler.
    pub fn generate_cycle(
        &self,
        selected: &[SelectedPlan],
        days: u32,
        start_date: NaiveDate,
    ) -> Result<Vec<DailyPlan>, CycleError> {
        self.assembler.assemble(selected, days, start_date)
    }

    /// Resolve plan ids against the index into document-backed selections.
    /// Unknown ids are dropped with a warning; an all-unknown list surfaces
    /// downstream as [`CycleError::NoPlansSelected`].
    #[must_use]
    pub fn select_by_ids(&self, plan_ids: &[String]) -> Vec<SelectedPlan> {
        plan_ids
            .iter()
            .filter_map(|id| match self.index.plan_details(id) {
                Some(record) => Some(SelectedPlan::Document {
                    record: record.clone(),
                }),
                None => {
                    warn!(plan = id.as_str(), "unknown plan id, skipping");
                    None
                }
            })
            .collect()
    }

    /// Single-record lookup by relative or full path.
    #[must_use]
    pub fn plan_details(&self, plan_id: &str) -> Option<&PlanRecord> {
        self.index.plan_details(plan_id)
    }

    /// Keyword search over filename, category, and content preview.
    #[must_use]
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&PlanRecord> {
        self.index.search_by_keyword(keyword)
    }

    /// Plan count per category label.
    #[must_use]
    pub fn category_stats(&self) -> BTreeMap<String, usize> {
        self.index.category_stats()
    }

    /// The loaded index.
    #[must_use]
    pub fn index(&self) -> &PlanIndex {
        &self.index
    }
}
