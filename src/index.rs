// ABOUTME: Plan index loading and in-memory lookups over the pre-built document index
// ABOUTME: Accepts the tagged metadata+plans format and the legacy bare-array format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

//! Plan index.
//!
//! The index is built offline by the corpus pipeline and loaded fully into
//! memory at startup. It is read-only for the life of the process, so every
//! lookup is a plain slice scan with no locking.

use annapurna_core::errors::EngineError;
use annapurna_core::models::PlanRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Index-level metadata written by the corpus pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexMetadata {
    /// Total plan count as recorded at build time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_plans: Option<usize>,
    /// Plan count per category label
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub category: BTreeMap<String, usize>,
    /// Build timestamp, informational only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

/// Current index format: metadata header plus the plan array. Older index
/// files are a bare plan array with no header; both deserialize here.
#[derive(Deserialize)]
#[serde(untagged)]
enum IndexDocument {
    Tagged {
        #[serde(default)]
        metadata: IndexMetadata,
        plans: Vec<PlanRecord>,
    },
    Legacy(Vec<PlanRecord>),
}

/// The loaded plan index: every record in memory, read-only after load.
#[derive(Debug, Clone)]
pub struct PlanIndex {
    metadata: IndexMetadata,
    plans: Vec<PlanRecord>,
}

impl PlanIndex {
    /// Load the index file at `path`.
    ///
    /// # Errors
    ///
    /// [`EngineError::IndexNotFound`] when the file does not exist,
    /// [`EngineError::IndexRead`] on I/O failure, [`EngineError::IndexFormat`]
    /// when the JSON matches neither index format. All three are fatal at
    /// startup; there is nothing to recommend against without an index.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        info!(path = %path.display(), "loading plan index");

        if !path.exists() {
            return Err(EngineError::IndexNotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = fs::read_to_string(path).map_err(|source| EngineError::IndexRead {
            path: path.to_path_buf(),
            source,
        })?;

        let document: IndexDocument =
            serde_json::from_str(&raw).map_err(|source| EngineError::IndexFormat {
                path: path.to_path_buf(),
                source,
            })?;

        let (metadata, plans) = match document {
            IndexDocument::Tagged { metadata, plans } => (metadata, plans),
            IndexDocument::Legacy(plans) => {
                debug!("legacy bare-array index format, synthesizing metadata");
                (IndexMetadata::default(), plans)
            }
        };

        info!(plans = plans.len(), "plan index loaded");
        Ok(Self { metadata, plans })
    }

    /// Build an index directly from records; test and pipeline entry point.
    #[must_use]
    pub fn from_records(plans: Vec<PlanRecord>) -> Self {
        Self {
            metadata: IndexMetadata::default(),
            plans,
        }
    }

    /// All records, in index order.
    #[must_use]
    pub fn plans(&self) -> &[PlanRecord] {
        &self.plans
    }

    /// Number of indexed plans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether the index holds no plans.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Index build metadata.
    #[must_use]
    pub fn metadata(&self) -> &IndexMetadata {
        &self.metadata
    }

    /// Plan count per category label: the build-time counts when the header
    /// carries them, otherwise counted from the records (legacy indexes).
    #[must_use]
    pub fn category_stats(&self) -> BTreeMap<String, usize> {
        if !self.metadata.category.is_empty() {
            return self.metadata.category.clone();
        }
        let mut stats = BTreeMap::new();
        for plan in &self.plans {
            let category = plan.category_lower();
            if !category.is_empty() {
                *stats.entry(category).or_insert(0) += 1;
            }
        }
        stats
    }

    /// Look up a single record by id: the relative path or the full locator.
    #[must_use]
    pub fn plan_details(&self, plan_id: &str) -> Option<&PlanRecord> {
        self.plans
            .iter()
            .find(|plan| plan.id() == plan_id || plan.file_path == plan_id)
    }

    /// Case-insensitive keyword search over filename, category, and content
    /// preview.
    #[must_use]
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&PlanRecord> {
        let needle = keyword.to_lowercase();
        self.plans
            .iter()
            .filter(|plan| {
                plan.filename
                    .as_deref()
                    .is_some_and(|f| f.to_lowercase().contains(&needle))
                    || plan.category_lower().contains(&needle)
                    || plan
                        .content_preview
                        .as_deref()
                        .is_some_and(|p| p.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: &str) -> PlanRecord {
        PlanRecord {
            file_path: format!("plans/{id}.txt"),
            relative_path: Some(format!("{category}/{id}.txt")),
            filename: Some(format!("{id}.txt")),
            title: None,
            gender: None,
            region: None,
            diet_type: None,
            bmi_category: None,
            activity: None,
            category: Some(category.to_owned()),
            age_info: None,
            nutrition: None,
            ingredients: std::collections::BTreeSet::new(),
            content_preview: Some(format!("A sample {category} plan")),
        }
    }

    #[test]
    fn category_stats_count_from_records_when_header_missing() {
        let index = PlanIndex::from_records(vec![
            record("a", "weight_loss"),
            record("b", "weight_loss"),
            record("c", "diabetes"),
        ]);
        let stats = index.category_stats();
        assert_eq!(stats.get("weight_loss"), Some(&2));
        assert_eq!(stats.get("diabetes"), Some(&1));
    }

    #[test]
    fn plan_details_matches_relative_and_full_path() {
        let index = PlanIndex::from_records(vec![record("a", "weight_loss")]);
        assert!(index.plan_details("weight_loss/a.txt").is_some());
        assert!(index.plan_details("plans/a.txt").is_some());
        assert!(index.plan_details("nope").is_none());
    }

    #[test]
    fn keyword_search_is_case_insensitive_over_three_fields() {
        let index = PlanIndex::from_records(vec![
            record("poha-plan", "weight_loss"),
            record("idli-plan", "diabetes"),
        ]);
        assert_eq!(index.search_by_keyword("POHA").len(), 1);
        assert_eq!(index.search_by_keyword("diabetes").len(), 1);
        assert_eq!(index.search_by_keyword("sample").len(), 2);
        assert!(index.search_by_keyword("quinoa").is_empty());
    }
}
