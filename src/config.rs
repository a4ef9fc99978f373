// ABOUTME: Environment-driven service configuration with sane defaults
// ABOUTME: ANNAPURNA_INDEX_PATH and ANNAPURNA_MEAL_CACHE_ENTRIES variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Default index location relative to the working directory.
pub const DEFAULT_INDEX_PATH: &str = "outputs/plan_index.json";
/// Default parsed-meal cache capacity.
pub const DEFAULT_MEAL_CACHE_ENTRIES: usize = 256;

/// Service configuration, environment-only in keeping with the deployment
/// convention: no config files, every knob is a variable.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Location of the pre-built plan index
    pub index_path: PathBuf,
    /// Capacity of the parsed-meal LRU cache
    pub meal_cache_entries: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            meal_cache_entries: DEFAULT_MEAL_CACHE_ENTRIES,
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the environment. Unset variables take the
    /// defaults; an unparseable cache size warns and falls back rather than
    /// failing startup.
    #[must_use]
    pub fn from_env() -> Self {
        let index_path = env::var("ANNAPURNA_INDEX_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_INDEX_PATH), PathBuf::from);

        let meal_cache_entries = env::var("ANNAPURNA_MEAL_CACHE_ENTRIES")
            .ok()
            .map_or(DEFAULT_MEAL_CACHE_ENTRIES, |raw| {
                raw.parse().unwrap_or_else(|_| {
                    warn!(
                        value = %raw,
                        "unparseable ANNAPURNA_MEAL_CACHE_ENTRIES, using default"
                    );
                    DEFAULT_MEAL_CACHE_ENTRIES
                })
            });

        Self {
            index_path,
            meal_cache_entries,
        }
    }
}
