// ABOUTME: Typed error taxonomy for the diet-plan engine
// ABOUTME: Startup (index) failures and cycle-assembly failures; no-match is not an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

//! Error taxonomy:
//!
//! - configuration/startup errors (index missing or malformed) are fatal and
//!   surfaced immediately as [`EngineError`];
//! - a strategy finding zero candidates is NOT an error - it is the
//!   `NotAvailable` status in the result contract;
//! - partial record data (missing age info, nutrition, category) is tolerated
//!   through per-field optionality and scores as zero contribution;
//! - cycle assembly fails loudly via [`CycleError`] when it cannot produce a
//!   meaningful schedule, so callers can tell "no data" from normal rotation.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal startup and index-loading errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The plan index file does not exist; nothing can run without it
    #[error("plan index not found at {}", path.display())]
    IndexNotFound {
        /// Path that was probed
        path: PathBuf,
    },
    /// The index file exists but could not be read
    #[error("failed to read plan index {}", path.display())]
    IndexRead {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The index file is not valid index JSON
    #[error("invalid plan index format in {}", path.display())]
    IndexFormat {
        /// Path that failed
        path: PathBuf,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}

/// Cycle-assembly failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CycleError {
    /// The caller passed an empty selection
    #[error("must select at least 1 plan for cycle generation")]
    NoPlansSelected,
    /// The caller passed more plans than the rotation supports
    #[error("cycle generation accepts at most {max} plans, got {count}")]
    TooManyPlans {
        /// Number of plans passed
        count: usize,
        /// Supported maximum
        max: usize,
    },
    /// Every selected plan yielded zero meal options; emitting an
    /// all-placeholder week silently would hide the data problem
    #[error("none of the selected plans yielded any meal options")]
    NoMealsExtracted,
}
