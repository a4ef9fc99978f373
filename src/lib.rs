// ABOUTME: Root library crate wiring the index, extraction, cache, and service layers
// ABOUTME: Re-exports the core and intelligence crates for a single-import API surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

//! Annapurna - diet-plan recommendation and meal-cycle engine.
//!
//! The workspace splits along the teacher-tested seam: `annapurna-core` owns
//! the domain model (records, profiles, meals, normalization, contracts),
//! `annapurna-intelligence` owns the matching strategies and the cycle
//! assembler, and this root crate owns everything that touches the outside
//! world - index file loading, plan-document meal extraction, the parsed-meal
//! cache, configuration, and the [`services::RecommendationService`]
//! orchestrator used by the `annapurna-cli` binary.

/// Bounded LRU cache over parsed meal documents
pub mod cache;
/// Environment-driven service configuration
pub mod config;
/// Plan-document meal extraction
pub mod extraction;
/// Plan index loading and lookups
pub mod index;
/// Structured logging setup
pub mod logging;
/// Service orchestration layer
pub mod services;

pub use cache::CachingMealParser;
pub use config::ServiceConfig;
pub use extraction::PlanTextParser;
pub use index::PlanIndex;
pub use services::RecommendationService;
