// ABOUTME: Service orchestration layer composing the index, strategies, and assembler
// ABOUTME: Explicit dependency injection; constructed once at startup, passed to handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

/// Recommendation service orchestrator
pub mod recommendation;

pub use recommendation::RecommendationService;
