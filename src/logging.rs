// ABOUTME: Structured logging setup for the engine and its CLI
// ABOUTME: tracing-subscriber with env-filter; pretty or JSON output per environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

use anyhow::Result;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format for production logging
    Json,
    /// Compact human-readable format
    Compact,
}

/// Initialize the global tracing subscriber.
///
/// Level comes from `RUST_LOG` (default `info`), format from `LOG_FORMAT`
/// (`json` or compact, default compact).
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let format = match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => LogFormat::Json,
        _ => LogFormat::Compact,
    };

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().compact())
                .try_init()?;
        }
    }
    Ok(())
}
