// ABOUTME: Command-line interface for the recommendation engine
// ABOUTME: recommend, cycle, stats, and search subcommands with pretty-JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

//! `annapurna-cli` - operate the diet-plan engine from the shell.
//!
//! The index location and cache size come from the environment
//! (`ANNAPURNA_INDEX_PATH`, `ANNAPURNA_MEAL_CACHE_ENTRIES`); every subcommand
//! prints pretty JSON on stdout so results pipe cleanly into `jq`.

use annapurna::{logging, RecommendationService, ServiceConfig};
use annapurna_core::models::UserProfile;
use annapurna_intelligence::StrategyKind;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "annapurna-cli",
    about = "Diet plan recommendation and meal cycle engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend diet plans for a user profile
    Recommend {
        /// Matching strategy: strict, relaxed, or weighted
        #[arg(long, default_value = "weighted")]
        strategy: StrategyKind,
        /// Path to the user profile JSON file
        #[arg(long)]
        profile: PathBuf,
        /// Maximum number of plans to return
        #[arg(long, default_value_t = 5)]
        top_k: usize,
    },
    /// Assemble a multi-day meal cycle from selected plans
    Cycle {
        /// Plan ids (relative or full paths), repeatable, at most five
        #[arg(long = "plan", required = true)]
        plans: Vec<String>,
        /// Number of days to generate
        #[arg(long, default_value_t = 7)]
        days: u32,
        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },
    /// Show plan counts per category
    Stats,
    /// Search plans by keyword
    Search {
        /// Keyword matched against filename, category, and content preview
        keyword: String,
    },
}

fn main() -> Result<()> {
    logging::init()?;

    let cli = Cli::parse();
    let config = ServiceConfig::from_env();
    let service = RecommendationService::from_config(&config)
        .with_context(|| format!("failed to start against index {}", config.index_path.display()))?;

    match cli.command {
        Command::Recommend {
            strategy,
            profile,
            top_k,
        } => {
            let raw = fs::read_to_string(&profile)
                .with_context(|| format!("failed to read profile {}", profile.display()))?;
            let user: UserProfile = serde_json::from_str(&raw)
                .with_context(|| format!("invalid profile JSON in {}", profile.display()))?;
            print_json(&service.recommend(strategy, &user, top_k))
        }
        Command::Cycle {
            plans,
            days,
            start_date,
        } => {
            let start = start_date.unwrap_or_else(|| Local::now().date_naive());
            let selected = service.select_by_ids(&plans);
            let cycle = service
                .generate_cycle(&selected, days, start)
                .context("cycle generation failed")?;
            print_json(&cycle)
        }
        Command::Stats => print_json(&service.category_stats()),
        Command::Search { keyword } => print_json(&service.search_by_keyword(&keyword)),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
