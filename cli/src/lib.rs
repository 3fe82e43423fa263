//! Step Awards CLI
//!
//! Reads an exported tracker data document and reports statistics, streaks
//! and award status from it.

pub mod config;
pub mod logging;
pub mod report;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use step_awards_shared::validation::{validate_entry, validate_settings};
use step_awards_shared::{
    aggregate, parse_date, AwardEvaluator, Difficulty, Settings, TrackerData, UnlockLedger,
};

use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "step-awards-cli", version, about = "Step tracker statistics and awards")]
pub struct Cli {
    /// Exported tracker data file (JSON); overrides `data_file` from config
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Daily step goal to evaluate with instead of the stored one
    #[arg(long, global = true)]
    pub goal: Option<u32>,

    /// Day to treat as today (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lifetime and weekly stats, streaks, records and award count
    Summary,
    /// Every award with its unlock state, grouped by difficulty
    Awards {
        /// Print statuses as JSON
        #[arg(long)]
        json: bool,
        /// Only show one difficulty level
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },
    /// Re-evaluate the full history and print newly unlocked awards
    Check {
        /// Write the updated unlock records back to the data file
        #[arg(long)]
        save: bool,
    },
}

/// Read and parse a data document
pub fn load_data(path: &Path) -> Result<TrackerData> {
    let json = fs::read_to_string(path).with_context(|| format!("reading data file {}", path.display()))?;
    let data = TrackerData::from_json(&json).with_context(|| format!("parsing data file {}", path.display()))?;
    Ok(data)
}

/// Settings after config and command-line overrides
fn effective_settings(data: &TrackerData, config: &CliConfig, cli: &Cli) -> Settings {
    let mut settings = data.settings.clone();
    config.tracker.apply(&mut settings);
    if let Some(goal) = cli.goal {
        settings.daily_step_goal = goal;
    }
    settings
}

/// Log input problems without refusing to report on them
fn warn_invalid(data: &TrackerData, settings: &Settings, today: NaiveDate) {
    if let Err(errors) = validate_settings(settings) {
        for error in errors {
            warn!(field = %error.field, "{}", error.user_message());
        }
    }
    for entry in &data.entries {
        if let Err(errors) = validate_entry(entry, today) {
            for error in errors {
                warn!(date = %entry.date, field = %error.field, "{}", error.user_message());
            }
        }
    }
}

/// Run one command, writing its output to `out`
pub fn run(cli: Cli, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let path = cli.data.clone().unwrap_or_else(|| config.data_file.clone());
    let mut data = load_data(&path)?;
    let settings = effective_settings(&data, config, &cli);
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    info!(
        path = %path.display(),
        entries = data.entries.len(),
        unlocked = data.awards.len(),
        %today,
        "data loaded"
    );
    warn_invalid(&data, &settings, today);

    let evaluator = AwardEvaluator::default();

    match cli.command {
        Commands::Summary => {
            writeln!(out, "{}", report::Summary::build(&data, &settings, today))?;
        }
        Commands::Awards { json, difficulty } => {
            let mut ledger = UnlockLedger::from_records(data.awards.clone());
            evaluator.evaluate_history(&data.entries, &settings, today, &mut ledger);

            let stats = aggregate(&data.entries);
            let statuses: Vec<_> = evaluator
                .status_for_all(ledger.records(), Some(&stats))
                .into_iter()
                .filter(|s| difficulty.map_or(true, |d| s.difficulty == d))
                .collect();

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&statuses)?)?;
            } else {
                write!(out, "{}", report::render_awards(&statuses, difficulty))?;
            }
        }
        Commands::Check { save } => {
            let mut ledger = UnlockLedger::from_records(std::mem::take(&mut data.awards));
            let report = evaluator.evaluate_history(&data.entries, &settings, today, &mut ledger);
            info!(newly_unlocked = report.len(), "evaluation complete");

            write!(out, "{}", report::render_unlocked(&report.all()))?;

            if save && !report.is_empty() {
                data.awards = ledger.into_records();
                fs::write(&path, data.to_json()?).with_context(|| format!("writing data file {}", path.display()))?;
                info!(path = %path.display(), "unlock records saved");
            }
        }
    }

    Ok(())
}
