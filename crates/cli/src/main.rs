// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! talos - transaction lifecycle tracker CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod completions;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{stages, statuses, walk};
use completions::CompletionsArgs;
use error::TalosError;
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use talos_core::TalosConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "TALOS_LOG";

#[derive(Parser)]
#[command(
    name = "talos",
    version,
    about = "Talos - real-estate transaction lifecycle tracker"
)]
struct Cli {
    /// Config file (defaults to $TALOS_CONFIG, then ./talos.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the stage list and progress for a status
    Stages(stages::StagesArgs),
    /// List every lifecycle status
    Statuses,
    /// List the transitions out of a status
    Next(statuses::NextArgs),
    /// Walk a transaction through a path of statuses
    Walk(walk::WalkArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<TalosError>() {
                Some(talos_err) => eprint!("{}", talos_err),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.output;

    match cli.command {
        Commands::Statuses => statuses::list(format),
        Commands::Next(args) => statuses::next(args, format),
        Commands::Completions(args) => {
            completions::handle::<Cli>(args);
            Ok(())
        }
        Commands::Stages(args) => {
            let config = load_config(cli.config)?;
            stages::handle(args, &config, format)
        }
        Commands::Walk(args) => {
            let config = load_config(cli.config)?;
            walk::handle(args, &config, format)
        }
    }
}

fn load_config(explicit: Option<PathBuf>) -> Result<TalosConfig> {
    let cwd = std::env::current_dir()?;
    let config = TalosConfig::discover(explicit.as_deref(), &cwd).map_err(TalosError::config)?;
    tracing::debug!(lenient = config.lenient, rules = config.notify_rules.len(), "config loaded");
    Ok(config)
}

/// Log to stderr, filtered by `TALOS_LOG` (default `warn`)
fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
