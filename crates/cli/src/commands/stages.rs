// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `talos stages` - resolve and render the stage list for a status

use crate::error::TalosError;
use crate::output::{self, OutputFormat};
use clap::Args;
use serde::Serialize;
use std::fmt;
use talos_core::{
    resolve, resolve_raw, AttentionReason, Callout, LifecycleStatus, ProgressView, StageFlags,
    StageState, StageTone, TalosConfig,
};

#[derive(Args, Debug)]
pub struct StagesArgs {
    /// Current lifecycle status, e.g. `review`
    pub status: String,
    /// Attention reason; adds the Needs Attention stage
    #[arg(long)]
    pub attention: Option<AttentionReason>,
    /// Free-text details shown for the attention stage
    #[arg(long, default_value = "")]
    pub details: String,
    /// Base stage the attention branch interrupted
    #[arg(long)]
    pub interrupted: Option<LifecycleStatus>,
    /// Keep the Needs Commission Details stage in the list
    #[arg(long)]
    pub commission_requested: bool,
    /// Include the post-close correction stages
    #[arg(long)]
    pub post_close: bool,
    /// Include the short-term advancement stages
    #[arg(long)]
    pub short_term: bool,
    /// Accept unrecognized statuses (nothing is marked current)
    #[arg(long)]
    pub lenient: bool,
}

impl StagesArgs {
    fn flags(&self) -> StageFlags {
        StageFlags {
            attention_reason: self.attention,
            attention_details: self.details.clone(),
            interrupted_stage: self.interrupted,
            commission_requested: self.commission_requested,
            has_post_close_correction: self.post_close,
            has_short_term_advancement: self.short_term,
        }
    }
}

/// Rendered progress tracker
#[derive(Serialize)]
#[serde(transparent)]
pub struct StageReport(pub ProgressView);

impl fmt::Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = &self.0;
        writeln!(
            f,
            "Progress: {} {}%",
            output::bar(view.fraction, 20),
            view.percent()
        )?;
        for entry in &view.stages {
            let marker = match entry.stage.state {
                StageState::Completed => "x",
                StageState::Current => ">",
                StageState::Upcoming => " ",
            };
            let note = if entry.tone == StageTone::Attention {
                "  (exception)"
            } else {
                ""
            };
            writeln!(
                f,
                "  [{}] {:<22} {}{}",
                marker, entry.stage.id, entry.stage.label, note
            )?;
        }
        match &view.callout {
            Some(Callout::Attention { reason, details }) => {
                writeln!(f)?;
                writeln!(
                    f,
                    "Needs attention: {}",
                    reason.as_deref().unwrap_or("unspecified")
                )?;
                if !details.is_empty() {
                    writeln!(f, "  {}", details)?;
                }
            }
            Some(Callout::Commission { prompt }) => {
                writeln!(f)?;
                writeln!(f, "{}", prompt)?;
            }
            None => {}
        }
        Ok(())
    }
}

pub fn handle(args: StagesArgs, config: &TalosConfig, format: OutputFormat) -> anyhow::Result<()> {
    let flags = args.flags();
    let stages = match args.status.parse::<LifecycleStatus>() {
        Ok(status) => resolve(status, &flags),
        Err(_) if args.lenient || config.lenient => resolve_raw(&args.status, &flags),
        Err(_) => return Err(TalosError::unknown_status(&args.status).into()),
    };

    output::print(&StageReport(ProgressView::build(stages, &flags)), format)
}
