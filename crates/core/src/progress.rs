// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress presentation mapping
//!
//! Rendering-agnostic view of a resolved stage list: fill fraction,
//! per-stage tone and the current-stage callout.

use crate::resolver::{StageDescriptor, StageFlags, StageState};
use crate::status::LifecycleStatus;
use serde::Serialize;

/// Static prompt shown while commission details are outstanding
pub const COMMISSION_PROMPT: &str =
    "Commission details are required before this transaction can proceed.";

/// Colour class of a stage marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageTone {
    /// Green
    Completed,
    /// Purple
    Current,
    /// Amber, for exception branches regardless of state
    Attention,
    /// Gray
    Upcoming,
}

impl StageTone {
    pub fn for_stage(stage: &StageDescriptor) -> Self {
        if stage.id.is_branch() {
            return StageTone::Attention;
        }
        match stage.state {
            StageState::Completed => StageTone::Completed,
            StageState::Current => StageTone::Current,
            StageState::Upcoming => StageTone::Upcoming,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StageTone::Completed => "green",
            StageTone::Current => "purple",
            StageTone::Attention => "amber",
            StageTone::Upcoming => "gray",
        }
    }
}

/// Side-panel content for the current stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Callout {
    Attention { reason: Option<String>, details: String },
    Commission { prompt: String },
}

impl Callout {
    pub fn for_current(current: LifecycleStatus, flags: &StageFlags) -> Option<Self> {
        match current {
            LifecycleStatus::NeedsAttention => Some(Callout::Attention {
                reason: flags.attention_reason.map(|r| r.describe().to_string()),
                details: flags.attention_details.clone(),
            }),
            LifecycleStatus::NeedsCommission => Some(Callout::Commission {
                prompt: COMMISSION_PROMPT.to_string(),
            }),
            _ => None,
        }
    }
}

/// Fraction of the progress bar to fill, in `0.0..=1.0`
///
/// Measured to the current stage, or to the last completed stage when
/// nothing is current.
pub fn progress_fraction(stages: &[StageDescriptor]) -> f64 {
    if stages.len() < 2 {
        return 0.0;
    }
    let reached = stages
        .iter()
        .position(|s| s.state == StageState::Current)
        .or_else(|| stages.iter().rposition(|s| s.state == StageState::Completed));
    match reached {
        Some(index) => index as f64 / (stages.len() - 1) as f64,
        None => 0.0,
    }
}

/// A stage with its presentation tone
#[derive(Debug, Clone, Serialize)]
pub struct ToneStage {
    #[serde(flatten)]
    pub stage: StageDescriptor,
    pub tone: StageTone,
}

/// Everything a progress tracker needs to paint one transaction
#[derive(Debug, Clone, Serialize)]
pub struct ProgressView {
    pub stages: Vec<ToneStage>,
    pub fraction: f64,
    pub current: Option<LifecycleStatus>,
    pub callout: Option<Callout>,
}

impl ProgressView {
    pub fn build(stages: Vec<StageDescriptor>, flags: &StageFlags) -> Self {
        let fraction = progress_fraction(&stages);
        let current = crate::resolver::current_stage(&stages).map(|s| s.id);
        let callout = current.and_then(|c| Callout::for_current(c, flags));
        let stages = stages
            .into_iter()
            .map(|stage| ToneStage {
                tone: StageTone::for_stage(&stage),
                stage,
            })
            .collect();
        Self {
            stages,
            fraction,
            current,
            callout,
        }
    }

    /// Percentage of the bar filled, rounded down
    pub fn percent(&self) -> u8 {
        (self.fraction * 100.0).floor().clamp(0.0, 100.0) as u8
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
