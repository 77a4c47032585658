// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stage resolver
//!
//! Turns a status snapshot plus branch flags into the ordered stage list
//! a progress tracker renders. Pure: every call builds a fresh list.

use crate::catalog::{self, COMMISSION_ANCHOR, DEFAULT_ATTENTION_ANCHOR};
use crate::status::{AttentionReason, LifecycleStatus};
use serde::{Deserialize, Serialize};

/// Derived state of a single stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageState {
    Completed,
    Current,
    Upcoming,
}

impl std::fmt::Display for StageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StageState::Completed => "completed",
            StageState::Current => "current",
            StageState::Upcoming => "upcoming",
        };
        f.pad(s)
    }
}

/// One entry of a resolved stage list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDescriptor {
    pub id: LifecycleStatus,
    pub label: String,
    pub state: StageState,
}

/// Optional inputs that splice branch stages into the sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageFlags {
    /// When set, the attention stage is included
    pub attention_reason: Option<AttentionReason>,
    /// Free text shown in the attention callout
    #[serde(default)]
    pub attention_details: String,
    /// Base stage the attention branch is spliced after
    pub interrupted_stage: Option<LifecycleStatus>,
    /// Commission details were requested at some point; keeps the
    /// commission branch in the list independent of `interrupted_stage`
    #[serde(default)]
    pub commission_requested: bool,
    #[serde(default)]
    pub has_post_close_correction: bool,
    #[serde(default)]
    pub has_short_term_advancement: bool,
}

impl StageFlags {
    pub fn with_attention(
        mut self,
        reason: AttentionReason,
        details: impl Into<String>,
        interrupted: Option<LifecycleStatus>,
    ) -> Self {
        self.attention_reason = Some(reason);
        self.attention_details = details.into();
        self.interrupted_stage = interrupted;
        self
    }

    pub fn with_interrupted(mut self, stage: LifecycleStatus) -> Self {
        self.interrupted_stage = Some(stage);
        self
    }

    pub fn with_commission_requested(mut self) -> Self {
        self.commission_requested = true;
        self
    }

    pub fn with_post_close(mut self) -> Self {
        self.has_post_close_correction = true;
        self
    }

    pub fn with_short_term(mut self) -> Self {
        self.has_short_term_advancement = true;
        self
    }

    /// Base stage the attention branch is anchored to
    pub fn attention_anchor(&self) -> LifecycleStatus {
        self.interrupted_stage
            .filter(|s| catalog::is_base_stage(*s))
            .unwrap_or(DEFAULT_ATTENTION_ANCHOR)
    }
}

/// Resolve the ordered stage list for a status snapshot
pub fn resolve(current: LifecycleStatus, flags: &StageFlags) -> Vec<StageDescriptor> {
    resolve_with(Some(current), flags)
}

/// Resolve from an untyped status string
///
/// An unrecognized status still yields the stage list, with nothing
/// marked current and every stage upcoming.
pub fn resolve_raw(current: &str, flags: &StageFlags) -> Vec<StageDescriptor> {
    match current.parse::<LifecycleStatus>() {
        Ok(status) => resolve_with(Some(status), flags),
        Err(_) => {
            tracing::warn!(status = current, "unrecognized status, no stage marked current");
            resolve_with(None, flags)
        }
    }
}

fn resolve_with(current: Option<LifecycleStatus>, flags: &StageFlags) -> Vec<StageDescriptor> {
    let anchor = flags.attention_anchor();
    let current_position = current.and_then(|c| catalog::position(c, anchor));

    stage_sequence(current, flags)
        .into_iter()
        .map(|id| StageDescriptor {
            id,
            label: catalog::label(id).to_string(),
            state: derive_state(id, current, current_position, anchor),
        })
        .collect()
}

/// Ordered stage ids for the given snapshot, branches spliced in
fn stage_sequence(current: Option<LifecycleStatus>, flags: &StageFlags) -> Vec<LifecycleStatus> {
    let mut ids: Vec<LifecycleStatus> = catalog::base_stages().collect();

    if flags.attention_reason.is_some() {
        insert_after(&mut ids, flags.attention_anchor(), LifecycleStatus::NeedsAttention);
    }

    // Spliced second so it sits directly after commission review even when
    // the attention branch shares that anchor.
    let needs_commission = current == Some(LifecycleStatus::NeedsCommission)
        || flags.commission_requested
        || flags.interrupted_stage == Some(COMMISSION_ANCHOR);
    if needs_commission {
        insert_after(&mut ids, COMMISSION_ANCHOR, LifecycleStatus::NeedsCommission);
    }

    if flags.has_post_close_correction {
        ids.extend(catalog::POST_CLOSE_STAGES);
    }
    if flags.has_short_term_advancement {
        ids.extend(catalog::SHORT_TERM_STAGES);
    }

    ids
}

fn insert_after(ids: &mut Vec<LifecycleStatus>, anchor: LifecycleStatus, stage: LifecycleStatus) {
    match ids.iter().position(|s| *s == anchor) {
        Some(index) => ids.insert(index + 1, stage),
        None => ids.push(stage),
    }
}

fn derive_state(
    id: LifecycleStatus,
    current: Option<LifecycleStatus>,
    current_position: Option<usize>,
    anchor: LifecycleStatus,
) -> StageState {
    if Some(id) == current {
        return StageState::Current;
    }
    // Branch stages are never completed once passed
    if id.is_branch() {
        return StageState::Upcoming;
    }
    match (catalog::position(id, anchor), current_position) {
        (Some(position), Some(current)) if position < current => StageState::Completed,
        _ => StageState::Upcoming,
    }
}

/// The stage marked current, if any
pub fn current_stage(stages: &[StageDescriptor]) -> Option<&StageDescriptor> {
    stages.iter().find(|s| s.state == StageState::Current)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
