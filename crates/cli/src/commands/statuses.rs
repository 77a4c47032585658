// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `talos statuses` and `talos next` - inspect the catalog and transition table

use crate::error::TalosError;
use crate::output::{self, OutputFormat};
use clap::Args;
use serde::Serialize;
use std::fmt;
use talos_core::{catalog, lifecycle, LifecycleStatus};

#[derive(Serialize)]
struct StatusInfo {
    id: LifecycleStatus,
    label: &'static str,
    kind: &'static str,
}

impl StatusInfo {
    fn new(status: LifecycleStatus) -> Self {
        let kind = if status.is_branch() {
            "branch"
        } else if status.is_post_close() {
            "post-close"
        } else if status.is_short_term() {
            "short-term"
        } else {
            "base"
        };
        Self {
            id: status,
            label: catalog::label(status),
            kind,
        }
    }
}

impl fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<22} {:<11} {}", self.id, self.kind, self.label)
    }
}

pub fn list(format: OutputFormat) -> anyhow::Result<()> {
    let infos: Vec<StatusInfo> = LifecycleStatus::ALL.into_iter().map(StatusInfo::new).collect();
    output::print_list(&infos, format)
}

#[derive(Args, Debug)]
pub struct NextArgs {
    /// Status to list outgoing transitions for
    pub status: String,
}

#[derive(Serialize)]
struct NextInfo {
    from: LifecycleStatus,
    next: Vec<LifecycleStatus>,
    can_flag_attention: bool,
    terminal: bool,
}

impl fmt::Display for NextInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terminal {
            return writeln!(f, "{} is terminal", self.from);
        }
        for status in &self.next {
            writeln!(f, "{}", status)?;
        }
        if self.can_flag_attention {
            writeln!(f, "{} (flag attention)", LifecycleStatus::NeedsAttention)?;
        }
        if self.from == LifecycleStatus::NeedsAttention {
            writeln!(f, "(resolve attention to return to the interrupted stage)")?;
        }
        Ok(())
    }
}

pub fn next(args: NextArgs, format: OutputFormat) -> anyhow::Result<()> {
    let from: LifecycleStatus = args
        .status
        .parse()
        .map_err(|_| TalosError::unknown_status(&args.status))?;

    let info = NextInfo {
        from,
        next: lifecycle::next_statuses(from).to_vec(),
        can_flag_attention: lifecycle::can_flag_attention(from),
        terminal: lifecycle::is_terminal(from),
    };
    output::print(&info, format)
}
