// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `talos walk` - drive a transaction through a path of statuses

use super::stages::StageReport;
use crate::error::TalosError;
use crate::output::{self, OutputFormat};
use clap::Args;
use serde::Serialize;
use std::fmt;
use talos_core::{
    AttentionReason, EventPattern, EventSink, LifecycleStatus, Notification, NotificationBus,
    ProgressView, Subscription, SystemClock, TalosConfig, Transaction, TransactionEvent,
};

#[derive(Args, Debug)]
pub struct WalkArgs {
    /// Statuses to visit in order, starting from `created`
    #[arg(required = true)]
    pub path: Vec<String>,
    /// Transaction id used in notifications
    #[arg(long, default_value = "txn-1")]
    pub id: String,
    /// Reason used when the path enters needs-attention
    #[arg(long, default_value = "other")]
    pub attention: AttentionReason,
    /// Details used when the path enters needs-attention
    #[arg(long, default_value = "")]
    pub details: String,
}

#[derive(Serialize)]
struct WalkReport {
    transaction: Transaction,
    notifications: Vec<Notification>,
    progress: StageReport,
}

impl fmt::Display for WalkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for notification in &self.notifications {
            writeln!(f, "{}", notification)?;
        }
        if !self.notifications.is_empty() {
            writeln!(f)?;
        }
        writeln!(f, "Transaction {} is at {}", self.transaction.id, self.transaction.status)?;
        write!(f, "{}", self.progress)
    }
}

/// Pick the state machine event that moves `txn` to `to`
fn event_for(txn: &Transaction, to: LifecycleStatus, args: &WalkArgs) -> TransactionEvent {
    match to {
        LifecycleStatus::NeedsAttention => TransactionEvent::FlagAttention {
            reason: args.attention,
            details: args.details.clone(),
        },
        LifecycleStatus::NeedsCommission => TransactionEvent::RequestCommissionInfo,
        _ if txn.status == LifecycleStatus::NeedsAttention
            && txn.attention.as_ref().map(|a| a.interrupted) == Some(to) =>
        {
            TransactionEvent::ResolveAttention
        }
        _ if txn.status == LifecycleStatus::NeedsCommission => {
            TransactionEvent::CommissionInfoReceived
        }
        _ => TransactionEvent::Advance { to },
    }
}

pub fn handle(args: WalkArgs, config: &TalosConfig, format: OutputFormat) -> anyhow::Result<()> {
    let clock = SystemClock;
    let bus = NotificationBus::new();
    let mut feed = bus.subscribe(Subscription::new(
        "walk-feed",
        vec![EventPattern::new("**")],
        "Notifications printed by talos walk",
    ));
    let notify = config.notify_config();

    let mut txn = Transaction::new(args.id.clone(), args.id.clone(), &clock);
    for raw in &args.path {
        let to: LifecycleStatus = raw.parse().map_err(|_| TalosError::unknown_status(raw))?;
        let event = event_for(&txn, to, &args);
        tracing::info!(from = %txn.status, to = %to, "walk step");

        let (next, effects) = txn.transition(event, &clock).map_err(TalosError::from)?;
        if next.status != to {
            return Err(TalosError::invalid_transition(txn.status, to).into());
        }
        bus.apply(effects);
        txn = next;
    }

    let mut notifications = Vec::new();
    while let Ok(event) = feed.try_recv() {
        notifications.extend(notify.to_notification(&event));
    }

    let flags = txn.flags();
    let report = WalkReport {
        progress: StageReport(ProgressView::build(txn.stages(), &flags)),
        transaction: txn,
        notifications,
    };
    output::print(&report, format)
}
