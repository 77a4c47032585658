// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle transition table
//!
//! Forward edges between statuses. The attention branch is not listed
//! here: it can be entered from any base stage and always returns to the
//! stage it interrupted.

use crate::catalog;
use crate::status::LifecycleStatus;
use std::collections::{HashSet, VecDeque};

use LifecycleStatus::*;

/// Statuses directly reachable from `status` by a normal advance
pub fn next_statuses(status: LifecycleStatus) -> &'static [LifecycleStatus] {
    match status {
        Created => &[Documents],
        Documents => &[Review],
        Review => &[BrokerApproved],
        BrokerApproved => &[CommissionReview],
        CommissionReview => &[CommissionApproved, NeedsCommission],
        NeedsCommission => &[CommissionReview],
        CommissionApproved => &[CommissionDelivered],
        CommissionDelivered => &[ClosingScheduled],
        ClosingScheduled => &[Closed],
        Closed => &[FundsReceived],
        FundsReceived => &[PaymentIssued],
        PaymentIssued => &[PostCloseInitiated, InvoiceGenerated],
        PostCloseInitiated => &[PostCloseReview],
        PostCloseReview => &[PostCloseApproved],
        PostCloseApproved => &[PostCloseResolved],
        PostCloseResolved => &[InvoiceGenerated],
        InvoiceGenerated => &[PaymentReceived],
        PaymentReceived => &[],
        // Left only by resolving the attention item
        NeedsAttention => &[],
    }
}

/// Check if a normal advance from `from` to `to` is allowed
pub fn can_advance(from: LifecycleStatus, to: LifecycleStatus) -> bool {
    next_statuses(from).contains(&to)
}

/// Check if a transaction at `status` may be routed to the attention branch
pub fn can_flag_attention(status: LifecycleStatus) -> bool {
    catalog::is_base_stage(status)
}

/// Check if no further transition leaves `status`
pub fn is_terminal(status: LifecycleStatus) -> bool {
    next_statuses(status).is_empty() && !can_flag_attention(status) && status != NeedsAttention
}

/// Every status reachable from `Created`, including the attention branch
pub fn reachable_statuses() -> HashSet<LifecycleStatus> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([Created]);

    while let Some(status) = queue.pop_front() {
        if !seen.insert(status) {
            continue;
        }
        queue.extend(next_statuses(status).iter().copied());
        if can_flag_attention(status) {
            queue.push_back(NeedsAttention);
        }
    }

    seen
}

/// Check if `status` can be reached from `Created`
pub fn is_reachable(status: LifecycleStatus) -> bool {
    reachable_statuses().contains(&status)
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
