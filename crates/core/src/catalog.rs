// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stage catalog
//!
//! The fixed, totally ordered stage sequences and the single rank map
//! used to compare them. Branch stages (`needs-attention`,
//! `needs-commission`) carry no rank of their own; they borrow the
//! position of their anchor.

use crate::status::LifecycleStatus;

/// Early stages, before any review outcome
pub const EARLY_STAGES: [LifecycleStatus; 3] = [
    LifecycleStatus::Created,
    LifecycleStatus::Documents,
    LifecycleStatus::Review,
];

/// Broker approval and commission review
pub const MID_STAGES: [LifecycleStatus; 2] = [
    LifecycleStatus::BrokerApproved,
    LifecycleStatus::CommissionReview,
];

/// Commission approval through payment
pub const LATE_STAGES: [LifecycleStatus; 6] = [
    LifecycleStatus::CommissionApproved,
    LifecycleStatus::CommissionDelivered,
    LifecycleStatus::ClosingScheduled,
    LifecycleStatus::Closed,
    LifecycleStatus::FundsReceived,
    LifecycleStatus::PaymentIssued,
];

/// Appended when a post-close correction is open
pub const POST_CLOSE_STAGES: [LifecycleStatus; 4] = [
    LifecycleStatus::PostCloseInitiated,
    LifecycleStatus::PostCloseReview,
    LifecycleStatus::PostCloseApproved,
    LifecycleStatus::PostCloseResolved,
];

/// Appended when a short-term advancement exists
pub const SHORT_TERM_STAGES: [LifecycleStatus; 2] = [
    LifecycleStatus::InvoiceGenerated,
    LifecycleStatus::PaymentReceived,
];

/// Stage the attention branch falls back to when no valid anchor is given
pub const DEFAULT_ATTENTION_ANCHOR: LifecycleStatus = LifecycleStatus::Review;

/// Anchor of the commission branch
pub const COMMISSION_ANCHOR: LifecycleStatus = LifecycleStatus::CommissionReview;

/// The base sequence: early, mid and late stages in order
pub fn base_stages() -> impl Iterator<Item = LifecycleStatus> {
    EARLY_STAGES
        .into_iter()
        .chain(MID_STAGES)
        .chain(LATE_STAGES)
}

/// Every ranked stage in order, including the optional blocks
fn ranked_stages() -> impl Iterator<Item = LifecycleStatus> {
    base_stages().chain(POST_CLOSE_STAGES).chain(SHORT_TERM_STAGES)
}

/// Position of a stage in the single rank map
///
/// Returns `None` for branch statuses, which have no fixed position.
pub fn rank(status: LifecycleStatus) -> Option<usize> {
    ranked_stages().position(|s| s == status)
}

/// Check if a status is part of the fixed base sequence
pub fn is_base_stage(status: LifecycleStatus) -> bool {
    base_stages().any(|s| s == status)
}

/// Display label for a stage
pub fn label(status: LifecycleStatus) -> &'static str {
    match status {
        LifecycleStatus::Created => "Created",
        LifecycleStatus::Documents => "Documents Uploaded",
        LifecycleStatus::Review => "Under Review",
        LifecycleStatus::NeedsAttention => "Needs Attention",
        LifecycleStatus::BrokerApproved => "Broker Approved",
        LifecycleStatus::CommissionReview => "Commission Review",
        LifecycleStatus::NeedsCommission => "Needs Commission Details",
        LifecycleStatus::CommissionApproved => "Commission Approved",
        LifecycleStatus::CommissionDelivered => "Commission Delivered",
        LifecycleStatus::ClosingScheduled => "Closing Scheduled",
        LifecycleStatus::Closed => "Closed",
        LifecycleStatus::FundsReceived => "Funds Received",
        LifecycleStatus::PaymentIssued => "Payment Issued",
        LifecycleStatus::PostCloseInitiated => "Post-Close Correction Initiated",
        LifecycleStatus::PostCloseReview => "Post-Close Review",
        LifecycleStatus::PostCloseApproved => "Post-Close Approved",
        LifecycleStatus::PostCloseResolved => "Post-Close Resolved",
        LifecycleStatus::InvoiceGenerated => "Advancement Invoice Generated",
        LifecycleStatus::PaymentReceived => "Advancement Payment Received",
    }
}

/// Ordering key of a status relative to the stage sequence
///
/// Ranked stages sit at even positions; a branch status sits at the odd
/// slot right after its anchor, so every stage up to and including the
/// anchor counts as passed.
pub(crate) fn position(status: LifecycleStatus, attention_anchor: LifecycleStatus) -> Option<usize> {
    match status {
        LifecycleStatus::NeedsAttention => rank(attention_anchor).map(|r| r * 2 + 1),
        LifecycleStatus::NeedsCommission => rank(COMMISSION_ANCHOR).map(|r| r * 2 + 1),
        other => rank(other).map(|r| r * 2),
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
