// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle status and attention reason definitions

use crate::error::LifecycleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The single authoritative state of a transaction
/// No `Ord`: declaration order is not lifecycle precedence, use `catalog::rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifecycleStatus {
    Created,
    Documents,
    Review,
    /// Exception branch, spliced after the interrupted stage
    NeedsAttention,
    BrokerApproved,
    CommissionReview,
    /// Commission branch, spliced after `CommissionReview`
    NeedsCommission,
    CommissionApproved,
    CommissionDelivered,
    ClosingScheduled,
    Closed,
    FundsReceived,
    PaymentIssued,
    PostCloseInitiated,
    PostCloseReview,
    PostCloseApproved,
    PostCloseResolved,
    InvoiceGenerated,
    PaymentReceived,
}

impl LifecycleStatus {
    /// Every status, in declaration order
    pub const ALL: [LifecycleStatus; 19] = [
        LifecycleStatus::Created,
        LifecycleStatus::Documents,
        LifecycleStatus::Review,
        LifecycleStatus::NeedsAttention,
        LifecycleStatus::BrokerApproved,
        LifecycleStatus::CommissionReview,
        LifecycleStatus::NeedsCommission,
        LifecycleStatus::CommissionApproved,
        LifecycleStatus::CommissionDelivered,
        LifecycleStatus::ClosingScheduled,
        LifecycleStatus::Closed,
        LifecycleStatus::FundsReceived,
        LifecycleStatus::PaymentIssued,
        LifecycleStatus::PostCloseInitiated,
        LifecycleStatus::PostCloseReview,
        LifecycleStatus::PostCloseApproved,
        LifecycleStatus::PostCloseResolved,
        LifecycleStatus::InvoiceGenerated,
        LifecycleStatus::PaymentReceived,
    ];

    /// Kebab-case identifier, as used on the wire and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleStatus::Created => "created",
            LifecycleStatus::Documents => "documents",
            LifecycleStatus::Review => "review",
            LifecycleStatus::NeedsAttention => "needs-attention",
            LifecycleStatus::BrokerApproved => "broker-approved",
            LifecycleStatus::CommissionReview => "commission-review",
            LifecycleStatus::NeedsCommission => "needs-commission",
            LifecycleStatus::CommissionApproved => "commission-approved",
            LifecycleStatus::CommissionDelivered => "commission-delivered",
            LifecycleStatus::ClosingScheduled => "closing-scheduled",
            LifecycleStatus::Closed => "closed",
            LifecycleStatus::FundsReceived => "funds-received",
            LifecycleStatus::PaymentIssued => "payment-issued",
            LifecycleStatus::PostCloseInitiated => "post-close-initiated",
            LifecycleStatus::PostCloseReview => "post-close-review",
            LifecycleStatus::PostCloseApproved => "post-close-approved",
            LifecycleStatus::PostCloseResolved => "post-close-resolved",
            LifecycleStatus::InvoiceGenerated => "invoice-generated",
            LifecycleStatus::PaymentReceived => "payment-received",
        }
    }

    /// Check if this status is one of the conditionally inserted branch stages
    pub fn is_branch(&self) -> bool {
        matches!(
            self,
            LifecycleStatus::NeedsAttention | LifecycleStatus::NeedsCommission
        )
    }

    /// Check if this status belongs to the post-close correction block
    pub fn is_post_close(&self) -> bool {
        matches!(
            self,
            LifecycleStatus::PostCloseInitiated
                | LifecycleStatus::PostCloseReview
                | LifecycleStatus::PostCloseApproved
                | LifecycleStatus::PostCloseResolved
        )
    }

    /// Check if this status belongs to the short-term advancement block
    pub fn is_short_term(&self) -> bool {
        matches!(
            self,
            LifecycleStatus::InvoiceGenerated | LifecycleStatus::PaymentReceived
        )
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LifecycleStatus {
    type Err = LifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifecycleStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| LifecycleError::UnknownStatus(s.to_string()))
    }
}

/// Why a transaction was routed into the attention branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttentionReason {
    Documents,
    Broker,
    Commission,
    Approval,
    Payment,
    Other,
}

impl AttentionReason {
    pub const ALL: [AttentionReason; 6] = [
        AttentionReason::Documents,
        AttentionReason::Broker,
        AttentionReason::Commission,
        AttentionReason::Approval,
        AttentionReason::Payment,
        AttentionReason::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttentionReason::Documents => "documents",
            AttentionReason::Broker => "broker",
            AttentionReason::Commission => "commission",
            AttentionReason::Approval => "approval",
            AttentionReason::Payment => "payment",
            AttentionReason::Other => "other",
        }
    }

    /// Human-readable description shown alongside the attention stage
    pub fn describe(&self) -> &'static str {
        match self {
            AttentionReason::Documents => "Missing or invalid documents",
            AttentionReason::Broker => "Broker action required",
            AttentionReason::Commission => "Commission discrepancy",
            AttentionReason::Approval => "Approval withheld",
            AttentionReason::Payment => "Payment problem",
            AttentionReason::Other => "Other issue",
        }
    }
}

impl fmt::Display for AttentionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AttentionReason {
    type Err = LifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttentionReason::ALL
            .iter()
            .copied()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| LifecycleError::UnknownReason(s.to_string()))
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
