// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events emitted by the transaction state machine

use crate::status::{AttentionReason, LifecycleStatus};
use serde::{Deserialize, Serialize};

/// Effects are side effects that the state machine requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit an event for other components to observe
    Emit(Event),
}

/// Events emitted by the transaction state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    StatusChanged {
        id: String,
        from: LifecycleStatus,
        to: LifecycleStatus,
    },
    AttentionRaised {
        id: String,
        reason: AttentionReason,
        details: String,
        interrupted: LifecycleStatus,
    },
    AttentionResolved {
        id: String,
        resumed: LifecycleStatus,
    },
    CommissionInfoRequested {
        id: String,
    },
    TransactionClosed {
        id: String,
    },
    PaymentIssued {
        id: String,
    },
    PostCloseOpened {
        id: String,
    },
}

impl Event {
    /// Event name in `category:action` form, used for pattern matching
    pub fn name(&self) -> String {
        match self {
            Event::StatusChanged { .. } => "status:changed",
            Event::AttentionRaised { .. } => "attention:raised",
            Event::AttentionResolved { .. } => "attention:resolved",
            Event::CommissionInfoRequested { .. } => "commission:requested",
            Event::TransactionClosed { .. } => "transaction:closed",
            Event::PaymentIssued { .. } => "payment:issued",
            Event::PostCloseOpened { .. } => "postclose:opened",
        }
        .to_string()
    }

    /// Id of the transaction this event concerns
    pub fn transaction_id(&self) -> &str {
        match self {
            Event::StatusChanged { id, .. }
            | Event::AttentionRaised { id, .. }
            | Event::AttentionResolved { id, .. }
            | Event::CommissionInfoRequested { id }
            | Event::TransactionClosed { id }
            | Event::PaymentIssued { id }
            | Event::PostCloseOpened { id } => id,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
