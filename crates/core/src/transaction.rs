// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transaction state machine
//!
//! Owns the current lifecycle status and the branch flags the resolver
//! needs. Transitions are validated against the transition table and
//! return the new state plus effects, leaving `self` untouched.

use crate::catalog::COMMISSION_ANCHOR;
use crate::clock::Clock;
use crate::error::LifecycleError;
use crate::event::{Effect, Event};
use crate::lifecycle;
use crate::resolver::{self, StageDescriptor, StageFlags};
use crate::status::{AttentionReason, LifecycleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An open exception on a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attention {
    pub reason: AttentionReason,
    pub details: String,
    /// Base stage the transaction returns to once resolved
    pub interrupted: LifecycleStatus,
}

/// Events that can change transaction state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionEvent {
    /// Move along an edge of the transition table
    Advance { to: LifecycleStatus },
    /// Route into the attention branch
    FlagAttention {
        reason: AttentionReason,
        details: String,
    },
    /// Leave the attention branch, back to the interrupted stage
    ResolveAttention,
    /// Commission review is missing details
    RequestCommissionInfo,
    /// Commission details arrived, back to commission review
    CommissionInfoReceived,
}

/// A real-estate transaction's lifecycle record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub name: String,
    pub status: LifecycleStatus,
    pub attention: Option<Attention>,
    /// Set once commission details were requested, keeps the branch visible
    #[serde(default)]
    pub commission_requested: bool,
    #[serde(default)]
    pub has_post_close_correction: bool,
    #[serde(default)]
    pub has_short_term_advancement: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(id: impl Into<String>, name: impl Into<String>, clock: &impl Clock) -> Self {
        let now = clock.now();
        Self {
            id: id.into(),
            name: name.into(),
            status: LifecycleStatus::Created,
            attention: None,
            commission_requested: false,
            has_post_close_correction: false,
            has_short_term_advancement: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Handle an event and return the new state plus effects
    pub fn transition(
        &self,
        event: TransactionEvent,
        clock: &impl Clock,
    ) -> Result<(Transaction, Vec<Effect>), LifecycleError> {
        let mut txn = self.clone();
        let mut effects = Vec::new();

        match event {
            TransactionEvent::Advance { to } => {
                if to.is_branch() || !lifecycle::can_advance(self.status, to) {
                    return Err(self.invalid(to));
                }
                txn.status = to;
                if to.is_post_close() && !self.has_post_close_correction {
                    txn.has_post_close_correction = true;
                    effects.push(Effect::Emit(Event::PostCloseOpened {
                        id: txn.id.clone(),
                    }));
                }
                if to.is_short_term() {
                    txn.has_short_term_advancement = true;
                }
                match to {
                    LifecycleStatus::Closed => effects.push(Effect::Emit(
                        Event::TransactionClosed { id: txn.id.clone() },
                    )),
                    LifecycleStatus::PaymentIssued => {
                        effects.push(Effect::Emit(Event::PaymentIssued { id: txn.id.clone() }))
                    }
                    _ => {}
                }
            }

            TransactionEvent::FlagAttention { reason, details } => {
                if !lifecycle::can_flag_attention(self.status) {
                    return Err(self.invalid(LifecycleStatus::NeedsAttention));
                }
                txn.status = LifecycleStatus::NeedsAttention;
                txn.attention = Some(Attention {
                    reason,
                    details: details.clone(),
                    interrupted: self.status,
                });
                effects.push(Effect::Emit(Event::AttentionRaised {
                    id: txn.id.clone(),
                    reason,
                    details,
                    interrupted: self.status,
                }));
            }

            TransactionEvent::ResolveAttention => {
                let attention = match (&self.attention, self.status) {
                    (Some(attention), LifecycleStatus::NeedsAttention) => attention.clone(),
                    _ => return Err(LifecycleError::NoAttention(self.id.clone())),
                };
                txn.status = attention.interrupted;
                txn.attention = None;
                effects.push(Effect::Emit(Event::AttentionResolved {
                    id: txn.id.clone(),
                    resumed: attention.interrupted,
                }));
            }

            TransactionEvent::RequestCommissionInfo => {
                if !lifecycle::can_advance(self.status, LifecycleStatus::NeedsCommission) {
                    return Err(self.invalid(LifecycleStatus::NeedsCommission));
                }
                txn.status = LifecycleStatus::NeedsCommission;
                txn.commission_requested = true;
                effects.push(Effect::Emit(Event::CommissionInfoRequested {
                    id: txn.id.clone(),
                }));
            }

            TransactionEvent::CommissionInfoReceived => {
                if self.status != LifecycleStatus::NeedsCommission {
                    return Err(self.invalid(COMMISSION_ANCHOR));
                }
                txn.status = COMMISSION_ANCHOR;
            }
        }

        txn.updated_at = clock.now();
        effects.insert(
            0,
            Effect::Emit(Event::StatusChanged {
                id: txn.id.clone(),
                from: self.status,
                to: txn.status,
            }),
        );
        tracing::debug!(id = %txn.id, from = %self.status, to = %txn.status, "transaction transition");

        Ok((txn, effects))
    }

    fn invalid(&self, to: LifecycleStatus) -> LifecycleError {
        LifecycleError::InvalidTransition {
            from: self.status,
            to,
        }
    }

    /// Branch flags for the stage resolver
    pub fn flags(&self) -> StageFlags {
        let mut flags = StageFlags {
            commission_requested: self.commission_requested,
            has_post_close_correction: self.has_post_close_correction,
            has_short_term_advancement: self.has_short_term_advancement,
            ..StageFlags::default()
        };
        if let Some(attention) = &self.attention {
            flags.attention_reason = Some(attention.reason);
            flags.attention_details = attention.details.clone();
            flags.interrupted_stage = Some(attention.interrupted);
        }
        flags
    }

    /// Resolved stage list for the current snapshot
    pub fn stages(&self) -> Vec<StageDescriptor> {
        resolver::resolve(self.status, &self.flags())
    }

    /// Check if no further transition is possible
    pub fn is_terminal(&self) -> bool {
        lifecycle::is_terminal(self.status)
    }

    /// Check that the snapshot is one the state machine can produce
    pub fn validate(&self) -> Result<(), LifecycleError> {
        if self.status == LifecycleStatus::NeedsCommission && !self.commission_requested {
            return Err(LifecycleError::Inconsistent(
                "needs-commission without a commission request".to_string(),
            ));
        }
        match (&self.attention, self.status) {
            (None, LifecycleStatus::NeedsAttention) => {
                return Err(LifecycleError::Inconsistent(
                    "needs-attention without an attention reason".to_string(),
                ));
            }
            (Some(_), status) if status != LifecycleStatus::NeedsAttention => {
                return Err(LifecycleError::Inconsistent(format!(
                    "attention recorded while {}",
                    status
                )));
            }
            (Some(attention), _) if !lifecycle::can_flag_attention(attention.interrupted) => {
                return Err(LifecycleError::Inconsistent(format!(
                    "attention cannot interrupt {}",
                    attention.interrupted
                )));
            }
            _ => {}
        }
        if self.status.is_post_close() && !self.has_post_close_correction {
            return Err(LifecycleError::Inconsistent(format!(
                "{} without a post-close correction",
                self.status
            )));
        }
        if self.status.is_short_term() && !self.has_short_term_advancement {
            return Err(LifecycleError::Inconsistent(format!(
                "{} without a short-term advancement",
                self.status
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "transaction_tests.rs"]
mod tests;
