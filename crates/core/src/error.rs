// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the lifecycle model

use crate::status::LifecycleStatus;
use thiserror::Error;

/// Errors raised when parsing or advancing a transaction lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    #[error("unknown attention reason: {0}")]
    UnknownReason(String),
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition {
        from: LifecycleStatus,
        to: LifecycleStatus,
    },
    #[error("transaction {0} has no open attention item")]
    NoAttention(String),
    #[error("inconsistent transaction: {0}")]
    Inconsistent(String),
}
