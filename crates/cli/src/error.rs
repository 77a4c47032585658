// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Errors carry:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use std::fmt;
use talos_core::{ConfigError, LifecycleError, LifecycleStatus};

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct TalosError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TalosError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Status string that names no lifecycle status
    pub fn unknown_status(raw: &str) -> Self {
        TalosError::new(format!("Unknown status '{}'", raw))
            .with_context("Statuses are kebab-case, e.g. 'broker-approved'")
            .with_suggestion("List valid statuses: talos statuses")
            .with_suggestion("Render anyway with nothing current: talos stages --lenient")
    }

    /// Transition the table does not allow
    pub fn invalid_transition(from: LifecycleStatus, to: LifecycleStatus) -> Self {
        TalosError::new(format!("Cannot move from '{}' to '{}'", from, to))
            .with_context("Transactions advance one stage at a time")
            .with_suggestion(format!("See allowed moves: talos next {}", from))
    }

    pub fn config(err: ConfigError) -> Self {
        TalosError::new("Failed to load configuration")
            .with_context(err.to_string())
            .with_suggestion("Check the file named by --config or TALOS_CONFIG")
            .with_source(err)
    }
}

impl From<LifecycleError> for TalosError {
    fn from(err: LifecycleError) -> Self {
        match &err {
            LifecycleError::UnknownStatus(raw) => TalosError::unknown_status(raw),
            LifecycleError::InvalidTransition { from, to } => {
                TalosError::invalid_transition(*from, *to)
            }
            LifecycleError::NoAttention(id) => {
                TalosError::new(format!("Transaction '{}' has no open issue", id))
                    .with_suggestion("Raise one first by walking to needs-attention")
            }
            _ => TalosError::new(err.to_string()),
        }
        .with_source(err)
    }
}

impl fmt::Display for TalosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for TalosError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
