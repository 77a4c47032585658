// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing notifications derived from transaction events

use serde::{Deserialize, Serialize};

/// Notification urgency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyUrgency {
    /// Informational, shown in the feed only
    Normal,
    /// Shown as a toast
    Important,
    /// Stays visible until dismissed
    Critical,
}

impl std::fmt::Display for NotifyUrgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NotifyUrgency::Normal => "normal",
            NotifyUrgency::Important => "important",
            NotifyUrgency::Critical => "critical",
        };
        f.pad(s)
    }
}

/// A notification to display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub transaction_id: Option<String>,
    pub urgency: NotifyUrgency,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            transaction_id: None,
            urgency: NotifyUrgency::Normal,
        }
    }

    pub fn for_transaction(mut self, id: impl Into<String>) -> Self {
        self.transaction_id = Some(id.into());
        self
    }

    pub fn with_urgency(mut self, urgency: NotifyUrgency) -> Self {
        self.urgency = urgency;
        self
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.urgency, self.title, self.message)
    }
}
