// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification configuration
//!
//! Maps events to notifications based on pattern matching rules.

use crate::catalog;
use crate::event::Event;
use crate::events::EventPattern;
use crate::notify::{Notification, NotifyUrgency};
use serde::{Deserialize, Serialize};

/// Configuration for which events trigger notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotifyConfig {
    /// Checked in order; the first matching rule decides
    rules: Vec<NotifyRule>,
}

/// A rule mapping an event pattern to a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyRule {
    pub pattern: EventPattern,
    #[serde(default = "default_urgency")]
    pub urgency: NotifyUrgency,
    /// If true, show notification. If false, suppress.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_urgency() -> NotifyUrgency {
    NotifyUrgency::Normal
}

fn default_enabled() -> bool {
    true
}

impl NotifyConfig {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Default rules: exceptions are important, milestones are normal
    pub fn default_config() -> Self {
        let mut config = Self::new();

        config.add_rule("attention:raised", NotifyUrgency::Important, true);
        config.add_rule("attention:resolved", NotifyUrgency::Normal, true);
        config.add_rule("commission:requested", NotifyUrgency::Important, true);
        config.add_rule("transaction:closed", NotifyUrgency::Normal, true);
        config.add_rule("payment:issued", NotifyUrgency::Normal, true);
        config.add_rule("postclose:opened", NotifyUrgency::Critical, true);

        config
    }

    pub fn add_rule(&mut self, pattern: &str, urgency: NotifyUrgency, enabled: bool) {
        self.rules.push(NotifyRule {
            pattern: EventPattern::new(pattern),
            urgency,
            enabled,
        });
    }

    /// Place rules ahead of the existing ones so they take precedence
    pub fn prepend(&mut self, rules: Vec<NotifyRule>) {
        self.rules.splice(0..0, rules);
    }

    pub fn rules(&self) -> &[NotifyRule] {
        &self.rules
    }

    /// Check if an event should trigger a notification
    pub fn should_notify(&self, event: &Event) -> Option<NotifyUrgency> {
        let event_name = event.name();
        let rule = self.rules.iter().find(|r| r.pattern.matches(&event_name))?;
        rule.enabled.then_some(rule.urgency)
    }

    /// Convert an event to a notification if configured
    pub fn to_notification(&self, event: &Event) -> Option<Notification> {
        let urgency = self.should_notify(event)?;
        Some(
            event_to_notification(event)
                .for_transaction(event.transaction_id())
                .with_urgency(urgency),
        )
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

fn event_to_notification(event: &Event) -> Notification {
    match event {
        Event::StatusChanged { id, from, to } => Notification::new(
            "Status Changed",
            format!("{}: {} -> {}", id, catalog::label(*from), catalog::label(*to)),
        ),
        Event::AttentionRaised {
            id,
            reason,
            details,
            interrupted,
        } => {
            let mut message = format!(
                "{} needs attention at {}: {}",
                id,
                catalog::label(*interrupted),
                reason.describe()
            );
            if !details.is_empty() {
                message.push_str(&format!(" ({})", details));
            }
            Notification::new("Needs Attention", message)
        }
        Event::AttentionResolved { id, resumed } => Notification::new(
            "Issue Resolved",
            format!("{} resumed at {}", id, catalog::label(*resumed)),
        ),
        Event::CommissionInfoRequested { id } => Notification::new(
            "Commission Details Needed",
            format!("{} is waiting on commission details", id),
        ),
        Event::TransactionClosed { id } => {
            Notification::new("Transaction Closed", format!("{} has closed", id))
        }
        Event::PaymentIssued { id } => {
            Notification::new("Payment Issued", format!("Payment issued for {}", id))
        }
        Event::PostCloseOpened { id } => Notification::new(
            "Post-Close Correction",
            format!("A post-close correction was opened for {}", id),
        ),
    }
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
