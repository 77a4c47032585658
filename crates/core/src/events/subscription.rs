// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event name patterns and subscriptions

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Pattern over `category:action` event names
///
/// - `attention:raised` matches exactly
/// - `attention:*` matches one segment
/// - `status:**` matches the rest of the name
/// - `*` and `**` match every event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventPattern(String);

impl EventPattern {
    pub fn new(pattern: &str) -> Self {
        Self(pattern.trim().to_string())
    }

    /// Check if this pattern matches an event name
    pub fn matches(&self, event_name: &str) -> bool {
        if self.0.is_empty() {
            return false;
        }
        if self.0 == "*" || self.0 == "**" {
            return true;
        }

        let pattern: Vec<&str> = self.0.split(':').collect();
        let name: Vec<&str> = event_name.split(':').collect();
        match_segments(&pattern, &name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn match_segments(pattern: &[&str], name: &[&str]) -> bool {
    match (pattern.split_first(), name.split_first()) {
        (None, None) => true,
        (Some((&"**", _)), _) => true,
        (Some((&"*", p_rest)), Some((_, n_rest))) => match_segments(p_rest, n_rest),
        (Some((p, p_rest)), Some((n, n_rest))) if p == n => match_segments(p_rest, n_rest),
        _ => false,
    }
}

impl std::fmt::Display for EventPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for EventPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EventPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(EventPattern::new(&raw))
    }
}

/// Subscriber handle for unsubscribing
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub String);

/// A subscription to specific event patterns
#[derive(Clone, Debug)]
pub struct Subscription {
    pub id: SubscriberId,
    pub patterns: Vec<EventPattern>,
    pub description: String,
}

impl Subscription {
    pub fn new(
        id: impl Into<String>,
        patterns: Vec<EventPattern>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: SubscriberId(id.into()),
            patterns,
            description: description.into(),
        }
    }

    /// Check if any pattern matches the event name
    pub fn matches(&self, event_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(event_name))
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
