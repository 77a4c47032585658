// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification bus for routing transaction events to subscribers
//!
//! The bus is passed to the components that publish or listen; there is
//! no process-wide instance. Clones share one routing table.

use super::subscription::{SubscriberId, Subscription};
use crate::event::{Effect, Event};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::mpsc;

pub type EventSender = mpsc::UnboundedSender<Event>;
pub type EventReceiver = mpsc::UnboundedReceiver<Event>;

/// Anything that accepts published events
pub trait EventSink {
    fn publish(&self, event: Event);

    /// Publish every `Emit` effect in order
    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Emit(event) => self.publish(event),
            }
        }
    }
}

struct Route {
    subscription: Subscription,
    tx: EventSender,
}

#[derive(Default)]
struct Routes {
    by_id: HashMap<SubscriberId, Route>,
    /// Receives every event regardless of pattern
    tap: Option<EventSender>,
}

/// Routes events to subscribers whose patterns match the event name
#[derive(Clone, Default)]
pub struct NotificationBus {
    routes: Arc<RwLock<Routes>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still holds a usable routing table
    fn read(&self) -> RwLockReadGuard<'_, Routes> {
        self.routes.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Routes> {
        self.routes.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Subscribe to events matching the subscription's patterns
    ///
    /// Re-subscribing with an existing id replaces the old subscription.
    pub fn subscribe(&self, subscription: Subscription) -> EventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = subscription.id.clone();
        let route = Route { subscription, tx };

        if self.write().by_id.insert(id.clone(), route).is_some() {
            tracing::debug!(subscriber = %id.0, "replaced existing subscription");
        }
        rx
    }

    pub fn unsubscribe(&self, id: &SubscriberId) -> bool {
        self.write().by_id.remove(id).is_some()
    }

    /// Receive a copy of every published event; replaces any earlier tap
    pub fn tap(&self) -> EventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.write().tap = Some(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.read().by_id.len()
    }

    /// Drop subscribers whose receivers are gone
    pub fn prune_closed(&self) -> usize {
        let mut routes = self.write();
        let before = routes.by_id.len();
        routes.by_id.retain(|_, route| !route.tx.is_closed());
        before - routes.by_id.len()
    }
}

impl EventSink for NotificationBus {
    fn publish(&self, event: Event) {
        let name = event.name();
        let routes = self.read();

        let mut delivered = 0usize;
        for route in routes.by_id.values() {
            if route.subscription.matches(&name) && route.tx.send(event.clone()).is_ok() {
                delivered += 1;
            }
        }
        tracing::debug!(event = %name, transaction = event.transaction_id(), delivered, "publish");

        if let Some(tap) = &routes.tap {
            let _ = tap.send(event);
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
