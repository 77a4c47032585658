// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Publish/subscribe delivery of transaction events
//!
//! - `NotificationBus` - route events to matching subscribers
//! - `EventPattern` - pattern matching on event names

mod bus;
mod subscription;

pub use bus::{EventReceiver, EventSender, EventSink, NotificationBus};
pub use subscription::{EventPattern, SubscriberId, Subscription};
