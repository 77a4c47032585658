//! talos-core: transaction lifecycle model for the Talos closing desk
//!
//! This crate provides:
//! - The stage catalog and the pure stage resolver behind the progress tracker
//! - A progress presentation mapping (fill fraction, tones, callouts)
//! - The lifecycle transition table and the `Transaction` state machine
//! - An injected notification bus and notification rules

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod notify;

// Stage model (order matters for dependencies)
pub mod status;
pub mod catalog;
pub mod resolver;
pub mod progress;
pub mod lifecycle;
pub mod event;
pub mod transaction;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, NotifyConfig, NotifyRule, TalosConfig};
pub use error::LifecycleError;
pub use event::{Effect, Event};
pub use events::{EventPattern, EventSink, NotificationBus, Subscription};
pub use notify::{Notification, NotifyUrgency};
pub use progress::{progress_fraction, Callout, ProgressView, StageTone};
pub use resolver::{resolve, resolve_raw, StageDescriptor, StageFlags, StageState};
pub use status::{AttentionReason, LifecycleStatus};
pub use transaction::{Attention, Transaction, TransactionEvent};
