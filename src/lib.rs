//! # Framework Events - lifecycle events to log records
//!
//! Translates notifications from a modular runtime host into leveled,
//! categorized log records:
//! - Module lifecycle transitions (installed, started, stopped, ...)
//! - Framework lifecycle, warnings and errors (with the attached error)
//! - Service registry changes (with the service reference)
//!
//! ## Architecture
//!
//! Each event is handled synchronously on the thread that delivers it:
//! ```text
//!   host event → classify → threshold filter → LogSink entry point
//!                (severity,    (resolved once     (audit/error/warn/
//!                 category,     at construction)   info/debug/trace)
//!                 message)             ↓
//!                                    drop
//! ```
//!
//! ## Example
//! ```
//! use framework_events::events::{ModuleEvent, ModuleEventType, ModuleRef};
//! use framework_events::{EventLogger, HostEventListener, Properties, RecordingSink};
//!
//! let system = Properties::new().with(framework_events::FRAMEWORK_EVENTS_LOG_LEVEL, "INFO");
//! let logger = EventLogger::new(None, &system, RecordingSink::new());
//!
//! logger.module_changed(&ModuleEvent::new(
//!     ModuleEventType::Started,
//!     ModuleRef::new(7, "org.example.web"),
//! ));
//! assert_eq!(logger.sink().entries()[0].record.message, "BundleEvent STARTED");
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod dispatch;
pub mod events;
pub mod handler;
pub mod sink;
pub mod threshold;
pub mod types;

// Internal utilities
pub mod observability;

pub use dispatch::dispatch;
pub use handler::{EventLogger, HostEventListener};
pub use sink::{LogEntry, LogSink, RecordingSink, TracingSink};
pub use threshold::resolve_threshold;
pub use types::{
    EnvProperties, Error, ObservabilityConfig, Properties, PropertySource, Result, Severity,
    Threshold, FRAMEWORK_EVENTS_LOG_LEVEL,
};
