//! Core types for the framework events adapter.
//!
//! - **Levels**: `Severity` and the reporting `Threshold`
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Property sources and observability configuration

mod config;
mod errors;
mod level;

pub use config::{
    EnvProperties, ObservabilityConfig, Properties, PropertySource, FRAMEWORK_EVENTS_LOG_LEVEL,
};
pub use errors::{Error, Result};
pub use level::{Severity, Threshold};
