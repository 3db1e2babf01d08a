//! Configuration structures.
//!
//! Configuration is read through [`PropertySource`] lookups: a request-scoped
//! context source and a process-global one (the environment, or a properties
//! file loaded at startup).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use super::errors::Result;

/// Property naming the minimum severity of logged framework events.
pub const FRAMEWORK_EVENTS_LOG_LEVEL: &str =
    "org.ops4j.pax.logging.service.frameworkEventsLogLevel";

/// Key/value lookup for configuration properties.
pub trait PropertySource {
    /// Returns the value for `key`, or `None` when the source doesn't have it.
    fn property(&self, key: &str) -> Option<String>;
}

impl PropertySource for HashMap<String, String> {
    fn property(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl PropertySource for BTreeMap<String, String> {
    fn property(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: PropertySource + ?Sized> PropertySource for &T {
    fn property(&self, key: &str) -> Option<String> {
        (**self).property(key)
    }
}

/// In-memory property set.
///
/// Deserializes from a flat JSON object of string values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

impl PropertySource for Properties {
    fn property(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }
}

/// Process environment as a property source.
///
/// `org.example.someKey` is looked up as `ORG_EXAMPLE_SOMEKEY`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvProperties;

impl EnvProperties {
    pub fn env_var_name(key: &str) -> String {
        key.chars()
            .map(|c| match c {
                '.' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect()
    }
}

impl PropertySource for EnvProperties {
    fn property(&self, key: &str) -> Option<String> {
        std::env::var(Self::env_var_name(key)).ok()
    }
}

/// Observability configuration for the crate's own diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Filter directive used when `RUST_LOG` is unset (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Reads `FRAMEWORK_EVENTS_LOG_FORMAT` (json or text) over the defaults.
    pub fn from_env() -> Self {
        let json_logs = std::env::var("FRAMEWORK_EVENTS_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        Self {
            json_logs,
            ..Self::default()
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
