//! Resolution of the configured event threshold.

use crate::types::{PropertySource, Threshold};

/// Resolve the threshold configured under `key`.
///
/// The context source is consulted first, then the system source; the first
/// non-empty value wins. Missing, empty or unparsable values yield
/// [`Threshold::DEFAULT`] (`ERROR`).
pub fn resolve_threshold(
    context: Option<&dyn PropertySource>,
    system: &dyn PropertySource,
    key: &str,
) -> Threshold {
    let value = context
        .and_then(|source| non_empty(source.property(key)))
        .or_else(|| non_empty(system.property(key)));

    let Some(value) = value else {
        tracing::debug!("event threshold: key={} unset, using {}", key, Threshold::DEFAULT);
        return Threshold::DEFAULT;
    };

    match value.parse::<Threshold>() {
        Ok(threshold) => {
            tracing::debug!("event threshold: key={} value={} -> {}", key, value, threshold);
            threshold
        }
        Err(e) => {
            tracing::warn!(
                "event threshold: key={} {}, using {}",
                key,
                e,
                Threshold::DEFAULT
            );
            Threshold::DEFAULT
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
