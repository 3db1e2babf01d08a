//! Threshold filter between classification and the sink.

use crate::events::ClassifiedRecord;
use crate::sink::LogSink;
use crate::types::{Severity, Threshold};

/// Forward `record` to `sink` if `threshold` admits its severity.
///
/// The sink entry point always matches `record.severity`. Returns whether the
/// record was forwarded; a dropped record leaves no trace.
pub fn dispatch<S>(record: &ClassifiedRecord, threshold: Threshold, sink: &S) -> bool
where
    S: LogSink + ?Sized,
{
    if !threshold.admits(record.severity) {
        return false;
    }

    match record.severity {
        Severity::Audit => sink.audit(record),
        Severity::Error => sink.error(record),
        Severity::Warn => sink.warn(record),
        Severity::Info => sink.info(record),
        Severity::Debug => sink.debug(record),
        Severity::Trace => sink.trace(record),
    }
    true
}
