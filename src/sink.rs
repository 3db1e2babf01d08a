//! Logging sinks.
//!
//! A [`LogSink`] exposes one entry point per severity. The dispatcher picks the
//! entry point matching the record's severity; the sink decides how to render
//! module context, category and payload.

use std::sync::{Arc, Mutex, PoisonError};

use crate::events::ClassifiedRecord;
use crate::types::Severity;

/// Leveled destination for classified records.
///
/// Sink failures are the sink's business: a panicking sink unwinds through
/// the dispatcher to the host.
#[cfg_attr(test, mockall::automock)]
pub trait LogSink {
    fn audit(&self, record: &ClassifiedRecord);
    fn error(&self, record: &ClassifiedRecord);
    fn warn(&self, record: &ClassifiedRecord);
    fn info(&self, record: &ClassifiedRecord);
    fn debug(&self, record: &ClassifiedRecord);
    fn trace(&self, record: &ClassifiedRecord);
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn audit(&self, record: &ClassifiedRecord) {
        (**self).audit(record)
    }
    fn error(&self, record: &ClassifiedRecord) {
        (**self).error(record)
    }
    fn warn(&self, record: &ClassifiedRecord) {
        (**self).warn(record)
    }
    fn info(&self, record: &ClassifiedRecord) {
        (**self).info(record)
    }
    fn debug(&self, record: &ClassifiedRecord) {
        (**self).debug(record)
    }
    fn trace(&self, record: &ClassifiedRecord) {
        (**self).trace(record)
    }
}

// =============================================================================
// TracingSink
// =============================================================================

/// Forwards records to `tracing` as structured events.
///
/// `category`, `module` and `payload` become event fields. `tracing` has no
/// audit level, so audit records go out at ERROR with `audit = true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

macro_rules! emit {
    ($level:expr, $record:expr $(, $field:ident = $value:expr)*) => {
        tracing::event!(
            $level,
            $($field = $value,)*
            category = %$record.category,
            module = $record.module.as_ref().map(tracing::field::display),
            payload = $record.payload.as_ref().map(tracing::field::display),
            "{}",
            $record.message
        )
    };
}

impl LogSink for TracingSink {
    fn audit(&self, record: &ClassifiedRecord) {
        emit!(tracing::Level::ERROR, record, audit = true);
    }
    fn error(&self, record: &ClassifiedRecord) {
        emit!(tracing::Level::ERROR, record);
    }
    fn warn(&self, record: &ClassifiedRecord) {
        emit!(tracing::Level::WARN, record);
    }
    fn info(&self, record: &ClassifiedRecord) {
        emit!(tracing::Level::INFO, record);
    }
    fn debug(&self, record: &ClassifiedRecord) {
        emit!(tracing::Level::DEBUG, record);
    }
    fn trace(&self, record: &ClassifiedRecord) {
        emit!(tracing::Level::TRACE, record);
    }
}

// =============================================================================
// RecordingSink
// =============================================================================

/// One call received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Entry point the record arrived through.
    pub level: Severity,
    pub record: ClassifiedRecord,
}

/// Keeps every record it receives, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes and returns everything received so far.
    pub fn drain(&self) -> Vec<LogEntry> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, level: Severity, record: &ClassifiedRecord) {
        self.lock().push(LogEntry {
            level,
            record: record.clone(),
        });
    }
}

impl LogSink for RecordingSink {
    fn audit(&self, record: &ClassifiedRecord) {
        self.push(Severity::Audit, record)
    }
    fn error(&self, record: &ClassifiedRecord) {
        self.push(Severity::Error, record)
    }
    fn warn(&self, record: &ClassifiedRecord) {
        self.push(Severity::Warn, record)
    }
    fn info(&self, record: &ClassifiedRecord) {
        self.push(Severity::Info, record)
    }
    fn debug(&self, record: &ClassifiedRecord) {
        self.push(Severity::Debug, record)
    }
    fn trace(&self, record: &ClassifiedRecord) {
        self.push(Severity::Trace, record)
    }
}
