//! Host-facing listener: classify each event, filter, forward.
//!
//! One [`EventLogger`] is registered with the host for all three event
//! sources. It owns the sink and a threshold resolved once at construction;
//! nothing changes after that, so it can be shared across the host's
//! notification threads as is.

use crate::dispatch::dispatch;
use crate::events::{
    classify_framework_event, classify_module_event, classify_service_event, FrameworkEvent,
    HostEvent, ModuleEvent, ServiceEvent,
};
use crate::sink::LogSink;
use crate::threshold::resolve_threshold;
use crate::types::{PropertySource, Threshold, FRAMEWORK_EVENTS_LOG_LEVEL};

/// Callbacks the host invokes, one per event source.
pub trait HostEventListener {
    fn module_changed(&self, event: &ModuleEvent);
    fn framework_event(&self, event: &FrameworkEvent);
    fn service_changed(&self, event: &ServiceEvent);

    /// Route a tagged event to the matching callback.
    fn on_event(&self, event: &HostEvent) {
        match event {
            HostEvent::Module(e) => self.module_changed(e),
            HostEvent::Framework(e) => self.framework_event(e),
            HostEvent::Service(e) => self.service_changed(e),
        }
    }
}

/// Logs host events to a [`LogSink`].
#[derive(Debug)]
pub struct EventLogger<S> {
    threshold: Threshold,
    sink: S,
}

impl<S: LogSink> EventLogger<S> {
    /// Resolve the threshold from `context`, then `system`, under
    /// [`FRAMEWORK_EVENTS_LOG_LEVEL`].
    pub fn new(
        context: Option<&dyn PropertySource>,
        system: &dyn PropertySource,
        sink: S,
    ) -> Self {
        let threshold = resolve_threshold(context, system, FRAMEWORK_EVENTS_LOG_LEVEL);
        tracing::debug!("event logger created: threshold={}", threshold);
        Self::with_threshold(threshold, sink)
    }

    pub fn with_threshold(threshold: Threshold, sink: S) -> Self {
        Self { threshold, sink }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: LogSink> HostEventListener for EventLogger<S> {
    fn module_changed(&self, event: &ModuleEvent) {
        dispatch(&classify_module_event(event), self.threshold, &self.sink);
    }

    fn framework_event(&self, event: &FrameworkEvent) {
        dispatch(&classify_framework_event(event), self.threshold, &self.sink);
    }

    fn service_changed(&self, event: &ServiceEvent) {
        dispatch(&classify_service_event(event), self.threshold, &self.sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{
        Category, FrameworkEventType, ModuleEventType, ModuleRef, ServiceEventType,
        ServiceReference,
    };
    use crate::sink::{MockLogSink, RecordingSink};
    use crate::types::{Properties, Severity};
    use std::sync::Arc;

    fn module() -> ModuleRef {
        ModuleRef::new(3, "org.example.store")
    }

    #[test]
    fn test_new_resolves_from_properties() {
        let system = Properties::new().with(FRAMEWORK_EVENTS_LOG_LEVEL, "debug");
        let logger = EventLogger::new(None, &system, RecordingSink::new());
        assert_eq!(logger.threshold(), Threshold::At(Severity::Debug));
    }

    #[test]
    fn test_default_threshold_drops_module_events() {
        let logger = EventLogger::new(None, &Properties::new(), RecordingSink::new());
        logger.module_changed(&ModuleEvent::new(ModuleEventType::Installed, module()));
        assert!(logger.sink().is_empty());
    }

    #[test]
    fn test_module_event_forwarded_at_info() {
        let mut sink = MockLogSink::new();
        sink.expect_info()
            .withf(|r| {
                r.category == Category::Module
                    && r.message == "BundleEvent STARTED"
                    && r.module.as_ref().map(|m| m.id) == Some(3)
            })
            .times(1)
            .return_const(());

        let logger = EventLogger::with_threshold(Threshold::At(Severity::Info), sink);
        logger.module_changed(&ModuleEvent::new(ModuleEventType::Started, module()));
    }

    #[test]
    fn test_service_modified_below_info_dropped() {
        let mut sink = MockLogSink::new();
        sink.expect_debug().never();

        let logger = EventLogger::with_threshold(Threshold::At(Severity::Info), sink);
        logger.service_changed(&ServiceEvent::new(
            ServiceEventType::Modified,
            ServiceReference::new(1, ["org.example.Cache"]),
        ));
    }

    #[test]
    fn test_on_event_routes() {
        let logger =
            EventLogger::with_threshold(Threshold::At(Severity::Trace), RecordingSink::new());
        logger.on_event(&FrameworkEvent::new(FrameworkEventType::Warning, None).into());
        logger.on_event(&ModuleEvent::new(ModuleEventType::Stopped, module()).into());

        let entries = logger.into_sink().drain();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Severity::Warn);
        assert_eq!(entries[0].record.category, Category::Framework);
        assert_eq!(entries[1].record.message, "BundleEvent STOPPED");
    }

    #[test]
    fn test_shared_as_trait_object() {
        let sink = Arc::new(RecordingSink::new());
        let listener: Arc<dyn HostEventListener + Send + Sync> = Arc::new(
            EventLogger::with_threshold(Threshold::At(Severity::Info), Arc::clone(&sink)),
        );

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let listener = Arc::clone(&listener);
                std::thread::spawn(move || {
                    listener.module_changed(&ModuleEvent::new(
                        ModuleEventType::Resolved,
                        ModuleRef::new(i, "worker"),
                    ));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.len(), 4);
    }
}
