//! Event classification: host lifecycle events → leveled log records.
//!
//! Pure deterministic mapping. Every type code is covered; codes this crate
//! doesn't decode produce an `[unknown...]` message at the kind's default
//! severity instead of an error.
//!
//! Mapping rules:
//!   module event     → INFO always                    "BundleEvent <SYMBOL>"
//!   framework event  → ERROR / WARN for error/warning "FrameworkEvent <SYMBOL>"
//!                      INFO otherwise
//!   service event    → DEBUG for MODIFIED             "ServiceEvent <SYMBOL> - <reference>"
//!                      INFO otherwise

use serde::Serialize;
use std::fmt;

use super::model::{
    EventError, FrameworkEvent, FrameworkEventType, HostEvent, ModuleEvent, ModuleRef,
    ServiceEvent, ServiceEventType, ServiceReference,
};
use crate::types::Severity;

/// Log category an event is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Events.Module")]
    Module,
    #[serde(rename = "Events.Framework")]
    Framework,
    #[serde(rename = "Events.Service")]
    Service,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Module => "Events.Module",
            Category::Framework => "Events.Framework",
            Category::Service => "Events.Service",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra argument handed to the sink alongside the message.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Error attached to a framework event.
    Error(EventError),
    /// The service whose registration changed.
    Service(ServiceReference),
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Error(error) => f.write_str(&error.chain()),
            Payload::Service(reference) => reference.fmt(f),
        }
    }
}

/// Outcome of classifying one event.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    /// Module the record is logged on behalf of.
    pub module: Option<ModuleRef>,
    pub payload: Option<Payload>,
}

/// Classify a module lifecycle event.
///
/// Module events are always `INFO`, whatever the transition. The module
/// travels as log context and is not appended to the message.
pub fn classify_module_event(event: &ModuleEvent) -> ClassifiedRecord {
    let message = match event.kind() {
        Some(kind) => format!("BundleEvent {}", kind.symbol()),
        None => format!("BundleEvent [unknown: {}]", event.code),
    };

    ClassifiedRecord {
        severity: Severity::Info,
        category: Category::Module,
        message,
        module: event.module.clone(),
        payload: None,
    }
}

/// Classify a framework event. An attached error becomes the payload.
pub fn classify_framework_event(event: &FrameworkEvent) -> ClassifiedRecord {
    let (severity, message) = match event.kind() {
        Some(kind) => {
            let severity = match kind {
                FrameworkEventType::Error => Severity::Error,
                FrameworkEventType::Warning => Severity::Warn,
                FrameworkEventType::Started
                | FrameworkEventType::PackagesRefreshed
                | FrameworkEventType::StartLevelChanged
                | FrameworkEventType::Info => Severity::Info,
            };
            (severity, format!("FrameworkEvent {}", kind.symbol()))
        }
        None => (Severity::Info, format!("FrameworkEvent [unknown:{}]", event.code)),
    };

    ClassifiedRecord {
        severity,
        category: Category::Framework,
        message,
        module: event.module.clone(),
        payload: event.error.clone().map(Payload::Error),
    }
}

/// Classify a service registry event.
///
/// The message always ends with `" - <reference>"`, for unknown codes too.
pub fn classify_service_event(event: &ServiceEvent) -> ClassifiedRecord {
    let (severity, label) = match event.kind() {
        Some(ServiceEventType::Modified) => (Severity::Debug, "ServiceEvent MODIFIED".to_string()),
        Some(kind) => (Severity::Info, format!("ServiceEvent {}", kind.symbol())),
        None => (Severity::Info, format!("ServiceEvent [unknown:{}]", event.code)),
    };

    ClassifiedRecord {
        severity,
        category: Category::Service,
        message: format!("{} - {}", label, event.reference),
        module: event.reference.module.clone(),
        payload: Some(Payload::Service(event.reference.clone())),
    }
}

/// Classify any host event.
pub fn classify(event: &HostEvent) -> ClassifiedRecord {
    match event {
        HostEvent::Module(e) => classify_module_event(e),
        HostEvent::Framework(e) => classify_framework_event(e),
        HostEvent::Service(e) => classify_service_event(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::model::ModuleEventType;
    use pretty_assertions::assert_eq;

    fn module() -> ModuleRef {
        ModuleRef::new(12, "org.example.greeter")
    }

    fn greeter_ref() -> ServiceReference {
        ServiceReference::new(31, ["org.example.Greeter"]).registered_by(module())
    }

    #[test]
    fn test_module_events_are_info() {
        for kind in ModuleEventType::ALL {
            let record = classify_module_event(&ModuleEvent::new(kind, module()));
            assert_eq!(record.severity, Severity::Info);
            assert_eq!(record.category, Category::Module);
            assert_eq!(record.message, format!("BundleEvent {}", kind.symbol()));
            assert_eq!(record.module, Some(module()));
            assert_eq!(record.payload, None);
        }
    }

    #[test]
    fn test_module_symbols() {
        let messages: Vec<String> = ModuleEventType::ALL
            .into_iter()
            .map(|kind| classify_module_event(&ModuleEvent::new(kind, module())).message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "BundleEvent INSTALLED",
                "BundleEvent STARTED",
                "BundleEvent STOPPED",
                "BundleEvent UPDATED",
                "BundleEvent UNINSTALLED",
                "BundleEvent RESOLVED",
                "BundleEvent UNRESOLVED",
                "BundleEvent STARTING",
                "BundleEvent STOPPING",
            ]
        );
    }

    #[test]
    fn test_module_unknown_code() {
        let record = classify_module_event(&ModuleEvent::from_code(
            ModuleEventType::LAZY_ACTIVATION_CODE,
            None,
        ));
        assert_eq!(record.severity, Severity::Info);
        assert_eq!(record.message, "BundleEvent [unknown: 512]");
        assert_eq!(record.module, None);
    }

    #[test]
    fn test_framework_severities() {
        let expected = [
            (FrameworkEventType::Started, Severity::Info, "FrameworkEvent STARTED"),
            (FrameworkEventType::Error, Severity::Error, "FrameworkEvent ERROR"),
            (
                FrameworkEventType::PackagesRefreshed,
                Severity::Info,
                "FrameworkEvent PACKAGES REFRESHED",
            ),
            (
                FrameworkEventType::StartLevelChanged,
                Severity::Info,
                "FrameworkEvent STARTLEVEL CHANGED",
            ),
            (FrameworkEventType::Warning, Severity::Warn, "FrameworkEvent WARNING"),
            (FrameworkEventType::Info, Severity::Info, "FrameworkEvent INFO"),
        ];
        for (kind, severity, message) in expected {
            let record = classify_framework_event(&FrameworkEvent::new(kind, None));
            assert_eq!(record.severity, severity, "{kind:?}");
            assert_eq!(record.message, message);
            assert_eq!(record.category, Category::Framework);
        }
    }

    #[test]
    fn test_framework_unknown_code_has_no_space() {
        let record = classify_framework_event(&FrameworkEvent::from_code(0x40, Some(module())));
        assert_eq!(record.severity, Severity::Info);
        assert_eq!(record.message, "FrameworkEvent [unknown:64]");
    }

    #[test]
    fn test_framework_error_payload() {
        let error = EventError::new(std::io::Error::other("activator threw"));
        let event = FrameworkEvent::new(FrameworkEventType::Error, Some(module()))
            .with_error(error.clone());

        let record = classify_framework_event(&event);
        assert_eq!(record.payload, Some(Payload::Error(error)));
        assert_eq!(record.module, Some(module()));
    }

    #[test]
    fn test_framework_without_error_has_no_payload() {
        let record = classify_framework_event(&FrameworkEvent::new(FrameworkEventType::Info, None));
        assert_eq!(record.payload, None);
    }

    #[test]
    fn test_service_severities_and_suffix() {
        let expected = [
            (ServiceEventType::Registered, Severity::Info, "ServiceEvent REGISTERED"),
            (ServiceEventType::Modified, Severity::Debug, "ServiceEvent MODIFIED"),
            (ServiceEventType::Unregistering, Severity::Info, "ServiceEvent UNREGISTERING"),
        ];
        for (kind, severity, label) in expected {
            let record = classify_service_event(&ServiceEvent::new(kind, greeter_ref()));
            assert_eq!(record.severity, severity, "{kind:?}");
            assert_eq!(
                record.message,
                format!("{label} - [org.example.Greeter] (service.id=31)")
            );
            assert_eq!(record.category, Category::Service);
            assert_eq!(record.payload, Some(Payload::Service(greeter_ref())));
            assert_eq!(record.module, Some(module()));
        }
    }

    #[test]
    fn test_service_unknown_code_keeps_suffix() {
        let record = classify_service_event(&ServiceEvent::from_code(8, greeter_ref()));
        assert_eq!(record.severity, Severity::Info);
        assert_eq!(
            record.message,
            "ServiceEvent [unknown:8] - [org.example.Greeter] (service.id=31)"
        );
    }

    #[test]
    fn test_service_without_registering_module() {
        let reference = ServiceReference::new(2, ["a.B"]);
        let record = classify_service_event(&ServiceEvent::new(ServiceEventType::Registered, reference));
        assert_eq!(record.module, None);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let event = HostEvent::Framework(
            FrameworkEvent::new(FrameworkEventType::Error, Some(module()))
                .with_error(EventError::new(std::io::Error::other("x"))),
        );
        assert_eq!(classify(&event), classify(&event));
    }

    #[test]
    fn test_classify_routes_by_kind() {
        let record = classify(&HostEvent::Service(ServiceEvent::new(
            ServiceEventType::Modified,
            greeter_ref(),
        )));
        assert_eq!(record.category, Category::Service);
        assert_eq!(record.severity, Severity::Debug);
    }

    #[test]
    fn test_category_tags() {
        assert_eq!(Category::Module.to_string(), "Events.Module");
        assert_eq!(Category::Framework.as_str(), "Events.Framework");
        assert_eq!(serde_json::to_string(&Category::Service).unwrap(), "\"Events.Service\"");
    }

    #[test]
    fn test_payload_display() {
        let payload = Payload::Service(greeter_ref());
        assert_eq!(payload.to_string(), "[org.example.Greeter] (service.id=31)");
    }
}
