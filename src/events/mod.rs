//! Event infrastructure — host lifecycle events and their classification.
//!
//! `model` holds the events the host delivers; `classify` turns each into a
//! `ClassifiedRecord` (severity, category, message, payload).

pub mod classify;
pub mod model;

pub use classify::{
    classify, classify_framework_event, classify_module_event, classify_service_event, Category,
    ClassifiedRecord, Payload,
};
pub use model::{
    EventError, FrameworkEvent, FrameworkEventType, HostEvent, ModuleEvent, ModuleEventType,
    ModuleRef, ServiceEvent, ServiceEventType, ServiceReference,
};
