//! Host event types: module, framework and service notifications.
//!
//! Type codes are kept as raw integers on the events so that codes this crate
//! doesn't know about still reach the classifier. The typed enums below decode
//! the known ones.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identity of a module (bundle) in the host runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleRef {
    pub id: u64,
    pub symbolic_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ModuleRef {
    pub fn new(id: u64, symbolic_name: impl Into<String>) -> Self {
        Self {
            id,
            symbolic_name: symbolic_name.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.symbolic_name, self.id)
    }
}

/// Handle to a registered service.
///
/// Renders as `[iface, ...] (service.id=N)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceReference {
    pub service_id: u64,
    pub object_classes: Vec<String>,
    /// Module that registered the service, if it is still known.
    #[serde(default)]
    pub module: Option<ModuleRef>,
}

impl ServiceReference {
    pub fn new<I, S>(service_id: u64, object_classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            service_id,
            object_classes: object_classes.into_iter().map(Into::into).collect(),
            module: None,
        }
    }

    pub fn registered_by(mut self, module: ModuleRef) -> Self {
        self.module = Some(module);
        self
    }
}

impl fmt::Display for ServiceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] (service.id={})",
            self.object_classes.join(", "),
            self.service_id
        )
    }
}

/// Error attached to a framework event.
///
/// Cheap to clone; two handles compare equal only when they share the same
/// underlying error.
#[derive(Clone)]
pub struct EventError(Arc<dyn std::error::Error + Send + Sync + 'static>);

impl EventError {
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// `Display` of the error followed by each `source()`, joined by `": "`.
    pub fn chain(&self) -> String {
        let mut rendered = self.0.to_string();
        let mut source = self.0.source();
        while let Some(cause) = source {
            rendered.push_str(": ");
            rendered.push_str(&cause.to_string());
            source = cause.source();
        }
        rendered
    }
}

impl From<Box<dyn std::error::Error + Send + Sync + 'static>> for EventError {
    fn from(error: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        Self(Arc::from(error))
    }
}

impl PartialEq for EventError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventError").field(&self.0.to_string()).finish()
    }
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

/// Module lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleEventType {
    Installed,
    Started,
    Stopped,
    Updated,
    Uninstalled,
    Resolved,
    Unresolved,
    Starting,
    Stopping,
}

impl ModuleEventType {
    pub const ALL: [ModuleEventType; 9] = [
        ModuleEventType::Installed,
        ModuleEventType::Started,
        ModuleEventType::Stopped,
        ModuleEventType::Updated,
        ModuleEventType::Uninstalled,
        ModuleEventType::Resolved,
        ModuleEventType::Unresolved,
        ModuleEventType::Starting,
        ModuleEventType::Stopping,
    ];

    /// Host code for lazy activation. Not decoded; logged as unknown.
    pub const LAZY_ACTIVATION_CODE: i32 = 0x200;

    pub fn code(self) -> i32 {
        match self {
            ModuleEventType::Installed => 0x01,
            ModuleEventType::Started => 0x02,
            ModuleEventType::Stopped => 0x04,
            ModuleEventType::Updated => 0x08,
            ModuleEventType::Uninstalled => 0x10,
            ModuleEventType::Resolved => 0x20,
            ModuleEventType::Unresolved => 0x40,
            ModuleEventType::Starting => 0x80,
            ModuleEventType::Stopping => 0x100,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ModuleEventType::Installed => "INSTALLED",
            ModuleEventType::Started => "STARTED",
            ModuleEventType::Stopped => "STOPPED",
            ModuleEventType::Updated => "UPDATED",
            ModuleEventType::Uninstalled => "UNINSTALLED",
            ModuleEventType::Resolved => "RESOLVED",
            ModuleEventType::Unresolved => "UNRESOLVED",
            ModuleEventType::Starting => "STARTING",
            ModuleEventType::Stopping => "STOPPING",
        }
    }
}

/// Framework lifecycle and error notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameworkEventType {
    Started,
    Error,
    PackagesRefreshed,
    StartLevelChanged,
    Warning,
    Info,
}

impl FrameworkEventType {
    pub const ALL: [FrameworkEventType; 6] = [
        FrameworkEventType::Started,
        FrameworkEventType::Error,
        FrameworkEventType::PackagesRefreshed,
        FrameworkEventType::StartLevelChanged,
        FrameworkEventType::Warning,
        FrameworkEventType::Info,
    ];

    pub fn code(self) -> i32 {
        match self {
            FrameworkEventType::Started => 0x01,
            FrameworkEventType::Error => 0x02,
            FrameworkEventType::PackagesRefreshed => 0x04,
            FrameworkEventType::StartLevelChanged => 0x08,
            FrameworkEventType::Warning => 0x10,
            FrameworkEventType::Info => 0x20,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            FrameworkEventType::Started => "STARTED",
            FrameworkEventType::Error => "ERROR",
            FrameworkEventType::PackagesRefreshed => "PACKAGES REFRESHED",
            FrameworkEventType::StartLevelChanged => "STARTLEVEL CHANGED",
            FrameworkEventType::Warning => "WARNING",
            FrameworkEventType::Info => "INFO",
        }
    }
}

/// Service registry notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceEventType {
    Registered,
    Modified,
    Unregistering,
}

impl ServiceEventType {
    pub const ALL: [ServiceEventType; 3] = [
        ServiceEventType::Registered,
        ServiceEventType::Modified,
        ServiceEventType::Unregistering,
    ];

    pub fn code(self) -> i32 {
        match self {
            ServiceEventType::Registered => 0x01,
            ServiceEventType::Modified => 0x02,
            ServiceEventType::Unregistering => 0x04,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ServiceEventType::Registered => "REGISTERED",
            ServiceEventType::Modified => "MODIFIED",
            ServiceEventType::Unregistering => "UNREGISTERING",
        }
    }
}

/// A module changed lifecycle state.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleEvent {
    pub code: i32,
    pub module: Option<ModuleRef>,
}

impl ModuleEvent {
    pub fn new(kind: ModuleEventType, module: ModuleRef) -> Self {
        Self {
            code: kind.code(),
            module: Some(module),
        }
    }

    pub fn from_code(code: i32, module: Option<ModuleRef>) -> Self {
        Self { code, module }
    }

    pub fn kind(&self) -> Option<ModuleEventType> {
        ModuleEventType::from_code(self.code)
    }
}

/// The framework reported a lifecycle change, a warning or an error.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkEvent {
    pub code: i32,
    pub module: Option<ModuleRef>,
    pub error: Option<EventError>,
}

impl FrameworkEvent {
    pub fn new(kind: FrameworkEventType, module: Option<ModuleRef>) -> Self {
        Self::from_code(kind.code(), module)
    }

    pub fn from_code(code: i32, module: Option<ModuleRef>) -> Self {
        Self {
            code,
            module,
            error: None,
        }
    }

    pub fn with_error(mut self, error: EventError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn kind(&self) -> Option<FrameworkEventType> {
        FrameworkEventType::from_code(self.code)
    }
}

/// A service registration changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceEvent {
    pub code: i32,
    pub reference: ServiceReference,
}

impl ServiceEvent {
    pub fn new(kind: ServiceEventType, reference: ServiceReference) -> Self {
        Self::from_code(kind.code(), reference)
    }

    pub fn from_code(code: i32, reference: ServiceReference) -> Self {
        Self { code, reference }
    }

    pub fn kind(&self) -> Option<ServiceEventType> {
        ServiceEventType::from_code(self.code)
    }
}

/// Any event the host delivers.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Module(ModuleEvent),
    Framework(FrameworkEvent),
    Service(ServiceEvent),
}

impl From<ModuleEvent> for HostEvent {
    fn from(event: ModuleEvent) -> Self {
        HostEvent::Module(event)
    }
}

impl From<FrameworkEvent> for HostEvent {
    fn from(event: FrameworkEvent) -> Self {
        HostEvent::Framework(event)
    }
}

impl From<ServiceEvent> for HostEvent {
    fn from(event: ServiceEvent) -> Self {
        HostEvent::Service(event)
    }
}
