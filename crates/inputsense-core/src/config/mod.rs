// Inputsense Configuration
// Engine options and diagnostic verbosity

#[cfg(feature = "settings")]
mod settings;

#[cfg(feature = "settings")]
pub use settings::{default_settings_content, Settings, SettingsError};

use serde::Deserialize;
use strum_macros::{Display, EnumString};

use crate::PointerType;

/// Verbosity of the engine's diagnostic reports.
///
/// Reports go through the `log` facade under the `inputsense` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl DiagnosticLevel {
    /// The log level to report at, or `None` when diagnostics are off
    pub fn to_level(self) -> Option<log::Level> {
        match self {
            DiagnosticLevel::Off => None,
            DiagnosticLevel::Error => Some(log::Level::Error),
            DiagnosticLevel::Warn => Some(log::Level::Warn),
            DiagnosticLevel::Info => Some(log::Level::Info),
            DiagnosticLevel::Debug => Some(log::Level::Debug),
            DiagnosticLevel::Trace => Some(log::Level::Trace),
        }
    }
}

/// Options recognized when attaching an engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Pointer type to report before any event is classified
    #[serde(default)]
    pub initial_pointer_type: PointerType,
    /// Hover capability to report while the pointer type is still `none`
    #[serde(default)]
    pub initial_hover_capable: bool,
    /// Level at which classified events and transitions are reported
    #[serde(default)]
    pub diagnostics: DiagnosticLevel,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.initial_pointer_type = pointer_type;
        self
    }

    pub fn with_initial_hover_capable(mut self, can_hover: bool) -> Self {
        self.initial_hover_capable = can_hover;
        self
    }

    pub fn with_diagnostics(mut self, level: DiagnosticLevel) -> Self {
        self.diagnostics = level;
        self
    }
}
