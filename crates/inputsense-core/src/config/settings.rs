// Inputsense Settings Module
// Loads engine configuration from a TOML settings file

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{DiagnosticLevel, EngineConfig};
use crate::PointerType;

/// Settings loaded from a TOML file (default: ~/.config/inputsense/settings.toml)
#[derive(Debug, Clone, Default)]
pub struct Settings {
    engine: EngineConfig,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    engine: Option<EngineSection>,

    #[serde(default)]
    diagnostics: Option<DiagnosticsSection>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct EngineSection {
    #[serde(default)]
    initial_pointer_type: Option<String>,

    #[serde(default)]
    initial_hover_capable: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct DiagnosticsSection {
    #[serde(default)]
    level: Option<String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(engine) = toml_settings.engine {
            if let Some(name) = engine.initial_pointer_type {
                settings.engine.initial_pointer_type = parse_pointer_type(&name)?;
            }
            if let Some(can_hover) = engine.initial_hover_capable {
                settings.engine.initial_hover_capable = can_hover;
            }
        }

        if let Some(diagnostics) = toml_settings.diagnostics {
            if let Some(level) = diagnostics.level {
                settings.engine.diagnostics = level.parse::<DiagnosticLevel>().map_err(|_| {
                    SettingsError::InvalidValue(format!("Unknown diagnostics level '{}'", level))
                })?;
            }
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("inputsense").join("settings.toml"))
    }

    /// Load from the default location, or defaults if the file doesn't exist
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::new())
    }

    /// The engine configuration these settings describe
    pub fn engine_config(&self) -> &EngineConfig {
        &self.engine
    }

    /// Consume the settings, returning the engine configuration
    pub fn into_engine_config(self) -> EngineConfig {
        self.engine
    }

    /// The file these settings were loaded from, if any
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Reload settings from the original file
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            *self = Self::from_file(path)?;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }
}

fn parse_pointer_type(name: &str) -> Result<PointerType, SettingsError> {
    name.parse::<PointerType>()
        .map_err(|_| SettingsError::InvalidValue(format!("Unknown pointer type '{}'", name)))
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Inputsense Settings
# Place this file at: ~/.config/inputsense/settings.toml

[engine]
# Pointer type reported before any input is observed:
# "none", "touch", "mouse" or "keyboard"
initial_pointer_type = "none"

# Hover capability reported while the pointer type is still "none"
initial_hover_capable = false

[diagnostics]
# Level for classified events and transitions:
# "off", "error", "warn", "info", "debug" or "trace"
level = "off"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::new();
        assert_eq!(settings.engine_config(), &EngineConfig::default());
        assert!(settings.source_path().is_none());
    }

    #[test]
    fn test_settings_from_toml() {
        let toml = r#"
[engine]
initial_pointer_type = "touch"
initial_hover_capable = true

[diagnostics]
level = "debug"
"#;

        let settings = Settings::from_toml(toml).unwrap();
        let config = settings.engine_config();
        assert_eq!(config.initial_pointer_type, PointerType::Touch);
        assert!(config.initial_hover_capable);
        assert_eq!(config.diagnostics, DiagnosticLevel::Debug);
    }

    #[test]
    fn test_default_content_parses() {
        let settings = Settings::from_toml(default_settings_content()).unwrap();
        assert_eq!(settings.into_engine_config(), EngineConfig::default());
    }

    #[test]
    fn test_unknown_pointer_type() {
        let toml = r#"
[engine]
initial_pointer_type = "stylus"
"#;
        let result = Settings::from_toml(toml);
        assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    }

    #[test]
    fn test_unknown_level() {
        let toml = r#"
[diagnostics]
level = "chatty"
"#;
        let result = Settings::from_toml(toml);
        assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = Settings::from_toml("[engine\ninitial = ");
        assert!(matches!(result, Err(SettingsError::TomlParse(_))));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result = Settings::from_toml("[keyboard]\noverride_type = \"Apple\"\n");
        assert!(matches!(result, Err(SettingsError::TomlParse(_))));
    }

    #[test]
    fn test_reload_without_source() {
        let mut settings = Settings::new();
        assert!(matches!(
            settings.reload(),
            Err(SettingsError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::from_file("/nonexistent/inputsense/settings.toml");
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }
}
