// Keyflip Settings Module
// Timing and logging settings read from a TOML file

#![cfg(feature = "settings")]

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::platform::clipboard::{DEFAULT_COPY_SETTLE, DEFAULT_RESTORE_SETTLE};

/// Settings for keyflip
///
/// Loaded from a TOML file (default: ~/.config/keyflip/settings.toml).
/// The hotkey and the layout table are fixed and have no setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    copy_settle: Duration,
    restore_settle: Duration,
    log_level: Option<String>,
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
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    timing: Option<TimingSettings>,

    #[serde(default)]
    logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TimingSettings {
    #[serde(default)]
    copy_settle_ms: Option<u64>,
    #[serde(default)]
    restore_settle_ms: Option<u64>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct LoggingSettings {
    #[serde(default)]
    level: Option<String>,
}

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Longest wait accepted for either settle delay
const MAX_SETTLE_MS: u64 = 5_000;

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Settings with the built-in defaults
    pub fn new() -> Self {
        Self {
            copy_settle: DEFAULT_COPY_SETTLE,
            restore_settle: DEFAULT_RESTORE_SETTLE,
            log_level: None,
            source_path: None,
        }
    }

    /// Settings with both delays zeroed, for in-memory platforms
    pub fn immediate() -> Self {
        Self {
            copy_settle: Duration::ZERO,
            restore_settle: Duration::ZERO,
            ..Self::new()
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(timing) = toml_settings.timing {
            if let Some(ms) = timing.copy_settle_ms {
                settings.copy_settle = parse_settle("copy_settle_ms", ms)?;
            }
            if let Some(ms) = timing.restore_settle_ms {
                settings.restore_settle = parse_settle("restore_settle_ms", ms)?;
            }
        }

        if let Some(level) = toml_settings.logging.and_then(|l| l.level) {
            let level = level.to_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(SettingsError::InvalidValue(format!(
                    "unknown log level '{}', expected one of {}",
                    level,
                    LOG_LEVELS.join(", ")
                )));
            }
            settings.log_level = Some(level);
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("keyflip").join("settings.toml"))
    }

    /// Load from default location (~/.config/keyflip/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        // Return default settings if file doesn't exist
        Ok(Self::new())
    }

    pub fn copy_settle(&self) -> Duration {
        self.copy_settle
    }

    pub fn restore_settle(&self) -> Duration {
        self.restore_settle
    }

    /// Log level filter from `[logging] level`, lowercase
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    /// File these settings were read from, if any
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Reload settings from the original file
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        match self.source_path.clone() {
            Some(path) => {
                *self = Self::from_file(path)?;
                Ok(())
            }
            None => Err(SettingsError::InvalidValue("No source path set".to_string())),
        }
    }
}

fn parse_settle(name: &str, ms: u64) -> Result<Duration, SettingsError> {
    if ms > MAX_SETTLE_MS {
        return Err(SettingsError::InvalidValue(format!(
            "{} = {} exceeds {} ms",
            name, ms, MAX_SETTLE_MS
        )));
    }
    Ok(Duration::from_millis(ms))
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Keyflip Settings
# Place this file at: ~/.config/keyflip/settings.toml

[timing]
# Wait after sending Ctrl+C before reading the clipboard
copy_settle_ms = 100
# Wait after pasting before the previous clipboard text is restored
restore_settle_ms = 100

[logging]
# off, error, warn, info, debug, trace
level = "info"
"#
}
