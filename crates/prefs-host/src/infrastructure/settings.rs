//! TOML settings for the host process.
//!
//! These are settings of the host binary itself, not user preferences:
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [app]
//! version = "1.4.2"
//! pretty = true
//!
//! [screen]
//! width = 1920
//! height = 1080
//! ```
//!
//! Default location:
//! - Windows:  `%APPDATA%\Devbox\prefs-host.toml`
//! - Linux:    `~/.config/devbox/prefs-host.toml`
//! - macOS:    `~/Library/Application Support/Devbox/prefs-host.toml`
//!
//! Every field has a serde default, so a partial or missing file still
//! loads.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::window_geometry::ScreenSize;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Settings schema ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HostSettings {
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub screen: ScreenSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    /// Version reported by `GetAppVersion`.
    #[serde(default = "default_version")]
    pub version: String,
    /// Pretty-print JSON written to stdout.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

/// Screen reported to window placement.  Zero means unknown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScreenSettings {
    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub height: i64,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            pretty: default_true(),
        }
    }
}

impl ScreenSettings {
    /// The configured screen, or `None` when either dimension is unset.
    pub fn screen_size(&self) -> Option<ScreenSize> {
        (self.width > 0 && self.height > 0).then_some(ScreenSize {
            width: self.width,
            height: self.height,
        })
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Resolves the default settings file path.
///
/// # Errors
///
/// Returns [`SettingsError::NoPlatformConfigDir`] if the platform config
/// base directory cannot be determined.
pub fn settings_file_path() -> Result<PathBuf, SettingsError> {
    platform_config_dir()
        .map(|dir| dir.join("prefs-host.toml"))
        .ok_or(SettingsError::NoPlatformConfigDir)
}

/// Loads settings from `path`, returning defaults if the file does not exist.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system errors other than "not
/// found", and [`SettingsError::Parse`] if the TOML is malformed.
pub fn load_settings(path: &Path) -> Result<HostSettings, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HostSettings::default()),
        Err(source) => Err(SettingsError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Devbox"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("devbox"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Devbox")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
