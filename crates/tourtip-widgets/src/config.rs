#![forbid(unsafe_code)]

//! Loading [`PopoverOptions`] from TOML or JSON.
//!
//! ```toml
//! # tour.toml
//! padding = 8
//! position = "corner"
//! title = "Welcome"
//!
//! [progress]
//! is_first = true
//! is_last = false
//! total_count = 4
//!
//! [labels]
//! done = "Got it"
//! ```
//!
//! Missing keys take their defaults. An unrecognized `position` falls back
//! to `auto` rather than failing. Leaving out the whole `[progress]` table
//! gives a single-step tour; a `[progress]` table without `total_count`
//! means the count is unknown.

use std::path::Path;

use crate::options::PopoverOptions;

/// Errors that can occur when loading popover options.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// JSON parse error.
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl PopoverOptions {
    /// Parse options from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let options = toml::from_str(s)?;
        tracing::debug!(?options, "loaded popover options from TOML");
        Ok(options)
    }

    /// Read and parse a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "reading popover options");
        Self::from_toml_str(&content)
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let options = serde_json::from_str(s)?;
        tracing::debug!(?options, "loaded popover options from JSON");
        Ok(options)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
