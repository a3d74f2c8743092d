//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. The file named by `--config`, which must exist
//! 3. `config.toml` in the platform config directory, if present
//! 4. Built-in defaults
//!
//! ```toml
//! [defaults]
//! project_type = "api"
//!
//! [output]
//! no_color = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Project type used when neither the flag nor the config names one.
pub const DEFAULT_PROJECT_TYPE: &str = "portfolio";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Raw project type; parsed by the core along with the `--type` flag.
    pub project_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit path is an error if it cannot be read; the platform path
    /// is only consulted when it exists.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse configuration from TOML text. Missing tables fall back to defaults.
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Path to the platform configuration file, if a home directory exists.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mkwd").map(|d| d.config_dir().join("config.toml"))
    }

    /// The flag wins over the config file, which wins over the built-in default.
    pub fn project_type<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.or(self.defaults.project_type.as_deref())
            .unwrap_or(DEFAULT_PROJECT_TYPE)
    }
}
