//! Viewer configuration loading
//!
//! Options resolution follows a fixed priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file in the user config directory
//! 4. Compiled defaults (fallback)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Where the playback control sits in the host view chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlPosition {
    #[default]
    #[serde(rename = "topleft")]
    TopLeft,
    #[serde(rename = "topright")]
    TopRight,
    #[serde(rename = "bottomleft")]
    BottomLeft,
    #[serde(rename = "bottomright")]
    BottomRight,
}

/// Viewer options
///
/// `min_zoom`/`max_zoom` are passed through to the host's tile layer and
/// play no role in the playback core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub control_position: ControlPosition,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            min_zoom: 1,
            max_zoom: 12,
            control_position: ControlPosition::TopLeft,
        }
    }
}

impl ViewerOptions {
    /// Parse options from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load options from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_toml_str(&raw)
    }
}

/// Resolve viewer options following the priority order above
///
/// `env_var_name` names an environment variable holding a config file path.
/// A path given explicitly (CLI or environment) must load; a missing default
/// config file falls through to compiled defaults.
pub fn resolve_options(cli_arg: Option<&Path>, env_var_name: &str) -> Result<ViewerOptions> {
    // Priority 1: command-line argument
    if let Some(path) = cli_arg {
        debug!(path = %path.display(), "Loading viewer options from CLI argument");
        return ViewerOptions::from_path(path);
    }

    // Priority 2: environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        debug!(%path, "Loading viewer options from environment variable");
        return ViewerOptions::from_path(path);
    }

    // Priority 3: user config file
    if let Some(path) = default_config_path() {
        if path.exists() {
            debug!(path = %path.display(), "Loading viewer options from user config");
            return ViewerOptions::from_path(path);
        }
    }

    // Priority 4: compiled defaults
    debug!("Using compiled default viewer options");
    Ok(ViewerOptions::default())
}

/// `~/.config/glotmap/config.toml` (platform equivalent)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("glotmap").join("config.toml"))
}
