//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User config (~/.tsinit/config.yaml)
//! 3. Environment variables (TSINIT_* prefix)
//! 4. CLI flags (handled by caller)

use super::{ConfigOverlay, ScaffoldConfig};
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::env;
use std::fs;
use tracing::debug;

const EMBEDDED_DEFAULTS: &str = include_str!("../../embedded/defaults.yaml");

/// Configuration file name inside the config directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Configuration hierarchy loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Directory holding the user config file
    config_dir: Option<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader rooted at the standard config directory (~/.tsinit)
    ///
    /// When no home directory can be determined the file layer is skipped.
    pub fn new() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
        }
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self {
            config_dir: Some(config_dir),
        }
    }

    /// Get the standard config directory, preferring $HOME
    fn default_config_dir() -> Option<Utf8PathBuf> {
        let home = env::var("HOME")
            .ok()
            .filter(|h| !h.is_empty())
            .map(Utf8PathBuf::from)
            .or_else(|| dirs::home_dir().and_then(|p| Utf8PathBuf::from_path_buf(p).ok()))?;
        Some(home.join(".tsinit"))
    }

    /// Load configuration with hierarchical precedence
    pub fn load(&self) -> Result<ScaffoldConfig> {
        let mut config = Self::load_embedded_defaults()?;

        if let Some(path) = self.config_file() {
            if path.exists() {
                debug!("Loading user config from {}", path);
                config = config.merge(Self::load_yaml_file(&path)?);
            }
        }

        config = Self::apply_env_overrides(config)?;
        debug!("Resolved config: {:?}", config);

        Ok(config)
    }

    /// Path of the user config file, if a config directory is known
    pub fn config_file(&self) -> Option<Utf8PathBuf> {
        self.config_dir.as_ref().map(|dir| dir.join(CONFIG_FILE))
    }

    fn load_embedded_defaults() -> Result<ScaffoldConfig> {
        let overlay: ConfigOverlay = serde_yaml_ng::from_str(EMBEDDED_DEFAULTS).map_err(|e| {
            Error::invalid_config(format!("Failed to parse embedded defaults: {}", e))
        })?;
        Ok(ScaffoldConfig::default().merge(overlay))
    }

    fn load_yaml_file(path: &Utf8Path) -> Result<ConfigOverlay> {
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(ConfigOverlay::default());
        }
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: ScaffoldConfig) -> Result<ScaffoldConfig> {
        if let Ok(val) = env::var("TSINIT_PACKAGE_MANAGER") {
            config.package_manager = val.parse()?;
        }

        if let Ok(val) = env::var("TSINIT_VITE_TEMPLATE") {
            if val.trim().is_empty() {
                return Err(Error::invalid_config(
                    "TSINIT_VITE_TEMPLATE must not be empty",
                ));
            }
            config.vite_template = val;
        }

        if let Ok(val) = env::var("TSINIT_SKIP_INSTALL") {
            config.skip_install = parse_bool(&val).ok_or_else(|| {
                Error::invalid_config("TSINIT_SKIP_INSTALL must be true, false, 1 or 0")
            })?;
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
