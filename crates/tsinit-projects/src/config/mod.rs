//! Scaffolder configuration
//!
//! Resolved from (low to high precedence) embedded defaults, the user config
//! file, `TSINIT_*` environment variables and finally CLI flags applied by
//! the caller.

mod loader;

pub use loader::ConfigLoader;

use crate::package_manager::PackageManager;
use serde::Deserialize;

/// Resolved scaffolder configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Package manager used for dependency installs and create-vite
    pub package_manager: PackageManager,

    /// Starter kind passed to create-vite's `--template`
    pub vite_template: String,

    /// Skip dependency installs (generators still run)
    pub skip_install: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::Npm,
            vite_template: "react-ts".to_string(),
            skip_install: false,
        }
    }
}

/// Partial configuration as read from a file; unset keys keep the lower layer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct ConfigOverlay {
    pub package_manager: Option<PackageManager>,
    pub vite_template: Option<String>,
    pub skip_install: Option<bool>,
}

impl ScaffoldConfig {
    pub(crate) fn merge(mut self, overlay: ConfigOverlay) -> Self {
        if let Some(pm) = overlay.package_manager {
            self.package_manager = pm;
        }
        if let Some(template) = overlay.vite_template {
            self.vite_template = template;
        }
        if let Some(skip) = overlay.skip_install {
            self.skip_install = skip;
        }
        self
    }
}
