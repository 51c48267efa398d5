//! Boilerplate rendering with Tera.
//!
//! Sample sources, tests and READMEs live under `templates/` and are
//! embedded at compile time. Structured configs (manifest, tsconfig, lint
//! and editor settings) are built as JSON values instead; see
//! [`crate::configurators`].

use crate::error::{Error, Result};
use crate::package_manager::PackageManager;
use rust_embed::RustEmbed;
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

/// Embedded boilerplate templates
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates/"]
struct EmbeddedTemplates;

/// Variables available to every template
#[derive(Debug, Clone, Serialize)]
pub struct TemplateVars {
    pub project_name: String,
    pub package_manager: String,
    pub install: String,
    pub run_build: String,
    pub run_dev: String,
    pub run_test: String,
    pub run_lint: String,
    pub run_format: String,
}

impl TemplateVars {
    /// Create template variables for a project
    pub fn new(project_name: impl Into<String>, package_manager: PackageManager) -> Self {
        Self {
            project_name: project_name.into(),
            package_manager: package_manager.to_string(),
            install: package_manager.install_line(),
            run_build: package_manager.run_script("build"),
            run_dev: package_manager.run_script("dev"),
            run_test: package_manager.run_script("test"),
            run_lint: package_manager.run_script("lint"),
            run_format: package_manager.run_script("format"),
        }
    }
}

/// Template renderer over the embedded boilerplate set
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a renderer with every embedded template registered
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        for name in EmbeddedTemplates::iter() {
            let file = EmbeddedTemplates::get(&name).ok_or_else(|| Error::TemplateNotFound {
                name: name.to_string(),
            })?;
            let source = std::str::from_utf8(&file.data).map_err(|_| {
                Error::invalid_config(format!("Invalid UTF-8 in embedded template: {}", name))
            })?;
            tera.add_raw_template(&name, source)?;
        }

        debug!(
            "Registered {} boilerplate templates",
            tera.get_template_names().count()
        );
        Ok(Self { tera })
    }

    /// Render one embedded template, e.g. `node/README.md.tera`
    pub fn render(&self, name: &str, vars: &TemplateVars) -> Result<String> {
        if !self.tera.get_template_names().any(|n| n == name) {
            return Err(Error::TemplateNotFound {
                name: name.to_string(),
            });
        }
        let context = Context::from_serialize(vars)?;
        Ok(self.tera.render(name, &context)?)
    }
}
