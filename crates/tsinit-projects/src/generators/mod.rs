//! Template dispatcher and per-template generators
//!
//! [`Scaffolder::dispatch`] matches on the [`TemplateKind`] and runs that
//! template's fixed pipeline inside the workspace. Steps run strictly in
//! order and the first failing step aborts the run; files already written
//! stay in place.

mod node;
mod npx_prompt;
mod vite_react;

use crate::config::ScaffoldConfig;
use crate::configurators;
use crate::error::Result;
use crate::manifest::{ManifestDocument, MANIFEST_FILE};
use crate::process::{CommandRunner, CommandSpec};
use crate::templates::{TemplateRenderer, TemplateVars};
use crate::types::TemplateKind;
use crate::workspace::Workspace;
use tracing::info;

/// What a completed pipeline did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldSummary {
    /// Template whose pipeline ran
    pub template: TemplateKind,
    /// Workspace-relative paths written, in first-write order
    pub files_written: Vec<String>,
    /// Command lines executed
    pub commands_run: Vec<String>,
    /// Install command lines skipped because installs are disabled
    pub commands_skipped: Vec<String>,
}

/// Commands that must be on PATH before a template's pipeline can run
pub fn required_commands(template: TemplateKind, config: &ScaffoldConfig) -> Vec<&'static str> {
    let needs_package_manager = match template {
        TemplateKind::ViteReact => true,
        TemplateKind::Node | TemplateKind::NpxPrompt => !config.skip_install,
    };

    if needs_package_manager {
        vec![config.package_manager.as_str()]
    } else {
        Vec::new()
    }
}

/// Drives one template pipeline inside a workspace
pub struct Scaffolder<'a> {
    workspace: Workspace,
    project_name: String,
    config: ScaffoldConfig,
    runner: &'a dyn CommandRunner,
    renderer: TemplateRenderer,
    summary: ScaffoldSummary,
}

impl<'a> Scaffolder<'a> {
    /// Create a scaffolder for `project_name` in `workspace`
    pub fn new(
        workspace: Workspace,
        project_name: impl Into<String>,
        config: ScaffoldConfig,
        runner: &'a dyn CommandRunner,
    ) -> Result<Self> {
        Ok(Self {
            workspace,
            project_name: project_name.into(),
            config,
            runner,
            renderer: TemplateRenderer::new()?,
            summary: ScaffoldSummary::default(),
        })
    }

    /// Run the pipeline for `template`
    pub async fn dispatch(mut self, template: TemplateKind) -> Result<ScaffoldSummary> {
        info!(
            "Scaffolding '{}' with template {} in {}",
            self.project_name,
            template,
            self.workspace.root()
        );
        self.summary.template = template;

        match template {
            TemplateKind::ViteReact => vite_react::generate(&mut self).await?,
            TemplateKind::NpxPrompt => npx_prompt::generate(&mut self).await?,
            TemplateKind::Node => node::generate(&mut self).await?,
        }

        Ok(self.summary)
    }

    /// Run the pipeline for a raw template identifier
    ///
    /// Unrecognized identifiers run the node pipeline.
    pub async fn dispatch_identifier(self, identifier: &str) -> Result<ScaffoldSummary> {
        self.dispatch(TemplateKind::from_identifier(identifier)).await
    }

    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn record_file(&mut self, relative: &str) {
        if !self.summary.files_written.iter().any(|f| f == relative) {
            self.summary.files_written.push(relative.to_string());
        }
    }

    fn write_manifest(&mut self, manifest: &ManifestDocument) -> Result<()> {
        self.workspace.write_json(MANIFEST_FILE, manifest)?;
        self.record_file(MANIFEST_FILE);
        Ok(())
    }

    /// Render an embedded template into the workspace
    fn render_to(&mut self, template: &str, relative: &str) -> Result<()> {
        let vars = TemplateVars::new(&self.project_name, self.config.package_manager);
        let content = self.renderer.render(template, &vars)?;
        self.workspace.write(relative, content)?;
        self.record_file(relative);
        Ok(())
    }

    async fn run(&mut self, command: CommandSpec) -> Result<()> {
        self.runner.run(&command, self.workspace.root()).await?;
        self.summary.commands_run.push(command.to_string());
        Ok(())
    }

    async fn install(&mut self, command: CommandSpec) -> Result<()> {
        if self.config.skip_install {
            info!("Skipping install: {}", command);
            self.summary.commands_skipped.push(command.to_string());
            return Ok(());
        }
        self.run(command).await
    }

    /// Add runtime dependencies with the configured package manager
    async fn add_packages(&mut self, packages: &[&str]) -> Result<()> {
        let command = self.config.package_manager.add(packages);
        self.install(command).await
    }

    /// Add development dependencies with the configured package manager
    async fn add_dev_packages(&mut self, packages: &[&str]) -> Result<()> {
        let command = self.config.package_manager.add_dev(packages);
        self.install(command).await
    }

    /// Lint/format configs followed by the tooling dev install
    async fn install_tooling(&mut self) -> Result<()> {
        for path in configurators::write_lint_format_config(&self.workspace)? {
            self.record_file(path);
        }
        self.add_dev_packages(configurators::TOOLING_PACKAGES).await
    }

    fn write_compiler_config(&mut self) -> Result<()> {
        let path = configurators::write_compiler_config(&self.workspace)?;
        self.record_file(path);
        Ok(())
    }

    fn write_editor_config(&mut self) -> Result<()> {
        let path = configurators::write_editor_config(&self.workspace)?;
        self.record_file(path);
        Ok(())
    }

    fn write_ignore_file(&mut self) -> Result<()> {
        let path = configurators::write_ignore_file(&self.workspace)?;
        self.record_file(path);
        Ok(())
    }

    /// Tooling install, compiler config, editor config, ignore file
    async fn apply_shared_configurators(&mut self) -> Result<()> {
        self.install_tooling().await?;
        self.write_compiler_config()?;
        self.write_editor_config()?;
        self.write_ignore_file()
    }
}
