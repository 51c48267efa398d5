//! Project creation: resolve input, guard the workspace, run the pipeline

use anyhow::{Context, Result};
use camino::Utf8PathBuf;

use tsinit_projects::{
    required_commands, resolve_request, ConfigLoader, Error, PackageManager, ScaffoldConfig,
    ScaffoldSummary, Scaffolder, SystemRunner, TemplateKind, Workspace,
};

use crate::cli::Cli;
use crate::output;
use crate::prompt::TerminalPrompter;

/// Create a new project in the current directory
pub async fn run(args: Cli) -> Result<()> {
    output::header("Create New Project");

    let config = load_config(&args)?;

    let mut prompter = TerminalPrompter;
    let request = resolve_request(args.name, &mut prompter)?;

    // Fail before touching the filesystem when the pipeline's tools are missing
    for command in required_commands(request.template, &config) {
        if which::which(command).is_err() {
            return Err(Error::command_not_found(command).into());
        }
    }

    let base = std::env::current_dir().context("Failed to read current directory")?;
    let base = Utf8PathBuf::from_path_buf(base)
        .map_err(|p| anyhow::anyhow!("Current directory is not valid UTF-8: {}", p.display()))?;

    println!();
    output::kv("Project name", &request.name);
    output::kv("Template", request.template.label());
    output::kv("Package manager", config.package_manager.as_str());
    output::kv("Location", base.join(&request.name).as_str());
    println!();

    let workspace = Workspace::create(&base, &request.name)?;

    let runner = SystemRunner;
    let package_manager = config.package_manager;
    let skip_install = config.skip_install;
    let result = Scaffolder::new(workspace.clone(), &request.name, config, &runner)?
        .dispatch(request.template)
        .await;

    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            output::warning(&format!(
                "Partially scaffolded project left at {}",
                workspace.root()
            ));
            return Err(e.into());
        }
    };

    println!();
    output::success(&format!("Project '{}' created successfully", request.name));
    show_summary(&summary);

    println!();
    output::info("Next steps:");
    for (i, step) in next_steps(&request.name, &summary, package_manager, skip_install)
        .iter()
        .enumerate()
    {
        output::step(i + 1, step);
    }

    Ok(())
}

/// Config file and environment, then CLI flags on top
fn load_config(args: &Cli) -> Result<ScaffoldConfig> {
    let mut config = ConfigLoader::new()
        .load()
        .context("Failed to load configuration")?;

    if let Some(package_manager) = args.package_manager {
        config.package_manager = package_manager;
    }
    if args.skip_install {
        config.skip_install = true;
    }

    tracing::debug!("Effective config: {:?}", config);
    Ok(config)
}

fn show_summary(summary: &ScaffoldSummary) {
    if !summary.files_written.is_empty() {
        output::kv("Files", &summary.files_written.join(", "));
    }
    for command in &summary.commands_run {
        output::kv("Ran", command);
    }
    for command in &summary.commands_skipped {
        output::kv("Skipped", command);
    }
}

fn next_steps(
    name: &str,
    summary: &ScaffoldSummary,
    package_manager: PackageManager,
    skip_install: bool,
) -> Vec<String> {
    let mut steps = vec![format!("cd {}", name)];

    // create-vite never installs; the other pipelines did unless skipped
    if summary.template == TemplateKind::ViteReact || skip_install {
        steps.push(package_manager.install_line());
    }

    match summary.template {
        TemplateKind::ViteReact => steps.push(package_manager.run_script("dev")),
        TemplateKind::Node => {
            steps.push(package_manager.run_script("build"));
            steps.push(format!("{} start", package_manager.as_str()));
        }
        TemplateKind::NpxPrompt => {
            steps.push(package_manager.run_script("build"));
            steps.push("node dist/index.js".to_string());
        }
    }

    steps
}
