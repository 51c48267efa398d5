//! # tsinit-projects
//!
//! Project scaffolding library for the tsinit CLI providing:
//! - Input resolution (project name + template choice)
//! - Workspace guard (refuses to reuse an existing directory)
//! - Template dispatch to the node, vite-react and npx-prompt pipelines
//! - Shared configurators (ESLint, Prettier, tsconfig, VS Code, .gitignore)
//! - Package manager command forms and external process execution
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use tsinit_projects::{ConfigLoader, Scaffolder, SystemRunner, TemplateKind, Workspace};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new().load()?;
//! let workspace = Workspace::create(Utf8Path::new("."), "my-app")?;
//! let runner = SystemRunner;
//!
//! let summary = Scaffolder::new(workspace, "my-app", config, &runner)?
//!     .dispatch(TemplateKind::Node)
//!     .await?;
//! println!("wrote {} files", summary.files_written.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod configurators;
pub mod error;
pub mod generators;
pub mod manifest;
pub mod package_manager;
pub mod process;
pub mod resolver;
pub mod templates;
pub mod types;
pub mod workspace;

pub use config::{ConfigLoader, ScaffoldConfig};
pub use error::{Error, Result};
pub use generators::{required_commands, ScaffoldSummary, Scaffolder};
pub use manifest::ManifestDocument;
pub use package_manager::PackageManager;
pub use process::{CommandRunner, CommandSpec, SystemRunner};
pub use resolver::{resolve_request, Prompter};
pub use types::{ProjectRequest, TemplateKind};
pub use workspace::Workspace;
