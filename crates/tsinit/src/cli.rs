//! CLI argument parsing with clap

use clap::Parser;
use tsinit_projects::PackageManager;

/// tsinit - scaffold a TypeScript project interactively
#[derive(Parser, Debug)]
#[command(name = "tsinit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project name (prompted for when omitted)
    pub name: Option<String>,

    /// Package manager for installs and generators [npm, pnpm, yarn, bun]
    #[arg(short, long)]
    pub package_manager: Option<PackageManager>,

    /// Write files only; skip dependency installs
    #[arg(long)]
    pub skip_install: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
