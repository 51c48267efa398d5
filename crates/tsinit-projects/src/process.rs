//! External process execution
//!
//! Every package-manager and generator invocation goes through a
//! [`CommandRunner`]. The system runner spawns with inherited stdio so the
//! user sees live progress, waits for exit, and treats a non-zero status as
//! a failure of the whole run.

use crate::error::{Error, Result};
use async_trait::async_trait;
use camino::Utf8Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// An external command: program plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a command with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands inside a directory
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` with `cwd` as its working directory and wait for it
    async fn run(&self, command: &CommandSpec, cwd: &Utf8Path) -> Result<()>;
}

/// Runner that spawns real processes with inherited stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, command: &CommandSpec, cwd: &Utf8Path) -> Result<()> {
        let line = command.to_string();
        info!("Running: {}", line);

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| Error::CommandSpawn {
                command: line.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::command_failed(line.as_str(), status.code()));
        }

        debug!("Command succeeded: {}", line);
        Ok(())
    }
}
