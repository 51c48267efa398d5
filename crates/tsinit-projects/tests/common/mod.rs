//! Shared test utilities for tsinit-projects integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;
use tsinit_projects::{CommandRunner, CommandSpec, Error, Result};

/// Runner that records commands instead of spawning them
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<(String, Utf8PathBuf)>>,
    /// Fail the first command whose line contains this text
    fail_on: Option<String>,
    /// Write a package.json when create-vite is invoked, like the real generator
    emulate_create_vite: bool,
    /// After a command containing the first text, put a directory at the second path
    block_path: Option<(String, String)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(pattern: &str) -> Self {
        Self {
            fail_on: Some(pattern.to_string()),
            ..Default::default()
        }
    }

    pub fn emulating_create_vite() -> Self {
        Self {
            emulate_create_vite: true,
            ..Default::default()
        }
    }

    /// Occupy `relative` with a directory once a command containing `pattern` runs
    pub fn blocking_path_after(pattern: &str, relative: &str) -> Self {
        Self {
            block_path: Some((pattern.to_string(), relative.to_string())),
            ..Default::default()
        }
    }

    /// Command lines run so far
    pub fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(cmd, _)| cmd.clone())
            .collect()
    }

    /// Working directories used so far
    pub fn directories(&self) -> Vec<Utf8PathBuf> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, dir)| dir.clone())
            .collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &CommandSpec, cwd: &Utf8Path) -> Result<()> {
        let line = command.to_string();
        self.calls
            .lock()
            .unwrap()
            .push((line.clone(), cwd.to_path_buf()));

        if let Some(pattern) = &self.fail_on {
            if line.contains(pattern.as_str()) {
                return Err(Error::command_failed(line, Some(1)));
            }
        }

        if let Some((pattern, relative)) = &self.block_path {
            if line.contains(pattern.as_str()) {
                std::fs::create_dir_all(cwd.join(relative))?;
            }
        }

        if self.emulate_create_vite && command.args.iter().any(|a| a.starts_with("vite")) {
            std::fs::write(
                cwd.join("package.json"),
                "{\n  \"name\": \"vite-project\",\n  \"private\": true\n}\n",
            )?;
        }

        Ok(())
    }
}

/// Temporary invocation directory
pub fn temp_base() -> (TempDir, Utf8PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("Invalid UTF-8 path");
    (temp, base)
}

/// Parse a JSON file inside `dir`
pub fn read_json(dir: &Utf8Path, relative: &str) -> serde_json::Value {
    let content = std::fs::read_to_string(dir.join(relative))
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("Invalid JSON in {}: {}", relative, e))
}
