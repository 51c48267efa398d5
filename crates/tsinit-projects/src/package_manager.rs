//! Package manager command forms

use crate::error::{Error, Result};
use crate::process::CommandSpec;
use serde::Deserialize;

/// Supported JavaScript package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Get all supported package managers
    pub fn all() -> Vec<Self> {
        vec![Self::Npm, Self::Pnpm, Self::Yarn, Self::Bun]
    }

    /// Executable name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Command adding runtime dependencies
    pub fn add(&self, packages: &[&str]) -> CommandSpec {
        let verb = match self {
            Self::Npm => "install",
            Self::Pnpm | Self::Yarn | Self::Bun => "add",
        };
        CommandSpec::new(self.as_str())
            .arg(verb)
            .args(packages.iter().copied())
    }

    /// Command adding development dependencies
    pub fn add_dev(&self, packages: &[&str]) -> CommandSpec {
        let (verb, flag) = match self {
            Self::Npm => ("install", "--save-dev"),
            Self::Pnpm | Self::Yarn => ("add", "-D"),
            Self::Bun => ("add", "-d"),
        };
        CommandSpec::new(self.as_str())
            .args([verb, flag])
            .args(packages.iter().copied())
    }

    /// Command running create-vite into the current directory
    pub fn create_vite(&self, starter: &str) -> CommandSpec {
        match self {
            Self::Npm => CommandSpec::new("npm").args([
                "create",
                "vite@latest",
                ".",
                "--",
                "--template",
                starter,
            ]),
            _ => CommandSpec::new(self.as_str()).args(["create", "vite", ".", "--template", starter]),
        }
    }

    /// Shell line running a package script, for documentation
    pub fn run_script(&self, script: &str) -> String {
        match self {
            Self::Npm => format!("npm run {}", script),
            Self::Bun => format!("bun run {}", script),
            Self::Pnpm | Self::Yarn => format!("{} {}", self.as_str(), script),
        }
    }

    /// Shell line installing all declared dependencies
    pub fn install_line(&self) -> String {
        format!("{} install", self.as_str())
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|pm| pm.as_str() == lower)
            .ok_or_else(|| {
                Error::invalid_config(format!(
                    "Unknown package manager: {}. Valid values: {}",
                    s,
                    Self::all()
                        .iter()
                        .map(|pm| pm.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_npm_forms() {
        let pm = PackageManager::Npm;
        assert_eq!(pm.add(&["@inquirer/prompts"]).to_string(), "npm install @inquirer/prompts");
        assert_eq!(
            pm.add_dev(&["typescript", "@types/node"]).to_string(),
            "npm install --save-dev typescript @types/node"
        );
        assert_eq!(
            pm.create_vite("react-ts").to_string(),
            "npm create vite@latest . -- --template react-ts"
        );
        assert_eq!(pm.run_script("build"), "npm run build");
    }

    #[test]
    fn test_pnpm_forms() {
        let pm = PackageManager::Pnpm;
        assert_eq!(pm.add_dev(&["vitest"]).to_string(), "pnpm add -D vitest");
        assert_eq!(
            pm.create_vite("react-ts").to_string(),
            "pnpm create vite . --template react-ts"
        );
        assert_eq!(pm.run_script("dev"), "pnpm dev");
    }

    #[test]
    fn test_bun_dev_flag() {
        assert_eq!(
            PackageManager::Bun.add_dev(&["vitest"]).to_string(),
            "bun add -d vitest"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("npm".parse::<PackageManager>().unwrap(), PackageManager::Npm);
        assert_eq!(" Yarn ".parse::<PackageManager>().unwrap(), PackageManager::Yarn);
        let err = "cargo".parse::<PackageManager>().unwrap_err();
        assert!(err.to_string().contains("npm, pnpm, yarn, bun"));
    }
}
