//! `package.json` model
//!
//! The manifest is carried in memory from first write to any later mutation,
//! so script rewrites never read the file back.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Manifest file name inside a workspace
pub const MANIFEST_FILE: &str = "package.json";

/// Structured `package.json` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDocument {
    pub name: String,

    pub version: String,

    #[serde(default)]
    pub description: String,

    /// Module mode (`module` or `commonjs`)
    #[serde(rename = "type")]
    pub module_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,

    /// Executables exposed to npx, keyed by command name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub bin: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    #[serde(default)]
    pub scripts: BTreeMap<String, String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub author: String,

    pub license: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl ManifestDocument {
    /// Minimal ES-module manifest, in the shape `npm init -y` produces
    pub fn minimal(name: impl Into<String>) -> Self {
        let mut scripts = BTreeMap::new();
        scripts.insert(
            "test".to_string(),
            "echo \"Error: no test specified\" && exit 1".to_string(),
        );

        Self {
            name: name.into(),
            version: "1.0.0".to_string(),
            description: String::new(),
            module_type: "module".to_string(),
            main: Some("dist/index.js".to_string()),
            bin: BTreeMap::new(),
            files: Vec::new(),
            scripts,
            keywords: Vec::new(),
            author: String::new(),
            license: "MIT".to_string(),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
        }
    }

    /// Manifest for a package runnable with `npx <name>`
    pub fn executable(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut manifest = Self::minimal(name.clone());
        manifest.description = "Interactive command-line tool".to_string();
        manifest
            .bin
            .insert(name, "./dist/index.js".to_string());
        manifest.files = vec!["dist".to_string()];
        manifest.set_scripts([
            ("build", "tsc"),
            ("start", "node dist/index.js"),
            ("test", "vitest run"),
        ]);
        manifest
    }

    /// Replace the script table
    pub fn set_scripts<'a, I>(&mut self, scripts: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.scripts = scripts
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
    }
}
