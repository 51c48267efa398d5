//! Workspace guard and file emission
//!
//! A [`Workspace`] is the freshly created project directory. Every file the
//! scaffolder writes and every command it spawns is rooted here; the process
//! working directory is never changed.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use tracing::{debug, info};

/// A freshly created project directory
#[derive(Debug, Clone)]
pub struct Workspace {
    root: Utf8PathBuf,
}

impl Workspace {
    /// Create the workspace directory `base/name`
    ///
    /// Fails with [`Error::TargetExists`] without touching the filesystem if
    /// anything already occupies the path. The create is a single segment:
    /// `base` must already exist.
    pub fn create(base: &Utf8Path, name: &str) -> Result<Self> {
        let root = base.join(name);

        // symlink_metadata so a dangling link still counts as occupied
        if root.symlink_metadata().is_ok() {
            return Err(Error::target_exists(name));
        }

        std::fs::create_dir(&root).map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => Error::target_exists(name),
            _ => Error::filesystem_write(root.as_str(), e),
        })?;
        info!("Created workspace at: {}", root);

        Ok(Self { root })
    }

    /// Root directory of the workspace
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Absolute path of a workspace-relative path
    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Create a directory (and parents) inside the workspace
    pub fn create_dir(&self, relative: &str) -> Result<()> {
        let path = self.path(relative);
        std::fs::create_dir_all(&path).map_err(|e| Error::filesystem_write(path.as_str(), e))
    }

    /// Write a file inside the workspace, creating parent directories
    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> Result<()> {
        let path = self.path(relative);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::filesystem_write(parent.as_str(), e))?;
        }

        std::fs::write(&path, contents).map_err(|e| Error::filesystem_write(path.as_str(), e))?;
        debug!("Wrote file: {}", relative);

        Ok(())
    }

    /// Write a value as pretty-printed JSON with a trailing newline
    pub fn write_json<T: Serialize + ?Sized>(&self, relative: &str, value: &T) -> Result<()> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        self.write(relative, json)
    }
}
