//! Error types for tsinit-projects

use thiserror::Error;

/// Result type alias using tsinit-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// User declined to supply a project name or template
    #[error("Operation cancelled: a project name and template are required")]
    Cancelled,

    /// Target directory already present
    #[error("Target directory already exists: {path}")]
    TargetExists { path: String },

    /// External process exited unsuccessfully
    #[error("Command `{command}` failed{}", exit_suffix(.code))]
    ExternalCommandFailed { command: String, code: Option<i32> },

    /// External process could not be started
    #[error("Failed to start `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Required tool missing from PATH
    #[error("Required command not found: {command}. Please ensure it is installed and in PATH")]
    CommandNotFound { command: String },

    /// File or directory could not be written
    #[error("Failed to write {path}: {source}")]
    FilesystemWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Embedded template missing
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Template error from Tera
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

impl Error {
    /// Create a target exists error
    pub fn target_exists(path: impl Into<String>) -> Self {
        Self::TargetExists { path: path.into() }
    }

    /// Create an external command failure
    pub fn command_failed(command: impl Into<String>, code: Option<i32>) -> Self {
        Self::ExternalCommandFailed {
            command: command.into(),
            code,
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a filesystem write error
    pub fn filesystem_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FilesystemWrite {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether this is the user-cancellation path rather than a failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
