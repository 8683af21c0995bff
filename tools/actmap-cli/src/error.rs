//! CLI Error Types
//!
//! Error handling with clear, actionable error messages.

use std::path::PathBuf;

use actmap_codegen::ConfigError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI-specific errors with helpful messages and hints
#[derive(Debug, Error)]
pub enum CliError {
    /// Mapping file does not exist
    #[error("Mapping file not found: {}\n  Hint: pass --config or create embedded/user_config.conf", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Mapping file is invalid; nothing was written
    #[error("Invalid mapping file {}\n  {source}\n  No output written", path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Attach the mapping file path to a parse error
    pub fn invalid_config(path: impl Into<PathBuf>, source: ConfigError) -> Self {
        Self::InvalidConfig {
            path: path.into(),
            source,
        }
    }
}
