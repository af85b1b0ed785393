//! Error types for passkeep.
//!
//! Uses `thiserror` for ergonomic error definitions. Every operation
//! returns a typed outcome the caller can distinguish; nothing is retried
//! and nothing aborts the process from library code.

use std::path::PathBuf;
use thiserror::Error;

/// Input validation failures for credential fields.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("required field '{0}' is empty")]
    EmptyField(&'static str),
}

/// Failures of the backing credential file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing file does not exist yet. Distinct from a key miss:
    /// callers may want to prompt the user to add their first credential.
    #[error("no credential file found at {}", .0.display())]
    Missing(PathBuf),

    /// The backing file exists but is not a valid credential mapping.
    /// Propagated as-is; the file is never overwritten or reset.
    #[error("credential file is corrupt: {0}")]
    Corrupt(String),

    #[error("failed to read credential file: {0}")]
    ReadFailed(String),

    #[error("failed to write credential file: {0}")]
    WriteFailed(String),

    #[error("failed to create data directory: {0}")]
    DirectoryError(String),
}

/// Main error type for vault operations.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The backing file parsed fine but holds no record for the website.
    #[error("no credentials stored for '{0}'")]
    NotFound(String),
}

/// Result type alias for vault operations.
pub type VaultResult<T> = Result<T, VaultError>;

/// Errors from settings and path management.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine platform config directories")]
    DirectoryNotFound,

    #[error("failed to read {}: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {}: {reason}", .path.display())]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error type for the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
