//! Error types for vhostctl
//!
//! Uses `thiserror` for library errors. Public operations never return these
//! directly; they are folded into an [`Outcome`](crate::domain::value_objects::Outcome)
//! at the operation boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::CommandError;

/// Result type alias for vhostctl operations
pub type VhostResult<T> = Result<T, VhostError>;

/// Main error type for vhostctl operations
#[derive(Error, Debug)]
pub enum VhostError {
    /// Site has no definitive config file
    #[error("Virtual host '{name}' not found")]
    NotFound { name: String },

    /// Site config file already present
    #[error("Virtual host '{name}' already exists")]
    AlreadyExists { name: String },

    /// Site name cannot be used as a file name
    #[error("invalid site name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// Value would break the generated nginx directive
    #[error("invalid {field} '{value}': {reason}")]
    InvalidDirective {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// External command exited non-zero
    #[error("Failed to {action}: {output}")]
    CommandFailed { action: String, output: String },

    /// External command could not be run to completion
    #[error("Failed to {action}: {source}")]
    Command {
        action: String,
        #[source]
        source: CommandError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl VhostError {
    pub fn not_found(name: &str) -> Self {
        VhostError::NotFound {
            name: name.to_string(),
        }
    }

    pub fn already_exists(name: &str) -> Self {
        VhostError::AlreadyExists {
            name: name.to_string(),
        }
    }
}
