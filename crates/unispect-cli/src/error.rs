#![forbid(unsafe_code)]

//! CLI error taxonomy and exit codes.
//!
//! The engine is total over its input, so every failure here is an
//! input-acquisition or output problem, never an analysis one.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown example '{0}'; run `unispect examples` to list them")]
    UnknownExample(String),

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    ReadStdin(#[source] std::io::Error),

    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error: 2 for usage-level mistakes,
    /// 1 for everything else.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::UnknownExample(_) => 2,
            CliError::ReadFile { .. } | CliError::ReadStdin(_) | CliError::Serialize(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_example_is_a_usage_error() {
        let err = CliError::UnknownExample("nope".to_string());
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("unispect examples"));
    }

    #[test]
    fn io_errors_exit_with_one() {
        let err = CliError::ReadStdin(std::io::Error::other("boom"));
        assert_eq!(err.exit_code(), 1);
    }
}
