//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code. Errors fall
//! into two code families: configuration (`REC_CLI_CONFIG_ERROR`) and
//! stdin/stdout (`REC_CLI_IO_ERROR`).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file exists but could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not a valid config object
    #[error("invalid config JSON: {0}")]
    ConfigParse(#[source] serde_json::Error),

    /// Config parsed but holds an unusable value
    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    /// stdin or stdout failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// stdin ended before a request line
    #[error("empty input")]
    EmptyInput,
}

impl CliError {
    /// Stable error code
    pub fn code_str(&self) -> &'static str {
        match self {
            Self::ConfigRead { .. } | Self::ConfigParse(_) | Self::ConfigInvalid(_) => {
                "REC_CLI_CONFIG_ERROR"
            }
            Self::Io(_) | Self::EmptyInput => "REC_CLI_IO_ERROR",
        }
    }

    /// Human-readable message, without the code
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
