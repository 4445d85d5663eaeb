//! Configuration file
//!
//! JSON object, all fields optional:
//!
//! ```text
//! {
//!   "history_enabled": true,
//!   "log_level": "INFO",
//!   "ledger_name": "default"
//! }
//! ```
//!
//! A missing file means all defaults.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::contract::Capabilities;
use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Serve history reads (default: true)
    #[serde(default = "default_history_enabled")]
    pub history_enabled: bool,

    /// Minimum log severity (default: "INFO")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Name carried in log fields (default: "default")
    #[serde(default = "default_ledger_name")]
    pub ledger_name: String,
}

fn default_history_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_ledger_name() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_enabled: default_history_enabled(),
            log_level: default_log_level(),
            ledger_name: default_ledger_name(),
        }
    }
}

impl Config {
    /// Load configuration from file. A missing file yields the defaults.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(CliError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::parse(&content)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content).map_err(CliError::ConfigParse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.log_severity()?;

        if self.ledger_name.trim().is_empty() {
            return Err(CliError::ConfigInvalid("ledger_name must not be empty".into()));
        }

        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(CliError::ConfigInvalid)
    }

    /// Contract capabilities selected by this configuration
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            history: self.history_enabled,
        }
    }
}
