//! CLI argument definitions using clap
//!
//! Commands:
//! - recordledger invoke --config <path>
//! - recordledger serve --config <path>
//! - recordledger operations --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// recordledger - record lifecycle and history over a ledger
#[derive(Parser, Debug)]
#[command(name = "recordledger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read one JSON request from stdin, run it, print the response
    Invoke {
        /// Path to configuration file
        #[arg(long, default_value = "./recordledger.json")]
        config: PathBuf,
    },

    /// Run JSON requests from stdin, one per line, until EOF
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./recordledger.json")]
        config: PathBuf,
    },

    /// Print the operations enabled by the configuration
    Operations {
        /// Path to configuration file
        #[arg(long, default_value = "./recordledger.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
