//! CLI module for recordledger
//!
//! Provides command-line interface for:
//! - invoke: run one request from stdin
//! - serve: run requests from stdin until EOF
//! - operations: list the enabled operations

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{build_gateway, invoke, operations, run, run_command, serve, serve_lines};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::{read_request, read_requests, write_error, write_json};
