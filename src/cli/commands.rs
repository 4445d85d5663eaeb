//! CLI command implementations
//!
//! Every command loads the configuration, applies the log level and builds
//! a fresh in-memory ledger. State does not outlive the process.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::json;

use crate::api::Gateway;
use crate::contract::RecordContract;
use crate::ledger::MemoryLedger;
use crate::observability::Logger;

use super::args::Command;
use super::config::Config;
use super::errors::CliResult;
use super::io::{read_request, read_requests, write_error, write_json};

/// Parse CLI args and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Invoke { config } => invoke(&config),
        Command::Serve { config } => serve(&config),
        Command::Operations { config } => operations(&config),
    }
}

/// Build a gateway from configuration
pub fn build_gateway(config: &Config) -> CliResult<Gateway> {
    Logger::set_min_severity(config.log_severity()?);

    let contract = RecordContract::new(config.capabilities());
    let gateway =
        Gateway::new(MemoryLedger::new(), contract).with_ledger_name(config.ledger_name.clone());

    let history_enabled = gateway.contract().capabilities().history;
    Logger::info(
        "GATEWAY_READY",
        &[
            ("history_enabled", if history_enabled { "true" } else { "false" }),
            ("ledger", gateway.ledger_name()),
        ],
    );

    Ok(gateway)
}

/// Run a single request from stdin and exit
pub fn invoke(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let mut gateway = build_gateway(&config)?;

    let request = read_request(&mut io::stdin().lock())?;
    let response = gateway.handle(&request);
    write_json(&mut io::stdout().lock(), &response.to_json())
}

/// Run requests from stdin until EOF against one ledger
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let mut gateway = build_gateway(&config)?;

    let handled = serve_lines(&mut gateway, io::stdin().lock(), &mut io::stdout().lock())?;

    let handled = handled.to_string();
    let committed = gateway.ledger().committed_transactions().to_string();
    Logger::info(
        "GATEWAY_STOPPED",
        &[("committed", committed.as_str()), ("handled", handled.as_str())],
    );

    Ok(())
}

/// Answers each request line from `input` with one response line on
/// `output`. Returns the number of requests handled.
pub fn serve_lines<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    input: R,
    output: &mut W,
) -> CliResult<u64> {
    let mut handled: u64 = 0;
    for request in read_requests(input) {
        match request {
            Ok(line) => {
                let response = gateway.handle(&line);
                write_json(output, &response.to_json())?;
                handled += 1;
            }
            Err(e) => {
                // Reading input failed; nothing more can be served
                write_error(output, e.code_str(), &e.message())?;
                break;
            }
        }
    }
    Ok(handled)
}

/// Print the enabled operations as a JSON array
pub fn operations(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let contract = RecordContract::new(config.capabilities());
    write_json(&mut io::stdout().lock(), &json!(contract.operations()).to_string())
}
