//! recordledger CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. Errors are printed
//! to stderr and the process exits non-zero.

use recordledger::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code_str(), e);
        std::process::exit(1);
    }
}
