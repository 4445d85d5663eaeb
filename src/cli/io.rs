//! Line-oriented JSON I/O for the CLI
//!
//! - Input: one JSON request per line
//! - Output: one JSON response per line, nothing else
//! - UTF-8 only
//!
//! Commands pass locked stdin/stdout; tests pass in-memory buffers.

use std::io::{BufRead, Write};

use super::errors::{CliError, CliResult};

/// Read a single request line
pub fn read_request<R: BufRead>(reader: &mut R) -> CliResult<String> {
    let mut line = String::new();

    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }

    Ok(line.trim_end().to_string())
}

/// Read request lines until EOF, skipping blank lines
pub fn read_requests<R: BufRead>(reader: R) -> impl Iterator<Item = CliResult<String>> {
    reader
        .lines()
        .map(|line| line.map_err(CliError::from))
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
}

/// Write a raw JSON string as one line
pub fn write_json<W: Write>(writer: &mut W, json_str: &str) -> CliResult<()> {
    writeln!(writer, "{}", json_str)?;
    writer.flush()?;

    Ok(())
}

/// Write an error response line
pub fn write_error<W: Write>(writer: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    write_json(writer, &response.to_string())
}
