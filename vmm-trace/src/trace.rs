//! Parsing of address traces: one non-negative decimal address per line.
//!
//! Blank lines are skipped. Anything else that is not a `u32` is rejected
//! with the line it came from, instead of being read as address 0.

use std::io::BufRead;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("line {line}: {content:?} is not a valid address")]
    Malformed { line: usize, content: String },

    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),
}

pub fn parse_line(line: usize, raw: &str) -> Result<Option<u32>, TraceError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| TraceError::Malformed {
            line,
            content: trimmed.to_owned(),
        })
}

/// Reads the whole trace up front, so a malformed line aborts the run before
/// any result is written.
pub fn read_trace<R: BufRead>(reader: R) -> Result<Vec<u32>, TraceError> {
    let mut addresses = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        if let Some(address) = parse_line(idx + 1, &line?)? {
            addresses.push(address);
        }
    }

    Ok(addresses)
}
