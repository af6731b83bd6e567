//! Reads numbers to convert, one per line.

use crate::utils::error::{RandomizerError, Result};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Splits `reader` into lines with `\n` or `\r\n` endings removed.
///
/// Invalid UTF-8 is decoded lossily. Such a line then fails to convert
/// instead of ending the read.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for chunk in reader.split(b'\n') {
        let mut bytes = chunk?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Input line {} is not valid UTF-8", lines.len() + 1);
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        lines.push(line);
    }
    Ok(lines)
}

/// Reads lines from `path`, or from stdin when no path is given.
pub fn read_lines_from(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => {
            tracing::debug!("Reading input from {}", path.display());
            let file = std::fs::File::open(path).map_err(RandomizerError::IoError)?;
            read_lines(BufReader::new(file))
        }
        None => read_lines(io::stdin().lock()),
    }
}
