// src/utils.rs
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead as _};
use std::path::Path;

/// Reads a text file into its lines.
///
/// The whole file is read in one scoped call, so the handle is released on
/// every exit path, including a failed read.
///
/// # Errors
///
/// Fails when the file does not exist or cannot be read; the error names
/// the offending path.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    Ok(content.lines().map(ToOwned::to_owned).collect())
}

/// Reads lines from standard input until end-of-stream.
///
/// # Errors
///
/// Fails when the stream errors mid-read.
pub fn read_stdin_lines() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        lines.push(line.context("Failed to read line from standard input")?);
    }
    Ok(lines)
}
