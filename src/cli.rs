// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::analyse;
use crate::utils::{read_lines, read_stdin_lines};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to analyse (reads standard input when omitted)
    pub file: Option<PathBuf>,
}

/// Runs one analysis: gather input lines, analyse, print the report.
///
/// # Errors
///
/// Fails when the input file or standard input cannot be read; nothing is
/// printed to standard output in that case.
pub fn run(args: &Args) -> Result<()> {
    let lines = match &args.file {
        Some(path) => read_lines(path)?,
        None => read_stdin_lines()?,
    };

    let report = analyse(&lines)?;
    print!("{report}");

    Ok(())
}
