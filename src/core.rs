// src/core.rs
pub mod frequency;
pub mod report;
pub mod stats;
pub mod tokenizer;

use anyhow::Result;

/// Analyses the word lengths in the given lines of text.
///
/// Runs the whole pipeline: tokenize each line, aggregate word lengths into
/// a frequency table, reduce the table to summary statistics, and format
/// the report.
///
/// # Arguments
///
/// * `lines` - The ordered lines of text to analyse
///
/// # Returns
///
/// * `Ok(String)` - The formatted report, one `\n`-terminated line each
///
/// When the input contains no words at all, the report is the single line
/// `Word count = 0`; the average and most-frequent lines are omitted since
/// neither is defined without words.
///
/// # Errors
///
/// This function does not fail on any input text; the `Result` carries the
/// reducer's empty-input error, which the zero-word guard above makes
/// unreachable.
pub fn analyse<S: AsRef<str>>(lines: &[S]) -> Result<String> {
    let words = lines
        .iter()
        .flat_map(|line| tokenizer::words(line.as_ref()));
    let table = frequency::aggregate(words);

    if table.is_empty() {
        return Ok(String::from("Word count = 0\n"));
    }

    let summary = stats::summarize(&table)?;
    Ok(report::format_report(&summary, &table))
}
