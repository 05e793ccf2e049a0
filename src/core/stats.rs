// src/core/stats.rs
use crate::error::StatsError;
use crate::models::{FrequencyTable, StatsSummary};

/// Sum of a sequence of counts. Defined as 0 for an empty sequence.
#[must_use]
pub fn sum(values: &[u64]) -> u64 {
    values.iter().fold(0, |total, value| total.saturating_add(*value))
}

/// Largest value in a sequence of counts.
///
/// # Errors
///
/// Returns `StatsError::EmptyInput` when the sequence is empty; callers
/// must guarantee at least one entry or handle the zero-word case before
/// reducing.
pub fn max(values: &[u64]) -> Result<u64, StatsError> {
    values.iter().copied().max().ok_or(StatsError::EmptyInput)
}

/// Rounds to the given number of decimal places, half away from zero.
///
/// Scale, round, descale — spelled out rather than left to a formatting
/// default, so that `round_to(1.2345, 3)` gives `1.235` and not the
/// half-to-even `1.234`.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Reduces a frequency table to its summary statistics.
///
/// # Arguments
///
/// * `table` - The frequency table to reduce; must hold at least one entry
///
/// # Returns
///
/// * `Ok(StatsSummary)` - Totals, rounded average, maximum occurrence
///   count and the ascending list of lengths tied on that maximum
///
/// # Errors
///
/// Returns `StatsError::EmptyInput` when the table has no entries.
#[expect(clippy::as_conversions, reason = "Counts fit f64 for this tool")]
#[expect(clippy::cast_precision_loss, reason = "Counts fit f64 for this tool")]
pub fn summarize(table: &FrequencyTable) -> Result<StatsSummary, StatsError> {
    let occurrences = table.occurrences();

    let max_occurrences = max(&occurrences)?;
    let total_words = sum(&occurrences);
    let total_length = sum(&table.length_products());

    let average = round_to(total_length as f64 / total_words as f64, 3);
    let most_frequent_lengths = table.lengths_with_occurrences(max_occurrences);

    Ok(StatsSummary {
        total_words,
        total_length,
        average,
        max_occurrences,
        most_frequent_lengths,
    })
}
