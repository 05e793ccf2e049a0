// src/core/report.rs
use crate::models::{FrequencyTable, StatsSummary};

/// Formats the summary and the ordered frequency table into the report.
///
/// Every line is newline-terminated, including the last. The average prints
/// in its natural decimal representation (no re-padded trailing zeros), and
/// tied most-frequent lengths join with ` & ` in ascending order.
#[must_use]
pub fn format_report(summary: &StatsSummary, table: &FrequencyTable) -> String {
    let mut report = String::new();

    report.push_str(&format!("Word count = {}\n", summary.total_words));
    report.push_str(&format!("Average word length = {}\n", summary.average));

    for entry in table.entries() {
        report.push_str(&format!(
            "Number of words of length {} is {}\n",
            entry.length, entry.occurrences
        ));
    }

    let most_frequent = summary
        .most_frequent_lengths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" & ");
    report.push_str(&format!(
        "The most frequently occurring word length is {}, for word lengths of {}\n",
        summary.max_occurrences, most_frequent
    ));

    report
}
