// src/models/summary.rs

/// Derived statistics over a frequency table. A read-only snapshot produced
/// by the reducer and consumed by the report formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    /// Sum of all occurrence counts.
    pub total_words: u64,
    /// Sum of length × occurrences over all entries.
    pub total_length: u64,
    /// Total length ÷ total words, rounded to 3 decimal places.
    pub average: f64,
    /// Largest occurrence count across entries.
    pub max_occurrences: u64,
    /// Every length achieving `max_occurrences`, in ascending order.
    pub most_frequent_lengths: Vec<u64>,
}
