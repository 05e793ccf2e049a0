// src/models/frequency.rs
use std::collections::BTreeMap;

/// A single row of the frequency table: how many words of one length exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub length: u64,
    pub occurrences: u64,
}

/// Word-length frequency table, entries unique by length and sorted by
/// ascending length. Built once per analysis run and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Builds a table from per-length counts. The map's key order gives the
    /// ascending numeric ordering the table guarantees.
    #[must_use]
    pub fn from_counts(counts: BTreeMap<u64, u64>) -> Self {
        let entries = counts
            .into_iter()
            .map(|(length, occurrences)| FrequencyEntry {
                length,
                occurrences,
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The occurrence counts, in ascending-length order.
    #[must_use]
    pub fn occurrences(&self) -> Vec<u64> {
        self.entries.iter().map(|entry| entry.occurrences).collect()
    }

    /// Length × occurrences per entry, in ascending-length order.
    #[must_use]
    pub fn length_products(&self) -> Vec<u64> {
        self.entries
            .iter()
            .map(|entry| entry.length.saturating_mul(entry.occurrences))
            .collect()
    }

    /// The lengths whose occurrence count equals `occurrences`, ascending.
    #[must_use]
    pub fn lengths_with_occurrences(&self, occurrences: u64) -> Vec<u64> {
        self.entries
            .iter()
            .filter(|entry| entry.occurrences == occurrences)
            .map(|entry| entry.length)
            .collect()
    }
}
