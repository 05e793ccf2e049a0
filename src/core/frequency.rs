// src/core/frequency.rs
use std::collections::BTreeMap;

use crate::core::tokenizer::word_length;
use crate::models::FrequencyTable;

/// Aggregates a word sequence into a frequency table mapping word length to
/// occurrence count, sorted by ascending length. An empty word sequence
/// yields an empty table.
pub fn aggregate<'a, I>(words: I) -> FrequencyTable
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<u64, u64> = BTreeMap::new();

    for word in words {
        counts
            .entry(word_length(word))
            .and_modify(|count| *count = count.saturating_add(1))
            .or_insert(1);
    }

    FrequencyTable::from_counts(counts)
}
