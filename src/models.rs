// src/models.rs
mod frequency;
mod summary;

pub use frequency::{FrequencyEntry, FrequencyTable};
pub use summary::StatsSummary;
