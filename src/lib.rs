// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use crate::cli::Args;
pub use crate::core::analyse;
pub use crate::error::StatsError;
pub use crate::models::{FrequencyEntry, FrequencyTable, StatsSummary};
