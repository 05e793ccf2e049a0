// src/error.rs
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("cannot reduce an empty sequence of occurrence counts")]
    EmptyInput,
}
