use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackratError {
    #[error("Inventory is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("Record not found: {key}")]
    NotFound { key: String, comparisons: u64 },

    #[error("Records must be sorted by name before a binary search")]
    Unsorted,

    #[error("Could not grow storage: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Not available in this profile: {0}")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PackratError>;
