//! Error types for enrichment map construction

use thiserror::Error;

/// Errors raised while validating input or building the overlap graph
///
/// All structural problems are detected before graph construction starts,
/// so a failed build never exposes a partial result.
#[derive(Error, Debug)]
pub enum EmapError {
    #[error("item table is empty")]
    EmptyTable,

    #[error("duplicate item id: {id}")]
    DuplicateId { id: String },

    #[error("record {row} is missing required field `{field}`")]
    MissingField { row: usize, field: String },

    #[error("min_overlap must be at least 1, got {value}")]
    InvalidMinOverlap { value: u32 },

    #[error("invalid item records: {source}")]
    InvalidRecords {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, EmapError>;
