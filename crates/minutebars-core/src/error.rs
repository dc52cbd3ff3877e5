//! Error types for the minutebars pipeline.

use thiserror::Error;

/// Top-level pipeline error.
#[derive(Error, Debug)]
pub enum BarsError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Metric error: {0}")]
    Metric(#[from] MetricError),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building or reshaping price tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unrecognized aggregation rule: {0}")]
    InvalidRule(String),

    #[error("Timestamps must be strictly increasing (row {index})")]
    UnorderedTimestamps { index: usize },
}

/// Metric calculation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    #[error("Column length mismatch: {timestamps} timestamps, {values} values")]
    LengthMismatch { timestamps: usize, values: usize },

    #[error("Invalid window: {0}")]
    InvalidWindow(String),
}

/// Result type alias for pipeline operations.
pub type BarsResult<T> = Result<T, BarsError>;
