//! Error types for the data generation pipeline.

use thiserror::Error;

/// Errors that can occur while writing to an output sink.
#[derive(Error, Debug)]
pub enum SinkError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),
}

/// Errors that can occur while running the generation pipeline.
///
/// An empty required pool is a contract violation, not a recoverable
/// condition; the run halts rather than producing degenerate records.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Sink write failure. Previously flushed batches remain durable.
    #[error("sink write failed: {0}")]
    Sink(#[from] SinkError),

    /// A generator was invoked with an empty id pool it requires.
    #[error("required {0} pool is empty")]
    EmptyPool(&'static str),

    /// Configuration error.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
