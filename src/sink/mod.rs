//! Output sinks for generated batches.
//!
//! A sink accepts named batches of uniform rows. The first `write_batch`
//! for a table in a sink's lifetime replaces whatever the destination
//! held before the sink was created; subsequent calls append.
//! `write_table` always replaces. One sink instance covers one run.
//! Sinks do not retry: a write failure propagates and halts the run,
//! leaving earlier flushed batches durable.

pub mod csv;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::SinkError;
use crate::table::{TableSpec, Value};

pub use csv::CsvSink;
pub use memory::MemorySink;
pub use postgres::PostgresSink;

/// A durable output target accepting named batches of uniform records.
#[async_trait]
pub trait BatchSink: Send {
    /// Append `rows` to `table`, creating it with replace semantics on
    /// the first call per table per run. Returns the number of rows
    /// written.
    async fn write_batch(
        &mut self,
        table: &'static TableSpec,
        rows: Vec<Vec<Value>>,
    ) -> Result<u64, SinkError>;

    /// Replace `table` with exactly `rows`. Returns the number of rows
    /// written.
    async fn write_table(
        &mut self,
        table: &'static TableSpec,
        rows: Vec<Vec<Value>>,
    ) -> Result<u64, SinkError>;
}
