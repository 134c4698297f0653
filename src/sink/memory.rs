//! In-memory sink used by tests to observe rows and batch cadence.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::SinkError;
use crate::sink::BatchSink;
use crate::table::{TableSpec, Value};

/// Sink that retains every row and a log of write calls.
///
/// The destination is the sink instance itself and starts empty, so the
/// first `write_batch` per table replaces nothing and appending is
/// equivalent to the replace-then-append contract. Like the file sinks,
/// one instance covers one run: reusing it for a second run appends to
/// the first run's rows instead of replacing them.
#[derive(Debug, Default)]
pub struct MemorySink {
    tables: BTreeMap<&'static str, Vec<Vec<Value>>>,
    /// (table, rows in call) per `write_batch` call, in call order.
    batch_log: Vec<(&'static str, usize)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows currently held for `table`.
    pub fn rows(&self, table: &str) -> &[Vec<Value>] {
        self.tables.get(table).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn row_count(&self, table: &str) -> usize {
        self.rows(table).len()
    }

    /// Sizes of the `write_batch` calls received for `table`, in order.
    pub fn batch_sizes(&self, table: &str) -> Vec<usize> {
        self.batch_log
            .iter()
            .filter(|(name, _)| *name == table)
            .map(|(_, n)| *n)
            .collect()
    }

    /// Names of all tables that received at least one write.
    pub fn table_names(&self) -> Vec<&'static str> {
        self.tables.keys().copied().collect()
    }
}

#[async_trait]
impl BatchSink for MemorySink {
    async fn write_batch(
        &mut self,
        table: &'static TableSpec,
        rows: Vec<Vec<Value>>,
    ) -> Result<u64, SinkError> {
        let written = rows.len() as u64;
        self.batch_log.push((table.name, rows.len()));
        self.tables.entry(table.name).or_default().extend(rows);
        Ok(written)
    }

    async fn write_table(
        &mut self,
        table: &'static TableSpec,
        rows: Vec<Vec<Value>>,
    ) -> Result<u64, SinkError> {
        let written = rows.len() as u64;
        self.tables.insert(table.name, rows);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CATEGORIES;

    #[tokio::test]
    async fn test_batches_accumulate() {
        let mut sink = MemorySink::new();
        sink.write_batch(&CATEGORIES, vec![vec![Value::Int(1)]])
            .await
            .unwrap();
        sink.write_batch(&CATEGORIES, vec![vec![Value::Int(2)], vec![Value::Int(3)]])
            .await
            .unwrap();

        assert_eq!(sink.row_count("categories"), 3);
        assert_eq!(sink.batch_sizes("categories"), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_write_table_replaces() {
        let mut sink = MemorySink::new();
        sink.write_batch(&CATEGORIES, vec![vec![Value::Int(1)]])
            .await
            .unwrap();
        sink.write_table(&CATEGORIES, vec![vec![Value::Int(9)]])
            .await
            .unwrap();

        assert_eq!(sink.rows("categories"), &[vec![Value::Int(9)]]);
    }
}
