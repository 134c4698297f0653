//! Batch accumulation and flush discipline.
//!
//! High-volume generators push records into a [`BatchBuffer`] and flush
//! to the sink whenever the buffer reaches its threshold; a final flush
//! at the end of each generator's loop drains the partial batch so no
//! record is silently dropped.

use crate::error::SinkError;
use crate::sink::BatchSink;
use crate::table::TableRecord;

/// An in-memory batch of records for one table.
pub struct BatchBuffer<T> {
    records: Vec<T>,
    threshold: usize,
    written: u64,
}

impl<T: TableRecord + Send + Sync> BatchBuffer<T> {
    /// Create a buffer that should be flushed once `threshold` records
    /// accumulate.
    pub fn new(threshold: usize) -> Self {
        assert!(threshold > 0, "batch threshold must be positive");
        Self {
            records: Vec::with_capacity(threshold),
            threshold,
            written: 0,
        }
    }

    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Whether the buffer has reached its flush threshold.
    pub fn is_full(&self) -> bool {
        self.records.len() >= self.threshold
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write buffered records to the sink and clear the buffer. A no-op
    /// when the buffer is empty.
    pub async fn flush(&mut self, sink: &mut dyn BatchSink) -> Result<(), SinkError> {
        if self.records.is_empty() {
            return Ok(());
        }
        let rows = self.records.iter().map(T::values).collect();
        self.records.clear();
        self.written += sink.write_batch(T::table(), rows).await?;
        Ok(())
    }

    /// Total records written across all flushes so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryRecord;
    use crate::sink::MemorySink;

    fn record(id: i64) -> CategoryRecord {
        CategoryRecord {
            category_id: id,
            category_name: format!("cat_{id}"),
            parent_category_id: None,
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_flush_cadence() {
        let mut sink = MemorySink::new();
        let mut buffer = BatchBuffer::new(10);

        for i in 1..=25 {
            buffer.push(record(i));
            if buffer.is_full() {
                buffer.flush(&mut sink).await.unwrap();
            }
        }
        buffer.flush(&mut sink).await.unwrap();

        assert_eq!(buffer.written(), 25);
        assert_eq!(sink.batch_sizes("categories"), vec![10, 10, 5]);
        assert_eq!(sink.row_count("categories"), 25);
    }

    #[tokio::test]
    async fn test_empty_flush_writes_nothing() {
        let mut sink = MemorySink::new();
        let mut buffer: BatchBuffer<CategoryRecord> = BatchBuffer::new(10);

        buffer.flush(&mut sink).await.unwrap();

        assert_eq!(buffer.written(), 0);
        assert!(sink.batch_sizes("categories").is_empty());
    }

    #[tokio::test]
    async fn test_exact_multiple_has_no_trailing_batch() {
        let mut sink = MemorySink::new();
        let mut buffer = BatchBuffer::new(5);

        for i in 1..=10 {
            buffer.push(record(i));
            if buffer.is_full() {
                buffer.flush(&mut sink).await.unwrap();
            }
        }
        buffer.flush(&mut sink).await.unwrap();

        assert_eq!(sink.batch_sizes("categories"), vec![5, 5]);
    }
}
