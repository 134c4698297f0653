//! CSV file sink: one file per table under an output directory.
//!
//! The first write for a table creates the file and writes a header row;
//! later batches are appended with native file append, so append cost
//! stays linear in the batch size as the file grows.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use csv::Writer;
use tracing::debug;

use crate::error::SinkError;
use crate::sink::BatchSink;
use crate::table::{TableSpec, Value};

/// Buffer size for CSV writing.
const DEFAULT_BUFFER_SIZE: usize = 8192;

/// CSV sink writing `<output_dir>/<table>.csv` per table.
pub struct CsvSink {
    output_dir: PathBuf,
    started: HashSet<&'static str>,
}

impl CsvSink {
    /// Create a sink rooted at `output_dir`, creating the directory if
    /// needed.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self, SinkError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            started: HashSet::new(),
        })
    }

    fn path_for(&self, table: &TableSpec) -> PathBuf {
        self.output_dir.join(format!("{}.csv", table.name))
    }

    fn write(
        &mut self,
        table: &'static TableSpec,
        rows: &[Vec<Value>],
        replace: bool,
    ) -> Result<u64, SinkError> {
        let path = self.path_for(table);
        let fresh = replace || !self.started.contains(table.name);

        let file = if fresh {
            File::create(&path)?
        } else {
            OpenOptions::new().append(true).open(&path)?
        };
        let mut writer = Writer::from_writer(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file));

        if fresh {
            writer.write_record(table.column_names())?;
        }
        for row in rows {
            writer.write_record(row.iter().map(format_value))?;
        }
        writer.flush()?;
        self.started.insert(table.name);

        debug!(
            "wrote {} rows to {} ({})",
            rows.len(),
            path.display(),
            if fresh { "create" } else { "append" }
        );
        Ok(rows.len() as u64)
    }
}

#[async_trait]
impl BatchSink for CsvSink {
    async fn write_batch(
        &mut self,
        table: &'static TableSpec,
        rows: Vec<Vec<Value>>,
    ) -> Result<u64, SinkError> {
        self.write(table, &rows, false)
    }

    async fn write_table(
        &mut self,
        table: &'static TableSpec,
        rows: Vec<Vec<Value>>,
    ) -> Result<u64, SinkError> {
        self.write(table, &rows, true)
    }
}

/// Render a value as a CSV field. NULL becomes the empty field.
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        Value::Timestamp(ts) => ts.to_rfc3339(),
        Value::Uuid(u) => u.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryRecord, CATEGORIES};
    use crate::table::TableRecord;
    use tempfile::TempDir;

    fn category(id: i64) -> Vec<Value> {
        CategoryRecord {
            category_id: id,
            category_name: format!("cat_{id}"),
            parent_category_id: None,
            description: "test".to_string(),
        }
        .values()
    }

    #[tokio::test]
    async fn test_first_write_creates_with_header() {
        let dir = TempDir::new().unwrap();
        let mut sink = CsvSink::new(dir.path()).unwrap();

        let written = sink
            .write_batch(&CATEGORIES, vec![category(1), category(2)])
            .await
            .unwrap();
        assert_eq!(written, 2);

        let content = std::fs::read_to_string(dir.path().join("categories.csv")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "category_id,category_name,parent_category_id,description"
        );
        // NULL parent renders as an empty field.
        assert_eq!(lines[1], "1,cat_1,,test");
    }

    #[tokio::test]
    async fn test_append_does_not_repeat_header() {
        let dir = TempDir::new().unwrap();
        let mut sink = CsvSink::new(dir.path()).unwrap();

        sink.write_batch(&CATEGORIES, vec![category(1)]).await.unwrap();
        sink.write_batch(&CATEGORIES, vec![category(2)]).await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("categories.csv")).unwrap();
        assert_eq!(content.lines().count(), 3); // header + 2 rows
    }

    #[tokio::test]
    async fn test_write_table_replaces() {
        let dir = TempDir::new().unwrap();
        let mut sink = CsvSink::new(dir.path()).unwrap();

        sink.write_batch(&CATEGORIES, vec![category(1), category(2)])
            .await
            .unwrap();
        sink.write_table(&CATEGORIES, vec![category(9)]).await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("categories.csv")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("9,"));
    }
}
