//! PostgreSQL sink: drop/create on first write, batched multi-row INSERT.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, info};

use crate::error::SinkError;
use crate::sink::BatchSink;
use crate::table::{Column, ColumnType, TableSpec, Value};

/// PostgreSQL caps bind parameters per statement at u16::MAX, so wide
/// batches are split into multiple INSERT statements.
const MAX_BIND_PARAMS: usize = 65_535;

/// Sink inserting into PostgreSQL tables over a single connection.
pub struct PostgresSink {
    client: Client,
    started: HashSet<&'static str>,
}

impl PostgresSink {
    /// Connect and verify the connection.
    ///
    /// The connection string uses tokio-postgres key-value or URL form,
    /// e.g. `host=localhost user=postgres password=postgres dbname=testdb`.
    pub async fn connect(connection_string: &str) -> Result<Self, SinkError> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls).await?;

        // Drive the connection in the background; the sink itself stays
        // strictly sequential.
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        client.simple_query("SELECT 1").await?;

        Ok(Self {
            client,
            started: HashSet::new(),
        })
    }

    async fn recreate_table(&self, table: &TableSpec) -> Result<(), SinkError> {
        let drop_sql = format!("DROP TABLE IF EXISTS \"{}\"", table.name);
        self.client.execute(&drop_sql, &[]).await?;

        let create_sql = create_table_sql(table);
        info!("Creating table: {}", table.name);
        debug!("DDL: {}", create_sql);
        self.client.execute(&create_sql, &[]).await?;
        Ok(())
    }

    async fn insert_rows(
        &self,
        table: &TableSpec,
        rows: &[Vec<Value>],
    ) -> Result<u64, SinkError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let col_count = table.columns.len();
        let rows_per_stmt = (MAX_BIND_PARAMS / col_count).max(1);

        for chunk in rows.chunks(rows_per_stmt) {
            let sql = insert_sql(table, chunk.len());

            let mut params: Vec<Box<dyn ToSql + Sync + Send>> =
                Vec::with_capacity(chunk.len() * col_count);
            for row in chunk {
                for (column, value) in table.columns.iter().zip(row) {
                    params.push(bind_value(column, value));
                }
            }
            let param_refs: Vec<&(dyn ToSql + Sync)> = params
                .iter()
                .map(|p| p.as_ref() as &(dyn ToSql + Sync))
                .collect();

            self.client.execute(&sql, &param_refs).await?;
        }

        Ok(rows.len() as u64)
    }
}

#[async_trait]
impl BatchSink for PostgresSink {
    async fn write_batch(
        &mut self,
        table: &'static TableSpec,
        rows: Vec<Vec<Value>>,
    ) -> Result<u64, SinkError> {
        if !self.started.contains(table.name) {
            self.recreate_table(table).await?;
            self.started.insert(table.name);
        }
        self.insert_rows(table, &rows).await
    }

    async fn write_table(
        &mut self,
        table: &'static TableSpec,
        rows: Vec<Vec<Value>>,
    ) -> Result<u64, SinkError> {
        self.recreate_table(table).await?;
        self.started.insert(table.name);
        self.insert_rows(table, &rows).await
    }
}

fn sql_type(ty: ColumnType) -> &'static str {
    match ty {
        ColumnType::BigInt => "BIGINT",
        ColumnType::Double => "DOUBLE PRECISION",
        ColumnType::Text => "TEXT",
        ColumnType::Bool => "BOOLEAN",
        ColumnType::Date => "DATE",
        ColumnType::Timestamp => "TIMESTAMPTZ",
        ColumnType::Uuid => "UUID",
    }
}

/// CREATE TABLE statement for a table spec. The first column is the
/// primary key.
fn create_table_sql(table: &TableSpec) -> String {
    let columns: Vec<String> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i == 0 {
                format!("\"{}\" {} PRIMARY KEY", c.name, sql_type(c.ty))
            } else {
                format!("\"{}\" {}", c.name, sql_type(c.ty))
            }
        })
        .collect();
    format!("CREATE TABLE \"{}\" ({})", table.name, columns.join(", "))
}

/// Multi-row INSERT statement with `$n` placeholders.
fn insert_sql(table: &TableSpec, row_count: usize) -> String {
    let col_count = table.columns.len();
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|c| format!("\"{}\"", c.name))
        .collect();

    let mut placeholders = Vec::with_capacity(row_count);
    let mut param_idx = 1;
    for _ in 0..row_count {
        let row: Vec<String> = (0..col_count)
            .map(|_| {
                let p = format!("${param_idx}");
                param_idx += 1;
                p
            })
            .collect();
        placeholders.push(format!("({})", row.join(", ")));
    }

    format!(
        "INSERT INTO \"{}\" ({}) VALUES {}",
        table.name,
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Convert a value into a boxed ToSql bind. NULLs are typed from the
/// column so the prepared statement's parameter types line up.
fn bind_value(column: &Column, value: &Value) -> Box<dyn ToSql + Sync + Send> {
    match value {
        Value::Null => match column.ty {
            ColumnType::BigInt => Box::new(None::<i64>),
            ColumnType::Double => Box::new(None::<f64>),
            ColumnType::Text => Box::new(None::<String>),
            ColumnType::Bool => Box::new(None::<bool>),
            ColumnType::Date => Box::new(None::<chrono::NaiveDate>),
            ColumnType::Timestamp => Box::new(None::<chrono::DateTime<chrono::Utc>>),
            ColumnType::Uuid => Box::new(None::<uuid::Uuid>),
        },
        Value::Bool(b) => Box::new(*b),
        Value::Int(i) => Box::new(*i),
        Value::Float(f) => Box::new(*f),
        Value::Text(s) => Box::new(s.clone()),
        Value::Date(d) => Box::new(*d),
        Value::Timestamp(ts) => Box::new(*ts),
        Value::Uuid(u) => Box::new(*u),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CATEGORIES, ORDERS};

    #[test]
    fn test_create_table_sql() {
        let sql = create_table_sql(&CATEGORIES);
        assert!(sql.starts_with("CREATE TABLE \"categories\""));
        assert!(sql.contains("\"category_id\" BIGINT PRIMARY KEY"));
        assert!(sql.contains("\"parent_category_id\" BIGINT"));
        assert!(sql.contains("\"description\" TEXT"));
    }

    #[test]
    fn test_insert_sql_placeholders() {
        let sql = insert_sql(&CATEGORIES, 2);
        assert!(sql.starts_with("INSERT INTO \"categories\""));
        assert!(sql.contains("($1, $2, $3, $4)"));
        assert!(sql.contains("($5, $6, $7, $8)"));
    }

    #[test]
    fn test_orders_ddl_types() {
        let sql = create_table_sql(&ORDERS);
        assert!(sql.contains("\"order_date\" TIMESTAMPTZ"));
        assert!(sql.contains("\"subtotal\" DOUBLE PRECISION"));
        assert!(sql.contains("\"status\" TEXT"));
    }
}
