//! Synthetic e-commerce dataset generator.
//!
//! Generates a referentially consistent relational dataset (customers,
//! products, orders, payments, shipments and friends) from a single
//! seeded RNG, and writes it in batches to PostgreSQL or CSV files.
//!
//! # Example
//!
//! ```ignore
//! use ecommerce_datagen::pipeline::{self, RunConfig};
//! use ecommerce_datagen::sink::CsvSink;
//!
//! let config = RunConfig { orders: 1000, ..RunConfig::default() };
//! let mut sink = CsvSink::new("/tmp/dataset")?;
//! let summary = pipeline::run(&config, &mut sink).await?;
//! println!("{} rows", summary.total_rows());
//! ```

pub mod args;
pub mod batch;
pub mod config;
pub mod error;
pub mod generators;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod sampling;
pub mod sink;
pub mod table;

pub use error::{PipelineError, SinkError};
pub use pipeline::{RunConfig, RunSummary};
