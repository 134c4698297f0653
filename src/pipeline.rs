//! End-to-end generation pipeline.
//!
//! Runs every stage in dependency order against one sink and one seeded
//! RNG. Stages draw from the RNG strictly sequentially, so a fixed seed
//! and a fixed reference time reproduce the dataset exactly.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::info;

use crate::config::DEFAULT_BATCH_SIZE;
use crate::error::PipelineError;
use crate::generators::{
    generate_addresses, generate_brands, generate_categories, generate_coupon_usage,
    generate_coupons, generate_customers, generate_inventory, generate_orders_with_items,
    generate_payments, generate_product_images, generate_products, generate_reviews,
    generate_shipments, generate_warehouses, generate_wishlists, OrderPools,
};
use crate::sink::BatchSink;

/// Sizing and determinism knobs for one generation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub customers: u64,
    pub products: u64,
    pub orders: u64,
    pub reviews: u64,
    pub wishlists: u64,
    pub coupons: u64,
    pub batch_size: usize,
    pub seed: u64,
    /// All relative dates are anchored here instead of the wall clock,
    /// so two runs with the same seed and reference time are identical.
    pub reference_time: DateTime<Utc>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            customers: 100_000,
            products: 5_000,
            orders: 500_000,
            reviews: 200_000,
            wishlists: 50_000,
            coupons: 500,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: 42,
            reference_time: Utc::now(),
        }
    }
}

impl RunConfig {
    fn validate(&self) -> Result<(), PipelineError> {
        if self.batch_size == 0 {
            return Err(PipelineError::InvalidConfig(
                "batch size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-table row counts and timing for a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub row_counts: Vec<(&'static str, u64)>,
    pub elapsed: std::time::Duration,
}

impl RunSummary {
    pub fn total_rows(&self) -> u64 {
        self.row_counts.iter().map(|(_, n)| n).sum()
    }
}

/// Generate the full dataset into `sink`.
pub async fn run(config: &RunConfig, sink: &mut dyn BatchSink) -> Result<RunSummary, PipelineError> {
    config.validate()?;

    let started = Instant::now();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let now = config.reference_time;
    let batch = config.batch_size;
    let mut counts: Vec<(&'static str, u64)> = Vec::new();

    info!(seed = config.seed, batch_size = batch, "starting generation run");

    let category_ids = generate_categories(sink).await?;
    counts.push(("categories", category_ids.len() as u64));

    let brand_ids = generate_brands(&mut rng, sink).await?;
    counts.push(("brands", brand_ids.len() as u64));

    let warehouses = generate_warehouses(&mut rng, sink).await?;
    counts.push(("warehouses", warehouses));

    let coupons = generate_coupons(config.coupons, now, &mut rng, sink).await?;
    counts.push(("coupons", coupons.ids.len() as u64));

    let customer_ids = generate_customers(config.customers, batch, now, &mut rng, sink).await?;
    counts.push(("customers", customer_ids.len() as u64));

    let max_address_id = generate_addresses(&customer_ids, batch, &mut rng, sink).await?;
    counts.push(("addresses", max_address_id as u64));

    let products =
        generate_products(config.products, &category_ids, &brand_ids, batch, now, &mut rng, sink)
            .await?;
    counts.push(("products", products.ids.len() as u64));

    let images = generate_product_images(&products.ids, batch, &mut rng, sink).await?;
    counts.push(("product_images", images));

    let inventory = generate_inventory(&products.ids, batch, now, &mut rng, sink).await?;
    counts.push(("inventory", inventory));

    let pools = OrderPools {
        customer_ids: &customer_ids,
        max_address_id,
        coupons: &coupons,
        products: &products,
    };
    let generated =
        generate_orders_with_items(config.orders, &pools, batch, now, &mut rng, sink).await?;
    counts.push(("orders", generated.orders_written));
    counts.push(("order_items", generated.items_written));

    let payments = generate_payments(&generated.orders, batch, &mut rng, sink).await?;
    counts.push(("payments", payments));

    let shipments = generate_shipments(&generated.orders, batch, &mut rng, sink).await?;
    counts.push(("shipments", shipments));

    let reviews = generate_reviews(
        config.reviews,
        &customer_ids,
        &products.ids,
        batch,
        now,
        &mut rng,
        sink,
    )
    .await?;
    counts.push(("product_reviews", reviews));

    let wishlists = generate_wishlists(
        config.wishlists,
        &customer_ids,
        &products.ids,
        batch,
        now,
        &mut rng,
        sink,
    )
    .await?;
    counts.push(("wishlists", wishlists));

    let usage = generate_coupon_usage(&generated.orders, sink).await?;
    counts.push(("coupon_usage", usage));

    let summary = RunSummary {
        row_counts: counts,
        elapsed: started.elapsed(),
    };
    let secs = summary.elapsed.as_secs_f64();
    let rate = if secs > 0.0 {
        summary.total_rows() as f64 / secs
    } else {
        0.0
    };
    info!(
        total_rows = summary.total_rows(),
        elapsed_secs = secs,
        rows_per_sec = rate as u64,
        "generation run complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn small_config() -> RunConfig {
        RunConfig {
            customers: 30,
            products: 20,
            orders: 50,
            reviews: 40,
            wishlists: 10,
            coupons: 5,
            batch_size: 100,
            seed: 42,
            reference_time: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_run_populates_every_table() {
        let mut sink = MemorySink::new();
        let summary = run(&small_config(), &mut sink).await.unwrap();

        assert_eq!(summary.row_counts.len(), 16);
        for (table, count) in &summary.row_counts {
            assert_eq!(
                sink.row_count(table) as u64,
                *count,
                "count mismatch for {table}"
            );
        }
        assert_eq!(sink.row_count("customers"), 30);
        assert_eq!(sink.row_count("products"), 20);
        assert_eq!(sink.row_count("orders"), 50);
        assert!(summary.total_rows() > 0);
    }

    #[tokio::test]
    async fn test_zero_batch_size_rejected() {
        let mut sink = MemorySink::new();
        let config = RunConfig {
            batch_size: 0,
            ..small_config()
        };
        let err = run(&config, &mut sink).await.unwrap_err();
        assert!(matches!(err, PipelineError::InvalidConfig(_)));
    }
}
