//! Product, product image, and inventory generators.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::batch::BatchBuffer;
use crate::config;
use crate::error::PipelineError;
use crate::model::{round2, InventoryLevel, Product, ProductImage};
use crate::provider;
use crate::sampling::{pick, pick_weighted};
use crate::sink::BatchSink;

/// The generated product pool: ids plus the id-to-price map used when
/// pricing order items.
#[derive(Debug, Clone, Default)]
pub struct ProductPool {
    pub ids: Vec<i64>,
    pub prices: HashMap<i64, f64>,
}

impl ProductPool {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Generate `n` products across the catalog categories.
pub async fn generate_products(
    n: u64,
    category_ids: &HashMap<&'static str, i64>,
    brand_ids: &HashMap<&'static str, i64>,
    batch_size: usize,
    now: DateTime<Utc>,
    rng: &mut StdRng,
    sink: &mut dyn BatchSink,
) -> Result<ProductPool, PipelineError> {
    let mut buffer = BatchBuffer::new(batch_size);
    let mut pool = ProductPool::default();
    let today = now.date_naive();

    for product_id in 1..=n as i64 {
        let category = pick(rng, config::CATALOG);
        let category_id = category_ids.get(category.name).copied().unwrap_or(1);
        let brand_name = *pick(rng, category.brands);
        let brand_id = brand_ids.get(brand_name).copied().unwrap_or(1);

        let template = pick(rng, category.products);
        let version = rng.gen_range(1..=15);
        let name = template.name.replace("{v}", &version.to_string());
        let price = round2(rng.gen_range(template.min_price..=template.max_price));

        pool.ids.push(product_id);
        pool.prices.insert(product_id, price);

        let category_prefix: String = category.name.chars().take(3).collect();
        buffer.push(Product {
            product_id,
            product_name: format!("{brand_name} {name}"),
            category_id,
            brand_id,
            description: provider::paragraph(rng),
            price,
            cost_price: round2(price * rng.gen_range(0.3..=0.6)),
            sku: format!("SKU-{}-{:06}", category_prefix.to_uppercase(), product_id),
            weight_kg: round2(rng.gen_range(0.1..=25.0)),
            is_active: *pick_weighted(rng, &[(true, 95), (false, 5)]),
            created_at: provider::date_between(rng, today - Duration::days(3 * 365), today),
            rating_avg: (rng.gen_range(3.0..=5.0) * 10.0_f64).round() / 10.0,
        });

        if buffer.is_full() {
            buffer.flush(sink).await?;
        }
    }
    buffer.flush(sink).await?;

    info!("products: {} rows", buffer.written());
    Ok(pool)
}

/// Generate 1-5 images per product. Returns the image count.
pub async fn generate_product_images(
    product_ids: &[i64],
    batch_size: usize,
    rng: &mut StdRng,
    sink: &mut dyn BatchSink,
) -> Result<u64, PipelineError> {
    let mut buffer = BatchBuffer::new(batch_size);
    let mut image_id = 0i64;

    for &product_id in product_ids {
        let count = *pick_weighted(rng, &[(1, 20), (2, 30), (3, 30), (4, 15), (5, 5)]);
        for slot in 0..count {
            image_id += 1;
            buffer.push(ProductImage {
                image_id,
                product_id,
                image_url: format!(
                    "https://cdn.example.com/products/{}/image_{}.jpg",
                    product_id,
                    slot + 1
                ),
                alt_text: format!("Product {} image {}", product_id, slot + 1),
                is_primary: slot == 0,
                display_order: slot + 1,
            });
        }

        if buffer.is_full() {
            buffer.flush(sink).await?;
        }
    }
    buffer.flush(sink).await?;

    info!("product images: {} rows", buffer.written());
    Ok(buffer.written())
}

/// Generate inventory levels. Each product is stocked in 1 to
/// min(4, warehouse count) distinct warehouses.
pub async fn generate_inventory(
    product_ids: &[i64],
    batch_size: usize,
    now: DateTime<Utc>,
    rng: &mut StdRng,
    sink: &mut dyn BatchSink,
) -> Result<u64, PipelineError> {
    let mut buffer = BatchBuffer::new(batch_size);
    let mut inventory_id = 0i64;
    let today = now.date_naive();

    for &product_id in product_ids {
        let count = rng.gen_range(1..=config::WAREHOUSES.len().min(4));
        for warehouse in config::WAREHOUSES.choose_multiple(rng, count) {
            inventory_id += 1;
            buffer.push(InventoryLevel {
                inventory_id,
                product_id,
                warehouse_code: warehouse.code.to_string(),
                quantity_available: rng.gen_range(0..=500),
                quantity_reserved: rng.gen_range(0..=50),
                reorder_level: rng.gen_range(10..=50),
                last_restocked: provider::date_between(rng, today - Duration::days(180), today),
            });
        }

        if buffer.is_full() {
            buffer.flush(sink).await?;
        }
    }
    buffer.flush(sink).await?;

    info!("inventory: {} rows", buffer.written());
    Ok(buffer.written())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::reference::{generate_brands, generate_categories};
    use crate::sink::MemorySink;
    use rand::SeedableRng;

    async fn product_pool(n: u64, sink: &mut MemorySink) -> ProductPool {
        let mut rng = StdRng::seed_from_u64(42);
        let category_ids = generate_categories(sink).await.unwrap();
        let brand_ids = generate_brands(&mut rng, sink).await.unwrap();
        generate_products(n, &category_ids, &brand_ids, 1000, Utc::now(), &mut rng, sink)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_price_map_matches_rows() {
        let mut sink = MemorySink::new();
        let pool = product_pool(100, &mut sink).await;

        assert_eq!(pool.ids.len(), 100);
        assert_eq!(pool.prices.len(), 100);

        for row in sink.rows("products") {
            let id = row[0].as_int().unwrap();
            let price = row[5].as_float().unwrap();
            assert_eq!(pool.prices[&id], price);
            assert!(price > 0.0);
            // Prices are rounded to cents.
            assert!((price * 100.0 - (price * 100.0).round()).abs() < 1e-6);
        }
    }

    #[tokio::test]
    async fn test_images_first_slot_primary() {
        let mut sink = MemorySink::new();
        let pool = product_pool(20, &mut sink).await;

        let mut rng = StdRng::seed_from_u64(7);
        let written = generate_product_images(&pool.ids, 1000, &mut rng, &mut sink)
            .await
            .unwrap();
        assert_eq!(written as usize, sink.row_count("product_images"));

        for &product_id in &pool.ids {
            let primary: Vec<_> = sink
                .rows("product_images")
                .iter()
                .filter(|r| r[1].as_int() == Some(product_id))
                .filter(|r| r[4] == crate::table::Value::Bool(true))
                .collect();
            assert_eq!(primary.len(), 1, "product {product_id}");
        }
    }

    #[tokio::test]
    async fn test_inventory_warehouses_distinct_per_product() {
        let mut sink = MemorySink::new();
        let pool = product_pool(20, &mut sink).await;

        let mut rng = StdRng::seed_from_u64(7);
        generate_inventory(&pool.ids, 1000, Utc::now(), &mut rng, &mut sink)
            .await
            .unwrap();

        for &product_id in &pool.ids {
            let mut codes: Vec<&str> = sink
                .rows("inventory")
                .iter()
                .filter(|r| r[1].as_int() == Some(product_id))
                .filter_map(|r| r[2].as_text())
                .collect();
            assert!(!codes.is_empty() && codes.len() <= 4);
            let total = codes.len();
            codes.sort_unstable();
            codes.dedup();
            assert_eq!(codes.len(), total, "duplicate warehouse for {product_id}");
        }
    }
}
