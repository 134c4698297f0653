//! Reference table generators: categories, brands, warehouses, coupons.
//!
//! These sets are small and bounded by configuration, so each is
//! materialized completely and written in a single `write_table` call
//! with no batching.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;

use crate::config;
use crate::error::PipelineError;
use crate::model::{self, Brand, CategoryRecord, Coupon, DiscountType, WarehouseRecord};
use crate::provider;
use crate::sampling::{pick, pick_weighted};
use crate::sink::BatchSink;
use crate::table::TableRecord;

/// Generate one category row per catalog category.
///
/// Returns category name to id, consumed by the product generator.
pub async fn generate_categories(
    sink: &mut dyn BatchSink,
) -> Result<HashMap<&'static str, i64>, PipelineError> {
    let mut ids = HashMap::new();
    let mut records = Vec::with_capacity(config::CATALOG.len());

    for (i, category) in config::CATALOG.iter().enumerate() {
        let category_id = i as i64 + 1;
        ids.insert(category.name, category_id);
        records.push(CategoryRecord {
            category_id,
            category_name: category.name.to_string(),
            parent_category_id: None,
            description: format!("All {} products", category.name.to_lowercase()),
        });
    }

    let rows = records.iter().map(TableRecord::values).collect();
    let written = sink.write_table(&model::CATEGORIES, rows).await?;
    info!("categories: {} rows", written);
    Ok(ids)
}

/// Generate the brand set, deduplicated across categories.
///
/// Returns brand name to id, consumed by the product generator.
pub async fn generate_brands(
    rng: &mut StdRng,
    sink: &mut dyn BatchSink,
) -> Result<HashMap<&'static str, i64>, PipelineError> {
    let mut ids = HashMap::new();
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    let mut brand_id = 1;

    for category in config::CATALOG {
        for &brand_name in category.brands {
            if !seen.insert(brand_name) {
                continue;
            }
            let clean_name: String = brand_name
                .to_lowercase()
                .chars()
                .filter(|c| *c != ' ' && *c != '\'')
                .collect();
            records.push(Brand {
                brand_id,
                brand_name: brand_name.to_string(),
                country_of_origin: pick(rng, config::BRAND_COUNTRIES).to_string(),
                founded_year: rng.gen_range(1850..=2020),
                website: format!("https://www.{clean_name}.com"),
            });
            ids.insert(brand_name, brand_id);
            brand_id += 1;
        }
    }

    let rows = records.iter().map(TableRecord::values).collect();
    let written = sink.write_table(&model::BRANDS, rows).await?;
    info!("brands: {} rows", written);
    Ok(ids)
}

/// Generate one warehouse row per configured location.
pub async fn generate_warehouses(
    rng: &mut StdRng,
    sink: &mut dyn BatchSink,
) -> Result<u64, PipelineError> {
    let records: Vec<WarehouseRecord> = config::WAREHOUSES
        .iter()
        .map(|w| WarehouseRecord {
            warehouse_code: w.code.to_string(),
            warehouse_name: format!("{} Distribution Center", w.city),
            city: w.city.to_string(),
            state: w.state.to_string(),
            country: w.country.to_string(),
            capacity_sqft: rng.gen_range(50_000..=500_000),
            manager_name: provider::full_name(rng),
        })
        .collect();

    let rows = records.iter().map(TableRecord::values).collect();
    let written = sink.write_table(&model::WAREHOUSES, rows).await?;
    info!("warehouses: {} rows", written);
    Ok(written)
}

/// Discount terms of one coupon, used when pricing orders.
#[derive(Debug, Clone, Copy)]
pub struct CouponTerms {
    pub discount_type: DiscountType,
    pub value: f64,
}

/// The generated coupon pool: ids plus a terms lookup.
#[derive(Debug, Clone, Default)]
pub struct CouponSet {
    pub ids: Vec<i64>,
    pub terms: HashMap<i64, CouponTerms>,
}

impl CouponSet {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Generate `n` coupons.
pub async fn generate_coupons(
    n: u64,
    now: DateTime<Utc>,
    rng: &mut StdRng,
    sink: &mut dyn BatchSink,
) -> Result<CouponSet, PipelineError> {
    let mut set = CouponSet::default();
    let mut records = Vec::with_capacity(n as usize);

    for coupon_id in 1..=n as i64 {
        let prefix = *pick(rng, config::COUPON_PREFIXES);
        let discount_type = *pick_weighted(
            rng,
            &[(DiscountType::Percentage, 1), (DiscountType::FixedAmount, 1)],
        );

        let (value, min_order_amount, symbol) = match discount_type {
            DiscountType::Percentage => {
                let value = *pick(rng, &[5i64, 10, 15, 20, 25, 30, 40, 50]);
                let min_order = *pick(rng, &[0i64, 25, 50, 75, 100]);
                (value, min_order as f64, '%')
            }
            DiscountType::FixedAmount => {
                let value = *pick(rng, &[5i64, 10, 15, 20, 25, 50]);
                let multiplier = *pick(rng, &[2i64, 3, 4, 5]);
                (value, (value * multiplier) as f64, '$')
            }
        };

        let start_date = provider::date_between(
            rng,
            (now - Duration::days(2 * 365)).date_naive(),
            (now + Duration::days(30)).date_naive(),
        );

        records.push(Coupon {
            coupon_id,
            coupon_code: format!("{}{}{}", prefix, value, rng.gen_range(100..=999)),
            description: format!("Get {value}{symbol} off your order"),
            discount_type,
            discount_value: value as f64,
            min_order_amount,
            max_uses: *pick(rng, &[None, Some(100), Some(500), Some(1000), Some(5000)]),
            times_used: 0,
            start_date,
            end_date: start_date + Duration::days(rng.gen_range(7..=90)),
            is_active: *pick_weighted(rng, &[(true, 70), (false, 30)]),
        });
        set.ids.push(coupon_id);
        set.terms.insert(
            coupon_id,
            CouponTerms {
                discount_type,
                value: value as f64,
            },
        );
    }

    let rows = records.iter().map(TableRecord::values).collect();
    let written = sink.write_table(&model::COUPONS, rows).await?;
    info!("coupons: {} rows", written);
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use crate::table::Value;
    use rand::SeedableRng;

    #[tokio::test]
    async fn test_categories_cover_catalog() {
        let mut sink = MemorySink::new();
        let ids = generate_categories(&mut sink).await.unwrap();

        assert_eq!(ids.len(), config::CATALOG.len());
        assert_eq!(sink.row_count("categories"), config::CATALOG.len());
        // Ids are assigned 1..=n in catalog order.
        assert_eq!(ids[config::CATALOG[0].name], 1);
    }

    #[tokio::test]
    async fn test_brands_are_deduplicated() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sink = MemorySink::new();
        let ids = generate_brands(&mut rng, &mut sink).await.unwrap();

        // Nike appears in both Clothing and Sports & Outdoors but gets
        // one row and one id.
        assert_eq!(sink.row_count("brands"), ids.len());
        let names: Vec<&str> = sink
            .rows("brands")
            .iter()
            .filter_map(|row| row[1].as_text())
            .collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[tokio::test]
    async fn test_coupon_terms_match_records() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sink = MemorySink::new();
        let set = generate_coupons(50, Utc::now(), &mut rng, &mut sink)
            .await
            .unwrap();

        assert_eq!(set.ids.len(), 50);
        assert_eq!(sink.row_count("coupons"), 50);

        for row in sink.rows("coupons") {
            let id = row[0].as_int().unwrap();
            let terms = &set.terms[&id];
            assert_eq!(row[3], Value::Text(terms.discount_type.as_str().to_string()));
            assert_eq!(row[4], Value::Float(terms.value));
        }
    }

    #[tokio::test]
    async fn test_zero_coupons() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sink = MemorySink::new();
        let set = generate_coupons(0, Utc::now(), &mut rng, &mut sink)
            .await
            .unwrap();

        assert!(set.is_empty());
        assert_eq!(sink.row_count("coupons"), 0);
    }
}
