//! Review, wishlist, and coupon usage generators.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;

use crate::batch::BatchBuffer;
use crate::config;
use crate::error::PipelineError;
use crate::model::{self, CouponUsage, Order, Review, WishlistItem};
use crate::provider;
use crate::sampling::{chance, pick, pick_weighted};
use crate::sink::BatchSink;
use crate::table::TableRecord;

/// Generate `n` product reviews with a rating skew toward 4-5 stars.
pub async fn generate_reviews(
    n: u64,
    customer_ids: &[i64],
    product_ids: &[i64],
    batch_size: usize,
    now: DateTime<Utc>,
    rng: &mut StdRng,
    sink: &mut dyn BatchSink,
) -> Result<u64, PipelineError> {
    if n > 0 {
        if customer_ids.is_empty() {
            return Err(PipelineError::EmptyPool("customer"));
        }
        if product_ids.is_empty() {
            return Err(PipelineError::EmptyPool("product"));
        }
    }

    let mut buffer = BatchBuffer::new(batch_size);
    let today = now.date_naive();

    for review_id in 1..=n as i64 {
        let rating = *pick_weighted(rng, &[(1i64, 5), (2, 8), (3, 15), (4, 32), (5, 40)]);
        let phrases = match rating {
            4 | 5 => config::POSITIVE_PHRASES,
            3 => config::NEUTRAL_PHRASES,
            _ => config::NEGATIVE_PHRASES,
        };

        let mut title = provider::sentence(rng, 3, 8);
        if title.ends_with('.') {
            title.pop();
        }

        buffer.push(Review {
            review_id,
            product_id: *pick(rng, product_ids),
            customer_id: *pick(rng, customer_ids),
            rating,
            title,
            review_text: format!("{} {}", pick(rng, phrases), provider::sentence(rng, 5, 15)),
            verified_purchase: chance(rng, 0.8),
            helpful_votes: rng.gen_range(0..=500),
            review_date: provider::date_between(rng, today - Duration::days(3 * 365), today),
        });

        if buffer.is_full() {
            buffer.flush(sink).await?;
        }
    }
    buffer.flush(sink).await?;

    info!("product reviews: {} rows", buffer.written());
    Ok(buffer.written())
}

/// Generate `n` wishlist entries.
pub async fn generate_wishlists(
    n: u64,
    customer_ids: &[i64],
    product_ids: &[i64],
    batch_size: usize,
    now: DateTime<Utc>,
    rng: &mut StdRng,
    sink: &mut dyn BatchSink,
) -> Result<u64, PipelineError> {
    if n > 0 {
        if customer_ids.is_empty() {
            return Err(PipelineError::EmptyPool("customer"));
        }
        if product_ids.is_empty() {
            return Err(PipelineError::EmptyPool("product"));
        }
    }

    let mut buffer = BatchBuffer::new(batch_size);
    let today = now.date_naive();

    for wishlist_id in 1..=n as i64 {
        buffer.push(WishlistItem {
            wishlist_id,
            customer_id: *pick(rng, customer_ids),
            product_id: *pick(rng, product_ids),
            added_date: provider::date_between(rng, today - Duration::days(2 * 365), today),
            priority: pick_weighted(rng, &[("low", 40), ("medium", 40), ("high", 20)]).to_string(),
            notes: chance(rng, 0.2).then(|| provider::sentence(rng, 3, 10)),
        });

        if buffer.is_full() {
            buffer.flush(sink).await?;
        }
    }
    buffer.flush(sink).await?;

    info!("wishlists: {} rows", buffer.written());
    Ok(buffer.written())
}

/// Derive one usage row per coupon-bearing order. Pure derivation, no
/// randomness: `discount_applied` and `used_at` come straight from the
/// order.
pub async fn generate_coupon_usage(
    orders: &[Order],
    sink: &mut dyn BatchSink,
) -> Result<u64, PipelineError> {
    let mut records = Vec::new();
    let mut usage_id = 0i64;

    for order in orders {
        if let Some(coupon_id) = order.coupon_id {
            usage_id += 1;
            records.push(CouponUsage {
                usage_id,
                coupon_id,
                order_id: order.order_id,
                customer_id: order.customer_id,
                discount_applied: order.discount_amount,
                used_at: order.order_date,
            });
        }
    }

    let rows = records.iter().map(TableRecord::values).collect();
    let written = sink.write_table(&model::COUPON_USAGE, rows).await?;
    info!("coupon usage: {} rows", written);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;
    use crate::sink::MemorySink;
    use rand::SeedableRng;

    #[tokio::test]
    async fn test_review_sentiment_follows_rating() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sink = MemorySink::new();
        let customers: Vec<i64> = (1..=10).collect();
        let products: Vec<i64> = (1..=10).collect();

        let written = generate_reviews(200, &customers, &products, 1000, Utc::now(), &mut rng, &mut sink)
            .await
            .unwrap();
        assert_eq!(written, 200);

        for row in sink.rows("product_reviews") {
            let rating = row[3].as_int().unwrap();
            assert!((1..=5).contains(&rating));
            let text = row[4].as_text().unwrap();
            assert!(!text.ends_with('.'), "title keeps no trailing period: {text}");

            let body = row[5].as_text().unwrap();
            let bank = match rating {
                4 | 5 => config::POSITIVE_PHRASES,
                3 => config::NEUTRAL_PHRASES,
                _ => config::NEGATIVE_PHRASES,
            };
            assert!(bank.iter().any(|p| body.starts_with(p)), "{body}");
        }
    }

    #[tokio::test]
    async fn test_reviews_require_pools() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sink = MemorySink::new();

        let err = generate_reviews(5, &[], &[1], 100, Utc::now(), &mut rng, &mut sink)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::EmptyPool("customer")));

        let err = generate_wishlists(5, &[1], &[], 100, Utc::now(), &mut rng, &mut sink)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::EmptyPool("product")));

        // Zero rows is fine with empty pools.
        let written = generate_reviews(0, &[], &[], 100, Utc::now(), &mut rng, &mut sink)
            .await
            .unwrap();
        assert_eq!(written, 0);
    }

    #[tokio::test]
    async fn test_wishlist_priorities() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sink = MemorySink::new();
        let customers: Vec<i64> = (1..=10).collect();
        let products: Vec<i64> = (1..=10).collect();

        generate_wishlists(100, &customers, &products, 1000, Utc::now(), &mut rng, &mut sink)
            .await
            .unwrap();

        for row in sink.rows("wishlists") {
            let priority = row[4].as_text().unwrap();
            assert!(matches!(priority, "low" | "medium" | "high"));
        }
    }

    fn order(order_id: i64, coupon_id: Option<i64>, discount: f64) -> Order {
        Order {
            order_id,
            customer_id: 7,
            shipping_address_id: 1,
            billing_address_id: 1,
            order_date: Utc::now(),
            status: OrderStatus::Delivered,
            subtotal: 100.0,
            discount_amount: discount,
            tax_amount: 8.0,
            shipping_cost: 0.0,
            total_amount: 100.0 - discount + 8.0,
            coupon_id,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_coupon_usage_is_pure_derivation() {
        let mut sink = MemorySink::new();
        let orders = vec![
            order(1, Some(3), 10.0),
            order(2, None, 0.0),
            order(3, Some(5), 25.0),
        ];

        let written = generate_coupon_usage(&orders, &mut sink).await.unwrap();
        assert_eq!(written, 2);

        let rows = sink.rows("coupon_usage");
        assert_eq!(rows[0][0].as_int(), Some(1)); // usage_id
        assert_eq!(rows[0][1].as_int(), Some(3)); // coupon_id
        assert_eq!(rows[0][2].as_int(), Some(1)); // order_id
        assert_eq!(rows[0][4].as_float(), Some(10.0));
        assert_eq!(rows[1][1].as_int(), Some(5));
        assert_eq!(rows[1][4].as_float(), Some(25.0));
    }
}
