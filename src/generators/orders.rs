//! The order pipeline: orders with their line items, then payments and
//! shipments derived from the generated orders.
//!
//! Orders are kept in memory for the whole run because every downstream
//! stage (payments, shipments, coupon usage) derives from the final
//! order set. Rows still reach the sink in batches as they are priced.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;

use crate::batch::BatchBuffer;
use crate::config;
use crate::error::PipelineError;
use crate::generators::products::ProductPool;
use crate::generators::reference::CouponSet;
use crate::model::{
    self, round2, DiscountType, Order, OrderItem, OrderStatus, Payment, PaymentStatus, Shipment,
    ShipmentStatus,
};
use crate::provider;
use crate::sampling::{chance, pick, pick_weighted};
use crate::sink::BatchSink;
use crate::table::TableRecord;

/// Id pools the order generator draws foreign keys from.
pub struct OrderPools<'a> {
    pub customer_ids: &'a [i64],
    /// Address ids are dense 1..=max, so the pool is just the maximum.
    pub max_address_id: i64,
    pub coupons: &'a CouponSet,
    pub products: &'a ProductPool,
}

/// Output of the order stage, consumed by the derived stages.
#[derive(Debug)]
pub struct GeneratedOrders {
    pub orders: Vec<Order>,
    pub orders_written: u64,
    pub items_written: u64,
}

const TAX_RATE: f64 = 0.08;
const COUPON_PROBABILITY: f64 = 0.2;
const ITEM_DISCOUNT_PROBABILITY: f64 = 0.15;

/// Generate `n` orders and their line items.
///
/// Per order: `tax_amount = round2(subtotal * 0.08)` and
/// `total_amount = round2(subtotal - discount_amount + tax_amount + shipping_cost)`.
/// Item ids are global and dense from 1.
pub async fn generate_orders_with_items(
    n: u64,
    pools: &OrderPools<'_>,
    batch_size: usize,
    now: DateTime<Utc>,
    rng: &mut StdRng,
    sink: &mut dyn BatchSink,
) -> Result<GeneratedOrders, PipelineError> {
    if n > 0 {
        if pools.customer_ids.is_empty() {
            return Err(PipelineError::EmptyPool("customer"));
        }
        if pools.max_address_id <= 0 {
            return Err(PipelineError::EmptyPool("address"));
        }
        if pools.products.is_empty() {
            return Err(PipelineError::EmptyPool("product"));
        }
    }

    let mut orders: Vec<Order> = Vec::with_capacity(n as usize);
    let mut flushed = 0usize;
    let mut orders_written = 0u64;
    let mut items = BatchBuffer::new(batch_size);
    let mut order_item_id = 0i64;

    let earliest = now - Duration::days(4 * 365);

    for order_id in 1..=n as i64 {
        let customer_id = *pick(rng, pools.customer_ids);
        let shipping_address_id = rng.gen_range(1..=pools.max_address_id);
        let billing_address_id = rng.gen_range(1..=pools.max_address_id);

        let coupon_id = if !pools.coupons.is_empty() && chance(rng, COUPON_PROBABILITY) {
            Some(*pick(rng, &pools.coupons.ids))
        } else {
            None
        };

        let order_date = provider::datetime_between(rng, earliest, now);
        let status = *pick_weighted(
            rng,
            &[
                (OrderStatus::Pending, 5),
                (OrderStatus::Processing, 10),
                (OrderStatus::Shipped, 15),
                (OrderStatus::Delivered, 60),
                (OrderStatus::Cancelled, 5),
                (OrderStatus::Returned, 5),
            ],
        );
        let shipping_cost = *pick(rng, &[0.0, 4.99, 7.99, 9.99, 14.99]);

        let item_count = *pick_weighted(rng, &[(1, 30), (2, 30), (3, 20), (4, 12), (5, 8)]);
        let mut subtotal_acc = 0.0;
        for _ in 0..item_count {
            let product_id = *pick(rng, &pools.products.ids);
            let quantity = *pick_weighted(rng, &[(1i64, 50), (2, 25), (3, 15), (4, 7), (5, 3)]);
            let unit_price = match pools.products.prices.get(&product_id) {
                Some(&price) => price,
                None => round2(rng.gen_range(10.0..=500.0)),
            };
            let discount = if chance(rng, ITEM_DISCOUNT_PROBABILITY) {
                round2(unit_price * *pick(rng, &[0.05, 0.10, 0.15, 0.20]))
            } else {
                0.0
            };
            let total_price = round2((unit_price - discount) * quantity as f64);
            subtotal_acc += total_price;

            order_item_id += 1;
            items.push(OrderItem {
                order_item_id,
                order_id,
                product_id,
                quantity,
                unit_price,
                discount,
                total_price,
            });
        }
        let subtotal = round2(subtotal_acc);

        // A coupon id with no matching terms grants no discount.
        let discount_amount = match coupon_id.and_then(|id| pools.coupons.terms.get(&id)) {
            Some(terms) => match terms.discount_type {
                DiscountType::Percentage => round2(subtotal * terms.value / 100.0),
                DiscountType::FixedAmount => terms.value.min(subtotal),
            },
            None => 0.0,
        };
        let tax_amount = round2(subtotal * TAX_RATE);
        let total_amount = round2(subtotal - discount_amount + tax_amount + shipping_cost);

        let notes = chance(rng, 0.1).then(|| provider::sentence(rng, 5, 15));

        orders.push(Order {
            order_id,
            customer_id,
            shipping_address_id,
            billing_address_id,
            order_date,
            status,
            subtotal,
            discount_amount,
            tax_amount,
            shipping_cost,
            total_amount,
            coupon_id,
            notes,
        });

        // Orders and items flush together so neither table runs far
        // ahead of the other.
        if orders.len() - flushed >= batch_size {
            let rows = orders[flushed..].iter().map(TableRecord::values).collect();
            orders_written += sink.write_batch(&model::ORDERS, rows).await?;
            flushed = orders.len();
            items.flush(sink).await?;
        }
    }

    if flushed < orders.len() {
        let rows = orders[flushed..].iter().map(TableRecord::values).collect();
        orders_written += sink.write_batch(&model::ORDERS, rows).await?;
    }
    items.flush(sink).await?;

    info!("orders: {} rows", orders_written);
    info!("order items: {} rows", items.written());
    Ok(GeneratedOrders {
        orders,
        orders_written,
        items_written: items.written(),
    })
}

/// Generate one payment per non-pending order.
pub async fn generate_payments(
    orders: &[Order],
    batch_size: usize,
    rng: &mut StdRng,
    sink: &mut dyn BatchSink,
) -> Result<u64, PipelineError> {
    let mut buffer = BatchBuffer::new(batch_size);
    let mut payment_id = 0i64;

    for order in orders {
        if order.status == OrderStatus::Pending {
            continue;
        }

        let status = match order.status {
            OrderStatus::Shipped | OrderStatus::Delivered => PaymentStatus::Completed,
            OrderStatus::Cancelled => {
                *pick(rng, &[PaymentStatus::Refunded, PaymentStatus::Cancelled])
            }
            _ => PaymentStatus::Pending,
        };

        let payment_method = *pick_weighted(rng, config::PAYMENT_METHODS);
        let (card_type, card_last_four) = if payment_method == "credit_card"
            || payment_method == "debit_card"
        {
            (
                Some(pick(rng, config::CARD_TYPES).to_string()),
                Some(rng.gen_range(1000..=9999).to_string()),
            )
        } else {
            (None, None)
        };

        payment_id += 1;
        buffer.push(Payment {
            payment_id,
            order_id: order.order_id,
            payment_method: payment_method.to_string(),
            card_type,
            card_last_four,
            amount: order.total_amount,
            currency: "USD".to_string(),
            status,
            transaction_id: provider::uuid_v4(rng),
            payment_date: order.order_date + Duration::minutes(rng.gen_range(1..=60)),
        });

        if buffer.is_full() {
            buffer.flush(sink).await?;
        }
    }
    buffer.flush(sink).await?;

    info!("payments: {} rows", buffer.written());
    Ok(buffer.written())
}

/// Generate one shipment per shipped or delivered order.
pub async fn generate_shipments(
    orders: &[Order],
    batch_size: usize,
    rng: &mut StdRng,
    sink: &mut dyn BatchSink,
) -> Result<u64, PipelineError> {
    let mut buffer = BatchBuffer::new(batch_size);
    let mut shipment_id = 0i64;

    for order in orders {
        if !order.status.is_shipped() {
            continue;
        }

        let carrier = *pick(rng, config::SHIPPING_CARRIERS);
        let prefix: String = carrier
            .chars()
            .filter(|c| !c.is_whitespace())
            .take(3)
            .collect::<String>()
            .to_uppercase();

        let shipped_date = order.order_date + Duration::days(rng.gen_range(1..=3));
        let estimated_delivery = shipped_date + Duration::days(rng.gen_range(3..=7));
        let (actual_delivery, status) = if order.status == OrderStatus::Delivered {
            (
                Some(shipped_date + Duration::days(rng.gen_range(2..=7))),
                ShipmentStatus::Delivered,
            )
        } else {
            (
                None,
                *pick(rng, &[ShipmentStatus::InTransit, ShipmentStatus::OutForDelivery]),
            )
        };

        shipment_id += 1;
        buffer.push(Shipment {
            shipment_id,
            order_id: order.order_id,
            carrier: carrier.to_string(),
            tracking_number: format!(
                "{}{}",
                prefix,
                rng.gen_range(100_000_000_000u64..=999_999_999_999)
            ),
            shipped_date,
            estimated_delivery,
            actual_delivery,
            status,
            warehouse_code: pick(rng, config::WAREHOUSES).code.to_string(),
        });

        if buffer.is_full() {
            buffer.flush(sink).await?;
        }
    }
    buffer.flush(sink).await?;

    info!("shipments: {} rows", buffer.written());
    Ok(buffer.written())
}
