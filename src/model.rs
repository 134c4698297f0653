//! Record types for every generated table.
//!
//! Each record struct carries the typed row data and maps onto a static
//! [`TableSpec`] via [`TableRecord`]. Monetary fields are `f64` rounded
//! to 2 decimal places at every derivation step; see `round2`.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::table::{Column, ColumnType, TableRecord, TableSpec, Value};

/// Round a monetary amount to 2 decimal places.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Returned => "returned",
        }
    }

    /// Whether the order has been handed to a carrier.
    pub fn is_shipped(self) -> bool {
        matches!(self, OrderStatus::Shipped | OrderStatus::Delivered)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Refunded,
    Cancelled,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentStatus {
    InTransit,
    OutForDelivery,
    Delivered,
}

impl ShipmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ShipmentStatus::InTransit => "in_transit",
            ShipmentStatus::OutForDelivery => "out_for_delivery",
            ShipmentStatus::Delivered => "delivered",
        }
    }
}

/// How a coupon discounts an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountType {
    /// Discount is `value` percent of the order subtotal.
    Percentage,
    /// Discount is `value` dollars, capped at the subtotal.
    FixedAmount,
}

impl DiscountType {
    pub fn as_str(self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::FixedAmount => "fixed_amount",
        }
    }
}

use ColumnType::*;

pub static CATEGORIES: TableSpec = TableSpec {
    name: "categories",
    columns: &[
        Column::new("category_id", BigInt),
        Column::new("category_name", Text),
        Column::new("parent_category_id", BigInt),
        Column::new("description", Text),
    ],
};

#[derive(Debug, Clone)]
pub struct CategoryRecord {
    pub category_id: i64,
    pub category_name: String,
    pub parent_category_id: Option<i64>,
    pub description: String,
}

impl TableRecord for CategoryRecord {
    fn table() -> &'static TableSpec {
        &CATEGORIES
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.category_id.into(),
            self.category_name.clone().into(),
            self.parent_category_id.into(),
            self.description.clone().into(),
        ]
    }
}

pub static BRANDS: TableSpec = TableSpec {
    name: "brands",
    columns: &[
        Column::new("brand_id", BigInt),
        Column::new("brand_name", Text),
        Column::new("country_of_origin", Text),
        Column::new("founded_year", BigInt),
        Column::new("website", Text),
    ],
};

#[derive(Debug, Clone)]
pub struct Brand {
    pub brand_id: i64,
    pub brand_name: String,
    pub country_of_origin: String,
    pub founded_year: i64,
    pub website: String,
}

impl TableRecord for Brand {
    fn table() -> &'static TableSpec {
        &BRANDS
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.brand_id.into(),
            self.brand_name.clone().into(),
            self.country_of_origin.clone().into(),
            self.founded_year.into(),
            self.website.clone().into(),
        ]
    }
}

pub static WAREHOUSES: TableSpec = TableSpec {
    name: "warehouses",
    columns: &[
        Column::new("warehouse_code", Text),
        Column::new("warehouse_name", Text),
        Column::new("city", Text),
        Column::new("state", Text),
        Column::new("country", Text),
        Column::new("capacity_sqft", BigInt),
        Column::new("manager_name", Text),
    ],
};

#[derive(Debug, Clone)]
pub struct WarehouseRecord {
    pub warehouse_code: String,
    pub warehouse_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub capacity_sqft: i64,
    pub manager_name: String,
}

impl TableRecord for WarehouseRecord {
    fn table() -> &'static TableSpec {
        &WAREHOUSES
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.warehouse_code.clone().into(),
            self.warehouse_name.clone().into(),
            self.city.clone().into(),
            self.state.clone().into(),
            self.country.clone().into(),
            self.capacity_sqft.into(),
            self.manager_name.clone().into(),
        ]
    }
}

pub static COUPONS: TableSpec = TableSpec {
    name: "coupons",
    columns: &[
        Column::new("coupon_id", BigInt),
        Column::new("coupon_code", Text),
        Column::new("description", Text),
        Column::new("discount_type", Text),
        Column::new("discount_value", Double),
        Column::new("min_order_amount", Double),
        Column::new("max_uses", BigInt),
        Column::new("times_used", BigInt),
        Column::new("start_date", Date),
        Column::new("end_date", Date),
        Column::new("is_active", Bool),
    ],
};

#[derive(Debug, Clone)]
pub struct Coupon {
    pub coupon_id: i64,
    pub coupon_code: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub min_order_amount: f64,
    pub max_uses: Option<i64>,
    pub times_used: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

impl TableRecord for Coupon {
    fn table() -> &'static TableSpec {
        &COUPONS
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.coupon_id.into(),
            self.coupon_code.clone().into(),
            self.description.clone().into(),
            self.discount_type.as_str().into(),
            self.discount_value.into(),
            self.min_order_amount.into(),
            self.max_uses.into(),
            self.times_used.into(),
            self.start_date.into(),
            self.end_date.into(),
            self.is_active.into(),
        ]
    }
}

pub static CUSTOMERS: TableSpec = TableSpec {
    name: "customers",
    columns: &[
        Column::new("customer_id", BigInt),
        Column::new("first_name", Text),
        Column::new("last_name", Text),
        Column::new("email", Text),
        Column::new("phone", Text),
        Column::new("date_of_birth", Date),
        Column::new("gender", Text),
        Column::new("signup_date", Date),
        Column::new("is_active", Bool),
        Column::new("loyalty_points", BigInt),
        Column::new("preferred_language", Text),
    ],
};

#[derive(Debug, Clone)]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub signup_date: NaiveDate,
    pub is_active: bool,
    pub loyalty_points: i64,
    pub preferred_language: String,
}

impl TableRecord for Customer {
    fn table() -> &'static TableSpec {
        &CUSTOMERS
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.customer_id.into(),
            self.first_name.clone().into(),
            self.last_name.clone().into(),
            self.email.clone().into(),
            self.phone.clone().into(),
            self.date_of_birth.into(),
            self.gender.clone().into(),
            self.signup_date.into(),
            self.is_active.into(),
            self.loyalty_points.into(),
            self.preferred_language.clone().into(),
        ]
    }
}

pub static ADDRESSES: TableSpec = TableSpec {
    name: "addresses",
    columns: &[
        Column::new("address_id", BigInt),
        Column::new("customer_id", BigInt),
        Column::new("address_type", Text),
        Column::new("street_address", Text),
        Column::new("city", Text),
        Column::new("state", Text),
        Column::new("postal_code", Text),
        Column::new("country", Text),
        Column::new("is_default", Bool),
    ],
};

#[derive(Debug, Clone)]
pub struct Address {
    pub address_id: i64,
    pub customer_id: i64,
    pub address_type: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub is_default: bool,
}

impl TableRecord for Address {
    fn table() -> &'static TableSpec {
        &ADDRESSES
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.address_id.into(),
            self.customer_id.into(),
            self.address_type.clone().into(),
            self.street_address.clone().into(),
            self.city.clone().into(),
            self.state.clone().into(),
            self.postal_code.clone().into(),
            self.country.clone().into(),
            self.is_default.into(),
        ]
    }
}

pub static PRODUCTS: TableSpec = TableSpec {
    name: "products",
    columns: &[
        Column::new("product_id", BigInt),
        Column::new("product_name", Text),
        Column::new("category_id", BigInt),
        Column::new("brand_id", BigInt),
        Column::new("description", Text),
        Column::new("price", Double),
        Column::new("cost_price", Double),
        Column::new("sku", Text),
        Column::new("weight_kg", Double),
        Column::new("is_active", Bool),
        Column::new("created_at", Date),
        Column::new("rating_avg", Double),
    ],
};

#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub category_id: i64,
    pub brand_id: i64,
    pub description: String,
    pub price: f64,
    pub cost_price: f64,
    pub sku: String,
    pub weight_kg: f64,
    pub is_active: bool,
    pub created_at: NaiveDate,
    pub rating_avg: f64,
}

impl TableRecord for Product {
    fn table() -> &'static TableSpec {
        &PRODUCTS
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.product_id.into(),
            self.product_name.clone().into(),
            self.category_id.into(),
            self.brand_id.into(),
            self.description.clone().into(),
            self.price.into(),
            self.cost_price.into(),
            self.sku.clone().into(),
            self.weight_kg.into(),
            self.is_active.into(),
            self.created_at.into(),
            self.rating_avg.into(),
        ]
    }
}

pub static PRODUCT_IMAGES: TableSpec = TableSpec {
    name: "product_images",
    columns: &[
        Column::new("image_id", BigInt),
        Column::new("product_id", BigInt),
        Column::new("image_url", Text),
        Column::new("alt_text", Text),
        Column::new("is_primary", Bool),
        Column::new("display_order", BigInt),
    ],
};

#[derive(Debug, Clone)]
pub struct ProductImage {
    pub image_id: i64,
    pub product_id: i64,
    pub image_url: String,
    pub alt_text: String,
    pub is_primary: bool,
    pub display_order: i64,
}

impl TableRecord for ProductImage {
    fn table() -> &'static TableSpec {
        &PRODUCT_IMAGES
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.image_id.into(),
            self.product_id.into(),
            self.image_url.clone().into(),
            self.alt_text.clone().into(),
            self.is_primary.into(),
            self.display_order.into(),
        ]
    }
}

pub static INVENTORY: TableSpec = TableSpec {
    name: "inventory",
    columns: &[
        Column::new("inventory_id", BigInt),
        Column::new("product_id", BigInt),
        Column::new("warehouse_code", Text),
        Column::new("quantity_available", BigInt),
        Column::new("quantity_reserved", BigInt),
        Column::new("reorder_level", BigInt),
        Column::new("last_restocked", Date),
    ],
};

#[derive(Debug, Clone)]
pub struct InventoryLevel {
    pub inventory_id: i64,
    pub product_id: i64,
    pub warehouse_code: String,
    pub quantity_available: i64,
    pub quantity_reserved: i64,
    pub reorder_level: i64,
    pub last_restocked: NaiveDate,
}

impl TableRecord for InventoryLevel {
    fn table() -> &'static TableSpec {
        &INVENTORY
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.inventory_id.into(),
            self.product_id.into(),
            self.warehouse_code.clone().into(),
            self.quantity_available.into(),
            self.quantity_reserved.into(),
            self.reorder_level.into(),
            self.last_restocked.into(),
        ]
    }
}

pub static ORDERS: TableSpec = TableSpec {
    name: "orders",
    columns: &[
        Column::new("order_id", BigInt),
        Column::new("customer_id", BigInt),
        Column::new("shipping_address_id", BigInt),
        Column::new("billing_address_id", BigInt),
        Column::new("order_date", Timestamp),
        Column::new("status", Text),
        Column::new("subtotal", Double),
        Column::new("discount_amount", Double),
        Column::new("tax_amount", Double),
        Column::new("shipping_cost", Double),
        Column::new("total_amount", Double),
        Column::new("coupon_id", BigInt),
        Column::new("notes", Text),
    ],
};

/// An immutable order snapshot.
///
/// Financial invariants, maintained by the order generator:
/// `tax_amount == round2(subtotal * 0.08)` and
/// `total_amount == round2(subtotal - discount_amount + tax_amount + shipping_cost)`.
#[derive(Debug, Clone)]
pub struct Order {
    pub order_id: i64,
    pub customer_id: i64,
    pub shipping_address_id: i64,
    pub billing_address_id: i64,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub shipping_cost: f64,
    pub total_amount: f64,
    pub coupon_id: Option<i64>,
    pub notes: Option<String>,
}

impl TableRecord for Order {
    fn table() -> &'static TableSpec {
        &ORDERS
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.order_id.into(),
            self.customer_id.into(),
            self.shipping_address_id.into(),
            self.billing_address_id.into(),
            self.order_date.into(),
            self.status.as_str().into(),
            self.subtotal.into(),
            self.discount_amount.into(),
            self.tax_amount.into(),
            self.shipping_cost.into(),
            self.total_amount.into(),
            self.coupon_id.into(),
            self.notes.clone().into(),
        ]
    }
}

pub static ORDER_ITEMS: TableSpec = TableSpec {
    name: "order_items",
    columns: &[
        Column::new("order_item_id", BigInt),
        Column::new("order_id", BigInt),
        Column::new("product_id", BigInt),
        Column::new("quantity", BigInt),
        Column::new("unit_price", Double),
        Column::new("discount", Double),
        Column::new("total_price", Double),
    ],
};

/// A line item owned by exactly one order. Item ids are unique across
/// the whole run, not per order.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub order_item_id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub discount: f64,
    pub total_price: f64,
}

impl TableRecord for OrderItem {
    fn table() -> &'static TableSpec {
        &ORDER_ITEMS
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.order_item_id.into(),
            self.order_id.into(),
            self.product_id.into(),
            self.quantity.into(),
            self.unit_price.into(),
            self.discount.into(),
            self.total_price.into(),
        ]
    }
}

pub static PAYMENTS: TableSpec = TableSpec {
    name: "payments",
    columns: &[
        Column::new("payment_id", BigInt),
        Column::new("order_id", BigInt),
        Column::new("payment_method", Text),
        Column::new("card_type", Text),
        Column::new("card_last_four", Text),
        Column::new("amount", Double),
        Column::new("currency", Text),
        Column::new("status", Text),
        Column::new("transaction_id", ColumnType::Uuid),
        Column::new("payment_date", Timestamp),
    ],
};

/// A payment against a non-pending order. `amount` carries the order's
/// `total_amount` verbatim.
#[derive(Debug, Clone)]
pub struct Payment {
    pub payment_id: i64,
    pub order_id: i64,
    pub payment_method: String,
    pub card_type: Option<String>,
    pub card_last_four: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    pub transaction_id: Uuid,
    pub payment_date: DateTime<Utc>,
}

impl TableRecord for Payment {
    fn table() -> &'static TableSpec {
        &PAYMENTS
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.payment_id.into(),
            self.order_id.into(),
            self.payment_method.clone().into(),
            self.card_type.clone().into(),
            self.card_last_four.clone().into(),
            self.amount.into(),
            self.currency.clone().into(),
            self.status.as_str().into(),
            self.transaction_id.into(),
            self.payment_date.into(),
        ]
    }
}

pub static SHIPMENTS: TableSpec = TableSpec {
    name: "shipments",
    columns: &[
        Column::new("shipment_id", BigInt),
        Column::new("order_id", BigInt),
        Column::new("carrier", Text),
        Column::new("tracking_number", Text),
        Column::new("shipped_date", Timestamp),
        Column::new("estimated_delivery", Timestamp),
        Column::new("actual_delivery", Timestamp),
        Column::new("status", Text),
        Column::new("warehouse_code", Text),
    ],
};

#[derive(Debug, Clone)]
pub struct Shipment {
    pub shipment_id: i64,
    pub order_id: i64,
    pub carrier: String,
    pub tracking_number: String,
    pub shipped_date: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
    pub actual_delivery: Option<DateTime<Utc>>,
    pub status: ShipmentStatus,
    pub warehouse_code: String,
}

impl TableRecord for Shipment {
    fn table() -> &'static TableSpec {
        &SHIPMENTS
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.shipment_id.into(),
            self.order_id.into(),
            self.carrier.clone().into(),
            self.tracking_number.clone().into(),
            self.shipped_date.into(),
            self.estimated_delivery.into(),
            self.actual_delivery.into(),
            self.status.as_str().into(),
            self.warehouse_code.clone().into(),
        ]
    }
}

pub static PRODUCT_REVIEWS: TableSpec = TableSpec {
    name: "product_reviews",
    columns: &[
        Column::new("review_id", BigInt),
        Column::new("product_id", BigInt),
        Column::new("customer_id", BigInt),
        Column::new("rating", BigInt),
        Column::new("title", Text),
        Column::new("review_text", Text),
        Column::new("verified_purchase", Bool),
        Column::new("helpful_votes", BigInt),
        Column::new("review_date", Date),
    ],
};

#[derive(Debug, Clone)]
pub struct Review {
    pub review_id: i64,
    pub product_id: i64,
    pub customer_id: i64,
    pub rating: i64,
    pub title: String,
    pub review_text: String,
    pub verified_purchase: bool,
    pub helpful_votes: i64,
    pub review_date: NaiveDate,
}

impl TableRecord for Review {
    fn table() -> &'static TableSpec {
        &PRODUCT_REVIEWS
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.review_id.into(),
            self.product_id.into(),
            self.customer_id.into(),
            self.rating.into(),
            self.title.clone().into(),
            self.review_text.clone().into(),
            self.verified_purchase.into(),
            self.helpful_votes.into(),
            self.review_date.into(),
        ]
    }
}

pub static WISHLISTS: TableSpec = TableSpec {
    name: "wishlists",
    columns: &[
        Column::new("wishlist_id", BigInt),
        Column::new("customer_id", BigInt),
        Column::new("product_id", BigInt),
        Column::new("added_date", Date),
        Column::new("priority", Text),
        Column::new("notes", Text),
    ],
};

#[derive(Debug, Clone)]
pub struct WishlistItem {
    pub wishlist_id: i64,
    pub customer_id: i64,
    pub product_id: i64,
    pub added_date: NaiveDate,
    pub priority: String,
    pub notes: Option<String>,
}

impl TableRecord for WishlistItem {
    fn table() -> &'static TableSpec {
        &WISHLISTS
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.wishlist_id.into(),
            self.customer_id.into(),
            self.product_id.into(),
            self.added_date.into(),
            self.priority.clone().into(),
            self.notes.clone().into(),
        ]
    }
}

pub static COUPON_USAGE: TableSpec = TableSpec {
    name: "coupon_usage",
    columns: &[
        Column::new("usage_id", BigInt),
        Column::new("coupon_id", BigInt),
        Column::new("order_id", BigInt),
        Column::new("customer_id", BigInt),
        Column::new("discount_applied", Double),
        Column::new("used_at", Timestamp),
    ],
};

/// One usage record per coupon-bearing order. `discount_applied` carries
/// the order's `discount_amount` verbatim.
#[derive(Debug, Clone)]
pub struct CouponUsage {
    pub usage_id: i64,
    pub coupon_id: i64,
    pub order_id: i64,
    pub customer_id: i64,
    pub discount_applied: f64,
    pub used_at: DateTime<Utc>,
}

impl TableRecord for CouponUsage {
    fn table() -> &'static TableSpec {
        &COUPON_USAGE
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.usage_id.into(),
            self.coupon_id.into(),
            self.order_id.into(),
            self.customer_id.into(),
            self.discount_applied.into(),
            self.used_at.into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005), 1.0); // 1.005 is 1.00499.. in binary
        assert_eq!(round2(1.015), 1.01);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(10.0), 10.0);
        assert_eq!(round2(4.999), 5.0);
        assert_eq!(round2(0.125), 0.13);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(OrderStatus::Pending.as_str(), "pending");
        assert_eq!(OrderStatus::Returned.as_str(), "returned");
        assert_eq!(PaymentStatus::Refunded.as_str(), "refunded");
        assert_eq!(ShipmentStatus::OutForDelivery.as_str(), "out_for_delivery");
        assert_eq!(DiscountType::FixedAmount.as_str(), "fixed_amount");
    }

    #[test]
    fn test_order_values_match_table_columns() {
        let order = Order {
            order_id: 1,
            customer_id: 2,
            shipping_address_id: 3,
            billing_address_id: 4,
            order_date: Utc::now(),
            status: OrderStatus::Delivered,
            subtotal: 100.0,
            discount_amount: 10.0,
            tax_amount: 8.0,
            shipping_cost: 4.99,
            total_amount: 102.99,
            coupon_id: None,
            notes: None,
        };
        let values = order.values();
        assert_eq!(values.len(), ORDERS.columns.len());
        assert_eq!(values[5], Value::Text("delivered".to_string()));
        assert!(values[11].is_null());
    }

    #[test]
    fn test_is_shipped() {
        assert!(OrderStatus::Shipped.is_shipped());
        assert!(OrderStatus::Delivered.is_shipped());
        assert!(!OrderStatus::Cancelled.is_shipped());
        assert!(!OrderStatus::Pending.is_shipped());
    }
}
