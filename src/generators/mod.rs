//! Entity generators for the e-commerce schema.
//!
//! Stages run in dependency order: reference tables first, then
//! independent entities (customers, addresses, products, images,
//! inventory), then the order pipeline (orders+items, payments,
//! shipments, coupon usage), then reviews and wishlists.

pub mod customers;
pub mod orders;
pub mod products;
pub mod reference;
pub mod reviews;

pub use customers::{generate_addresses, generate_customers};
pub use orders::{
    generate_orders_with_items, generate_payments, generate_shipments, GeneratedOrders, OrderPools,
};
pub use products::{generate_inventory, generate_product_images, generate_products, ProductPool};
pub use reference::{
    generate_brands, generate_categories, generate_coupons, generate_warehouses, CouponSet,
    CouponTerms,
};
pub use reviews::{generate_coupon_usage, generate_reviews, generate_wishlists};
