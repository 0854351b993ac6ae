//! Typed, UI-facing models for commerce resources
//!
//! Every struct here derives serde with camelCase wire names and carries the
//! defaults the REST schema documents. Composition replaces the inheritance
//! the schema implies: a billing address embeds the base address, order items
//! carry their metadata list directly.

pub mod orders;
pub mod shared;

pub use orders::{
    BillingAddress, Order, OrderAddress, OrderCouponLine, OrderFeeLine, OrderItemTax,
    OrderLineItem, OrderRefundLine, OrderShippingLine, OrderStatus, OrderTaxRate, TaxStatus,
};
pub use shared::MetaData;
