//! Cartwire Core - typed commerce models and wire-format transformation
//!
//! This crate converts between the camelCase, typed models a storefront UI
//! works with and the snake_case, loosely-typed property bags a commerce
//! REST API exchanges. The conversion is a pure, synchronous pipeline: an
//! ordered list of transformations applied toward the wire and unwound in
//! reverse on the way back.
//!
//! # Main Components
//!
//! - **Error Handling**: Error types using `thiserror` and `anyhow`
//! - **Property Bags**: Ordered JSON maps in the wire convention
//! - **Models**: serde structs for orders, addresses, line items, metadata
//! - **Transform Framework**: the [`Transformation`] trait, the built-in
//!   transformation kinds, and the [`ModelTransformer`] pipeline
//! - **Transformer Catalog**: per-resource factories such as
//!   [`order_transformer`]
//!
//! # Example
//!
//! ```
//! use cartwire_core::{bag, Order, Result};
//! use cartwire_core::transformers::order_transformer;
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let transformer = order_transformer()?;
//!
//!     // A (trimmed) REST response body.
//!     let response = bag::as_bag(json!({
//!         "id": 93,
//!         "status": "processing",
//!         "discount_total": "0.00",
//!         "line_items": [{ "name": "Mug", "product_id": 11, "quantity": 2 }],
//!     }))
//!     .unwrap();
//!
//!     let order: Order = transformer.to_model(response)?;
//!     assert_eq!(order.line_items[0].product_id, 11);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod bag;
pub mod error;
pub mod model;
pub mod models;
pub mod transform;
pub mod transformers;

// Re-export main types for convenience
pub use bag::Bag;
pub use error::{Error, Result};
pub use model::Model;
pub use models::{
    BillingAddress, MetaData, Order, OrderAddress, OrderCouponLine, OrderFeeLine, OrderItemTax,
    OrderLineItem, OrderRefundLine, OrderShippingLine, OrderStatus, OrderTaxRate, TaxStatus,
};
pub use transform::{
    IgnoreProperties, KeyChange, ModelTransformer, NestedModel, NestedShape, PropertyType,
    PropertyTypes, Transformation,
};
pub use transformers::order_transformer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
