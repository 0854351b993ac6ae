//! Bidirectional property transformation between UI models and wire payloads
//!
//! REST APIs speak snake_case property bags with loosely-typed scalars; the
//! UI-facing models speak camelCase with declared types and defaults. This
//! module provides the pipeline that converts between the two: an ordered
//! list of [`Transformation`]s composed into a [`ModelTransformer`], applied
//! in declared order toward the wire and in reverse declared order back.
//!
//! # Module Organization
//!
//! - [`types`] - The transformation trait and shared configuration enums
//! - [`transformer`] - The ordered pipeline
//! - [`key_change`] - Key renaming between UI and wire conventions
//! - [`property_type`] - Declared-type coercion for scalar properties
//! - [`ignore`] - Dropping write-protected properties from outbound payloads
//! - [`nested`] - Delegating an embedded object or list to another transformer
//!
//! # Example
//!
//! ```
//! use cartwire_core::transform::{KeyChange, ModelTransformer, PropertyType, PropertyTypes};
//! use cartwire_core::bag;
//! use serde_json::json;
//!
//! let transformer = ModelTransformer::new(vec![
//!     Box::new(PropertyTypes::new([("customerId", PropertyType::Integer)])),
//!     Box::new(KeyChange::new([("customerId", "customer_id")])),
//! ]);
//!
//! let properties = bag::as_bag(json!({ "customerId": "12" })).unwrap();
//! let wire = transformer.from_model(properties).unwrap();
//! assert_eq!(wire["customer_id"], json!(12));
//! ```

pub mod ignore;
pub mod key_change;
pub mod nested;
pub mod property_type;
pub mod transformer;
pub mod types;


// Re-export main public types for convenience
pub use ignore::IgnoreProperties;
pub use key_change::KeyChange;
pub use nested::NestedModel;
pub use property_type::PropertyTypes;
pub use transformer::ModelTransformer;
pub use types::{NestedShape, PropertyType, Transformation};
