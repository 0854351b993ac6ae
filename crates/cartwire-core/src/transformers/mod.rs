//! The per-resource transformer catalog
//!
//! One factory per resource type, mirroring the REST API's schema. Factories
//! that configure nested fields are fallible because nested-field names are
//! validated at construction time.

pub mod orders;
pub mod shared;

pub use orders::{billing_address_transformer, order_transformer, shipping_address_transformer};
pub use shared::meta_data_transformer;
