//! Property bags: the untyped wire representation exchanged with a REST API
//!
//! A bag is an insertion-ordered mapping from field name to JSON value. It is
//! what the REST transport hands us on the way in and what we hand back on the
//! way out; the transformation pipeline converts between bags in the external
//! snake_case convention and bags in the camelCase convention used by the
//! typed models.

use serde_json::{Map, Value};

/// An ordered mapping from field name to JSON value.
pub type Bag = Map<String, Value>;

/// Extracts the object form of a JSON value, if it is one.
///
/// Handy for building bags from `serde_json::json!` literals.
pub fn as_bag(value: Value) -> Option<Bag> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
