//! Core types for the transformation framework

use std::fmt;

use crate::bag::Bag;
use crate::error::Result;

/// A single bidirectional field-level conversion rule.
///
/// `from_model` converts UI-model properties toward the wire format and
/// `to_model` is its semantic inverse for any value not explicitly filtered.
/// Implementations are stateless: their configuration is fixed at
/// construction time, and a single instance may serve any number of
/// concurrent callers.
pub trait Transformation: Send + Sync {
    /// Performs a transformation from model properties to wire properties.
    fn from_model(&self, bag: Bag) -> Result<Bag>;

    /// Performs a transformation from wire properties to model properties.
    fn to_model(&self, bag: Bag) -> Result<Bag>;
}

/// Declared scalar type for a coerced property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Integer,
    Boolean,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::String => write!(f, "string"),
            PropertyType::Integer => write!(f, "integer"),
            PropertyType::Boolean => write!(f, "boolean"),
        }
    }
}

/// Declared shape of a nested-model field.
///
/// The shape is part of the transformation's static configuration rather
/// than discovered from the value at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedShape {
    /// The field holds a single embedded object.
    Single,
    /// The field holds a list of embedded objects.
    List,
}
