//! The model trait: typed, UI-facing representations of domain entities
//!
//! Models are plain serde structs with camelCase wire names and per-struct
//! defaults. They are immutable by convention after construction: a resolver
//! builds one from a REST response via [`ModelTransformer::to_model`] and
//! flattens it back into a property bag when the entity is sent outward.
//!
//! [`ModelTransformer::to_model`]: crate::transform::ModelTransformer::to_model

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::bag::Bag;
use crate::error::{Error, Result};

/// A typed, UI-facing representation of a domain entity.
///
/// The default methods round-trip through serde: `to_bag` flattens the model
/// into its camelCase property bag and `from_bag` rebuilds one, applying the
/// struct's field defaults for anything the bag is missing and ignoring keys
/// the model does not declare.
pub trait Model: Serialize + DeserializeOwned + Sized {
    /// Short name used in error reports.
    const NAME: &'static str;

    /// Builds a typed model from a camelCase property bag.
    fn from_bag(bag: Bag) -> Result<Self> {
        serde_json::from_value(Value::Object(bag)).map_err(|err| Error::ModelConstruction {
            model: Self::NAME,
            message: err.to_string(),
            source: Some(err),
        })
    }

    /// Flattens the model into its camelCase property bag.
    fn to_bag(&self) -> Result<Bag> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::ModelConstruction {
                model: Self::NAME,
                message: format!("expected an object, serialized to {other}"),
                source: None,
            }),
        }
    }
}
