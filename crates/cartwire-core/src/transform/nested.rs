//! Delegating an embedded object or list to another transformer

use std::marker::PhantomData;

use serde_json::Value;

use crate::bag::Bag;
use crate::error::{Error, Result};
use crate::model::Model;

use super::transformer::ModelTransformer;
use super::types::{NestedShape, Transformation};

/// Applies a sub-transformer to a named field holding an embedded object or
/// a list of objects.
///
/// The field's shape is declared up front rather than sniffed from the
/// value. `from_model` runs each element through the sub-transformer's
/// forward pipeline; `to_model` runs the reverse pipeline and additionally
/// constructs a typed `M` per element, so the model's defaults apply and
/// unknown wire fields are shed before the parent model is built. An absent
/// or null field is a no-op in both directions.
#[derive(Debug)]
pub struct NestedModel<M: Model> {
    property: String,
    shape: NestedShape,
    transformer: ModelTransformer,
    _model: PhantomData<fn() -> M>,
}

impl<M: Model> NestedModel<M> {
    /// Creates a nested transformation for the given field.
    ///
    /// The nested field is always named in the UI convention; an underscore
    /// means a wire key slipped into the configuration, which is rejected
    /// here rather than left to misfire at transform time.
    pub fn new(
        property: impl Into<String>,
        shape: NestedShape,
        transformer: ModelTransformer,
    ) -> Result<Self> {
        let property = property.into();
        if property.contains('_') {
            return Err(Error::Configuration {
                message: format!("nested property '{property}' must be camelCase"),
                property: Some(property),
            });
        }
        Ok(Self {
            property,
            shape,
            transformer,
            _model: PhantomData,
        })
    }

    /// Creates a nested transformation for a field holding a single object.
    pub fn single(property: impl Into<String>, transformer: ModelTransformer) -> Result<Self> {
        Self::new(property, NestedShape::Single, transformer)
    }

    /// Creates a nested transformation for a field holding a list of objects.
    pub fn list(property: impl Into<String>, transformer: ModelTransformer) -> Result<Self> {
        Self::new(property, NestedShape::List, transformer)
    }

    /// Removes the field's value when it is present and non-null.
    fn take_present(&self, bag: &mut Bag) -> Option<Value> {
        match bag.get(&self.property) {
            None | Some(Value::Null) => None,
            Some(_) => bag.remove(&self.property),
        }
    }

    /// Runs the reverse pipeline on one element and re-embeds the typed result.
    fn rebuild(&self, value: Value) -> Result<Value> {
        let model: M = self.transformer.to_model(self.expect_object(value)?)?;
        Ok(serde_json::to_value(&model)?)
    }

    fn expect_object(&self, value: Value) -> Result<Bag> {
        match value {
            Value::Object(map) => Ok(map),
            other => Err(self.shape_error("object", &other)),
        }
    }

    fn expect_array(&self, value: Value) -> Result<Vec<Value>> {
        match value {
            Value::Array(items) => Ok(items),
            other => Err(self.shape_error("array", &other)),
        }
    }

    fn shape_error(&self, expected: &str, value: &Value) -> Error {
        Error::TypeCoercion {
            property: self.property.clone(),
            expected: expected.to_string(),
            value: value.to_string(),
        }
    }
}

impl<M: Model> Transformation for NestedModel<M> {
    fn from_model(&self, mut bag: Bag) -> Result<Bag> {
        let Some(value) = self.take_present(&mut bag) else {
            return Ok(bag);
        };
        let converted = match self.shape {
            NestedShape::Single => {
                Value::Object(self.transformer.from_model(self.expect_object(value)?)?)
            }
            NestedShape::List => {
                let items = self.expect_array(value)?;
                let mut converted = Vec::with_capacity(items.len());
                for item in items {
                    let inner = self.transformer.from_model(self.expect_object(item)?)?;
                    converted.push(Value::Object(inner));
                }
                Value::Array(converted)
            }
        };
        bag.insert(self.property.clone(), converted);
        Ok(bag)
    }

    fn to_model(&self, mut bag: Bag) -> Result<Bag> {
        let Some(value) = self.take_present(&mut bag) else {
            return Ok(bag);
        };
        let converted = match self.shape {
            NestedShape::Single => self.rebuild(value)?,
            NestedShape::List => {
                let items = self.expect_array(value)?;
                let mut converted = Vec::with_capacity(items.len());
                for item in items {
                    converted.push(self.rebuild(item)?);
                }
                Value::Array(converted)
            }
        };
        bag.insert(self.property.clone(), converted);
        Ok(bag)
    }
}
