//! Declared-type coercion for scalar properties

use serde_json::{Number, Value};

use crate::bag::Bag;
use crate::error::{Error, Result};

use super::types::{PropertyType, Transformation};

/// Coerces configured properties to their declared scalar types.
///
/// REST payloads are loose about scalars (numeric strings, 0/1 booleans),
/// so the declared type wins on the way in and on the way out: the same
/// coercion is applied in both directions. Null and absent values are left
/// untouched rather than coerced.
#[derive(Debug, Clone)]
pub struct PropertyTypes {
    types: Vec<(String, PropertyType)>,
}

impl PropertyTypes {
    /// Creates a coercion from (property, declared type) pairs.
    pub fn new<I, K>(types: I) -> Self
    where
        I: IntoIterator<Item = (K, PropertyType)>,
        K: Into<String>,
    {
        Self {
            types: types
                .into_iter()
                .map(|(property, declared)| (property.into(), declared))
                .collect(),
        }
    }

    fn coerce(&self, mut bag: Bag) -> Result<Bag> {
        for (property, declared) in &self.types {
            let Some(value) = bag.get(property) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            let coerced = coerce_value(property, *declared, value)?;
            bag.insert(property.clone(), coerced);
        }
        Ok(bag)
    }
}

impl Transformation for PropertyTypes {
    fn from_model(&self, bag: Bag) -> Result<Bag> {
        self.coerce(bag)
    }

    fn to_model(&self, bag: Bag) -> Result<Bag> {
        self.coerce(bag)
    }
}

fn coerce_value(property: &str, declared: PropertyType, value: &Value) -> Result<Value> {
    match declared {
        PropertyType::String => coerce_string(property, value),
        PropertyType::Integer => coerce_integer(property, value),
        PropertyType::Boolean => coerce_boolean(property, value),
    }
}

fn coerce_string(property: &str, value: &Value) -> Result<Value> {
    match value {
        Value::String(_) => Ok(value.clone()),
        Value::Number(number) => Ok(Value::String(number.to_string())),
        Value::Bool(flag) => Ok(Value::String(flag.to_string())),
        _ => Err(coercion_error(property, PropertyType::String, value)),
    }
}

fn coerce_integer(property: &str, value: &Value) -> Result<Value> {
    match value {
        Value::Number(number) => {
            if number.is_i64() || number.is_u64() {
                return Ok(value.clone());
            }
            // Fractional values do not silently truncate.
            match number.as_f64() {
                Some(float)
                    if float.fract() == 0.0
                        && float >= i64::MIN as f64
                        && float <= i64::MAX as f64 =>
                {
                    Ok(Value::Number(Number::from(float as i64)))
                }
                _ => Err(coercion_error(property, PropertyType::Integer, value)),
            }
        }
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map(|number| Value::Number(Number::from(number)))
            .map_err(|_| coercion_error(property, PropertyType::Integer, value)),
        _ => Err(coercion_error(property, PropertyType::Integer, value)),
    }
}

fn coerce_boolean(property: &str, value: &Value) -> Result<Value> {
    match value {
        Value::Bool(_) => Ok(value.clone()),
        Value::String(text) => match text.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(Value::Bool(true)),
            "false" | "no" | "0" | "off" => Ok(Value::Bool(false)),
            _ => Err(coercion_error(property, PropertyType::Boolean, value)),
        },
        _ => Err(coercion_error(property, PropertyType::Boolean, value)),
    }
}

fn coercion_error(property: &str, declared: PropertyType, value: &Value) -> Error {
    Error::TypeCoercion {
        property: property.to_string(),
        expected: declared.to_string(),
        value: value.to_string(),
    }
}
