//! Dropping write-protected properties from outbound payloads

use crate::bag::Bag;
use crate::error::Result;

use super::types::Transformation;

/// Deletes configured properties before the bag is sent outward.
///
/// Server-generated fields (timestamps, computed totals) must not appear in
/// request bodies. The deletion only applies in the `from_model` direction;
/// `to_model` leaves the bag untouched. Absent keys are a no-op.
#[derive(Debug, Clone)]
pub struct IgnoreProperties {
    properties: Vec<String>,
}

impl IgnoreProperties {
    /// Creates an ignore rule for the given property names.
    pub fn new<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }
}

impl Transformation for IgnoreProperties {
    fn from_model(&self, mut bag: Bag) -> Result<Bag> {
        for property in &self.properties {
            bag.remove(property);
        }
        Ok(bag)
    }

    fn to_model(&self, bag: Bag) -> Result<Bag> {
        Ok(bag)
    }
}
