//! The ordered transformation pipeline

use std::fmt;

use crate::bag::Bag;
use crate::error::Result;
use crate::model::Model;

use super::types::Transformation;

/// An ordered pipeline of transformations for one resource type.
///
/// `from_model` threads the bag through each transformation in declared
/// order; `to_model` runs the list in reverse declared order, a stack-style
/// undo of the forward pipeline, and then constructs the target model from
/// the resulting bag. If any step fails the whole pipeline aborts and
/// surfaces that step's error.
///
/// Transformers hold no per-request state. They are built once per resource
/// type and shared read-only across callers.
pub struct ModelTransformer {
    transformations: Vec<Box<dyn Transformation>>,
}

impl ModelTransformer {
    /// Creates a transformer from an ordered list of transformations.
    pub fn new(transformations: Vec<Box<dyn Transformation>>) -> Self {
        Self { transformations }
    }

    /// Converts model properties into their wire representation.
    pub fn from_model(&self, bag: Bag) -> Result<Bag> {
        log::trace!(
            "from_model: applying {} transformations",
            self.transformations.len()
        );
        self.transformations
            .iter()
            .try_fold(bag, |bag, transformation| transformation.from_model(bag))
    }

    /// Converts wire properties back into a typed model.
    pub fn to_model<M: Model>(&self, bag: Bag) -> Result<M> {
        log::trace!(
            "to_model: applying {} transformations in reverse for {}",
            self.transformations.len(),
            M::NAME
        );
        let bag = self
            .transformations
            .iter()
            .rev()
            .try_fold(bag, |bag, transformation| transformation.to_model(bag))?;
        M::from_bag(bag)
    }

    /// Number of configured transformations.
    pub fn len(&self) -> usize {
        self.transformations.len()
    }

    /// Whether the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.transformations.is_empty()
    }
}

impl fmt::Debug for ModelTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelTransformer")
            .field("transformations", &self.transformations.len())
            .finish()
    }
}
