//! Key renaming between UI and wire conventions

use crate::bag::Bag;
use crate::error::Result;

use super::types::Transformation;

/// Renames model property keys to their wire equivalents and back.
///
/// Only keys present in the bag are renamed; absent keys are a no-op and
/// keys outside the rename table pass through untouched.
#[derive(Debug, Clone)]
pub struct KeyChange {
    /// (model key, wire key) pairs, applied in declared order.
    changes: Vec<(String, String)>,
}

impl KeyChange {
    /// Creates a key change from (model key, wire key) pairs.
    pub fn new<I, K, W>(changes: I) -> Self
    where
        I: IntoIterator<Item = (K, W)>,
        K: Into<String>,
        W: Into<String>,
    {
        Self {
            changes: changes
                .into_iter()
                .map(|(model_key, wire_key)| (model_key.into(), wire_key.into()))
                .collect(),
        }
    }

    fn rename(bag: &mut Bag, from: &str, to: &str) {
        if let Some(value) = bag.remove(from) {
            bag.insert(to.to_string(), value);
        }
    }
}

impl Transformation for KeyChange {
    fn from_model(&self, mut bag: Bag) -> Result<Bag> {
        for (model_key, wire_key) in &self.changes {
            Self::rename(&mut bag, model_key, wire_key);
        }
        Ok(bag)
    }

    fn to_model(&self, mut bag: Bag) -> Result<Bag> {
        for (model_key, wire_key) in &self.changes {
            Self::rename(&mut bag, wire_key, model_key);
        }
        Ok(bag)
    }
}
