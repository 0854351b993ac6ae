//! Transformers shared across resource types

use crate::transform::{IgnoreProperties, KeyChange, ModelTransformer};

/// Creates a transformer for a metadata entry.
///
/// The server-assigned `id` is read-only and never sent outward.
pub fn meta_data_transformer() -> ModelTransformer {
    ModelTransformer::new(vec![
        Box::new(IgnoreProperties::new(["id"])),
        Box::new(KeyChange::new([
            ("displayKey", "display_key"),
            ("displayValue", "display_value"),
        ])),
    ])
}
