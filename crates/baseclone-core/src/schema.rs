//! Schema inference from sampled records
//!
//! Field kinds are derived once, from the first record of a fetch, and never
//! revised even when later records disagree. This is a known approximation
//! carried over from the original behavior: the share-view payload exposes
//! no authoritative field metadata, and one representative record keeps the
//! inference cheap and deterministic.

use crate::record::{FieldDescriptor, FieldKind, Record, Schema};
use serde_json::Value;

/// Classify a single field value
///
/// Anything that is not a string, number, boolean, or array (including null
/// and nested objects such as expanded clone results) falls back to text.
pub fn classify(value: &Value) -> FieldKind {
    match value {
        Value::String(_) => FieldKind::Text,
        Value::Number(_) => FieldKind::Number,
        Value::Bool(_) => FieldKind::Checkbox,
        Value::Array(_) => FieldKind::AttachmentList,
        _ => FieldKind::Text,
    }
}

/// Derive a schema from the first record of a sequence
///
/// An empty sequence yields an empty schema, not an error.
pub fn infer_schema(records: &[Record]) -> Schema {
    let fields = records
        .first()
        .map(|record| {
            record
                .fields
                .iter()
                .map(|(name, value)| FieldDescriptor {
                    name: name.clone(),
                    kind: classify(value),
                })
                .collect()
        })
        .unwrap_or_default();

    Schema { fields }
}
