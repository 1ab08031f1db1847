//! Wire types for the remote tabular-data service
//!
//! Matches the Airtable share-view and metadata API payload shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of field-name to value data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Source record id; stripped when writing to the destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "createdTime", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,

    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Payload returned by a share-view GET
#[derive(Debug, Clone, Deserialize)]
pub struct ViewPayload {
    #[serde(default)]
    pub records: Vec<Record>,

    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Field kind inferred from a sampled value
///
/// Serialized to the destination service's field type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(rename = "singleLineText")]
    Text,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "checkbox")]
    Checkbox,
    #[serde(rename = "multipleAttachments")]
    AttachmentList,
}

/// A named field and its inferred kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: FieldKind,
}

/// Inferred table structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schema {
    pub fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Table creation payload for the destination service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSpec {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl TableSpec {
    /// Build a table spec from an inferred schema
    pub fn from_schema(name: impl Into<String>, schema: &Schema) -> Self {
        Self {
            name: name.into(),
            fields: schema.fields.clone(),
        }
    }
}

/// Response from base creation
///
/// Some API versions echo the created tables; `tables` stays empty otherwise
/// and the caller falls back to an explicit table-creation call.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedBase {
    pub id: String,

    #[serde(default)]
    pub tables: Vec<CreatedTable>,
}

/// A table echoed by base creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTable {
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_deserialization() {
        let record: Record = serde_json::from_value(json!({
            "id": "recAbc",
            "createdTime": "2024-05-01T00:00:00.000Z",
            "fields": {"name": "Alice", "age": 30}
        }))
        .unwrap();

        assert_eq!(record.id, Some("recAbc".to_string()));
        assert_eq!(record.fields["name"], json!("Alice"));
        assert_eq!(record.fields["age"], json!(30));
    }

    #[test]
    fn test_record_without_fields() {
        let record: Record = serde_json::from_value(json!({"id": "recAbc"})).unwrap();
        assert!(record.fields.is_empty());
    }

    #[test]
    fn test_field_kind_wire_names() {
        assert_eq!(
            serde_json::to_value(FieldKind::Text).unwrap(),
            json!("singleLineText")
        );
        assert_eq!(
            serde_json::to_value(FieldKind::Number).unwrap(),
            json!("number")
        );
        assert_eq!(
            serde_json::to_value(FieldKind::Checkbox).unwrap(),
            json!("checkbox")
        );
        assert_eq!(
            serde_json::to_value(FieldKind::AttachmentList).unwrap(),
            json!("multipleAttachments")
        );
    }

    #[test]
    fn test_table_spec_serialization() {
        let spec = TableSpec {
            name: "Imported".to_string(),
            fields: vec![FieldDescriptor {
                name: "title".to_string(),
                kind: FieldKind::Text,
            }],
        };

        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({"name": "Imported", "fields": [{"name": "title", "type": "singleLineText"}]})
        );
    }

    #[test]
    fn test_created_base_without_tables() {
        let base: CreatedBase = serde_json::from_value(json!({"id": "appNew"})).unwrap();
        assert_eq!(base.id, "appNew");
        assert!(base.tables.is_empty());
    }
}
