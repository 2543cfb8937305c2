//! Projected output records.

use serde_json::{Map, Value};

use drakkar_sdk::types::ParagraphType;

/// Output of a paragraph renderer.
///
/// Converts into JSON as `{type, content, style?}`; `style` is left out when
/// the renderer has none.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRecord {
    pub kind: &'static str,
    pub content: Value,
    pub style: Option<Value>,
}

impl ProjectedRecord {
    pub fn new(kind: ParagraphType, content: Value) -> Self {
        Self {
            kind: kind.as_str(),
            content,
            style: None,
        }
    }

    pub fn with_style(mut self, style: Value) -> Self {
        self.style = Some(style);
        self
    }
}

impl From<ProjectedRecord> for Value {
    fn from(record: ProjectedRecord) -> Self {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(record.kind.to_string()));
        map.insert("content".to_string(), record.content);
        if let Some(style) = record.style {
            map.insert("style".to_string(), style);
        }
        Value::Object(map)
    }
}

/// Output of the field classifier for one field: `{label, type, content}`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRecord {
    pub label: String,
    pub kind: String,
    pub content: Value,
}

impl From<FieldRecord> for Value {
    fn from(record: FieldRecord) -> Self {
        let mut map = Map::new();
        map.insert("label".to_string(), Value::String(record.label));
        map.insert("type".to_string(), Value::String(record.kind));
        map.insert("content".to_string(), record.content);
        Value::Object(map)
    }
}

/// Classified fields of one entity, in field-definition order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: Vec<(String, FieldRecord)>,
}

impl FieldMap {
    pub(crate) fn push(&mut self, field_name: String, record: FieldRecord) {
        self.entries.push((field_name, record));
    }

    pub fn get(&self, field_name: &str) -> Option<&FieldRecord> {
        self.entries
            .iter()
            .find(|(name, _)| name == field_name)
            .map(|(_, record)| record)
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.get(field_name).is_some()
    }

    /// Field names in output order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<FieldMap> for Value {
    fn from(fields: FieldMap) -> Self {
        Value::Object(
            fields
                .entries
                .into_iter()
                .map(|(name, record)| (name, Value::from(record)))
                .collect(),
        )
    }
}
