//! Field classifier.
//!
//! Renders each field of an entity according to the type tag on its field
//! definition. Exactly one rule applies per tag.

use serde_json::{Value, json};
use tracing::debug;

use drakkar_sdk::types::{
    FieldDefinition, FieldTypeTag, FieldValue, Fieldable, LinkValue, ParagraphType,
};

use super::{FieldMap, FieldRecord, Projector};

/// Bookkeeping fields that are never projected.
pub const EXCLUDED_FIELDS: &[&str] = &[
    "id",
    "uuid",
    "vid",
    "changed",
    "promote",
    "revision_timestamp",
    "revision_log",
    "sticky",
    "path",
    "revision_id",
    "langcode",
    "type",
    "uid",
    "status",
    "created",
    "revision_uid",
    "parent_id",
    "parent_field_name",
    "behavior_settings",
    "default_langcode",
    "revision_default",
    "revision_translation_affected",
    "content_translation_source",
    "content_translation_outdated",
    "content_translation_changed",
];

/// Whether a field is internal bookkeeping.
pub fn is_excluded(field_name: &str) -> bool {
    EXCLUDED_FIELDS.contains(&field_name)
}

impl Projector<'_> {
    /// Classify every non-excluded field of `entity`, in definition order.
    ///
    /// A reference-with-revisions field that holds a hero paragraph is left
    /// out entirely: hero content is projected once, at the page level.
    pub fn classify(&self, entity: &dyn Fieldable, definitions: &[FieldDefinition]) -> FieldMap {
        let mut fields = FieldMap::default();

        for definition in definitions {
            if is_excluded(&definition.field_name) {
                continue;
            }

            let value = entity.field(&definition.field_name);
            let value = value.as_deref();

            let record = match &definition.field_type {
                FieldTypeTag::EntityReferenceRevisions => {
                    let paragraphs = value.map(FieldValue::paragraphs).unwrap_or_default();
                    if paragraphs
                        .iter()
                        .any(|p| p.paragraph_type() == Some(ParagraphType::Hero))
                    {
                        debug!(
                            bundle = entity.bundle(),
                            field = %definition.field_name,
                            "skipping field holding a hero paragraph"
                        );
                        continue;
                    }

                    let kind = paragraphs
                        .last()
                        .map(|p| p.bundle.clone())
                        .unwrap_or_else(|| definition.field_type.to_string());
                    let content = paragraphs.iter().map(|p| self.project_nested(p)).collect();
                    FieldRecord {
                        label: definition.label.clone(),
                        kind,
                        content: Value::Array(content),
                    }
                }
                tag => FieldRecord {
                    label: definition.label.clone(),
                    kind: tag.to_string(),
                    content: self.classify_value(tag, value),
                },
            };

            fields.push(definition.field_name.clone(), record);
        }

        fields
    }

    /// Render a non-paragraph field value for its declared type.
    fn classify_value(&self, tag: &FieldTypeTag, value: Option<&FieldValue>) -> Value {
        match tag {
            FieldTypeTag::EntityReferenceRevisions => Value::Array(Vec::new()),
            FieldTypeTag::EntityReference => value
                .map(FieldValue::references)
                .unwrap_or_default()
                .iter()
                .filter_map(|reference| {
                    let name = self.store().entity_label(reference)?;
                    Some(json!({ "name": name, "id": reference.target_id }))
                })
                .collect(),
            FieldTypeTag::Link => value
                .and_then(FieldValue::link)
                .map(LinkValue::to_json)
                .unwrap_or(Value::Null),
            FieldTypeTag::Image => value
                .and_then(|v| v.files().first())
                .and_then(|f| self.store().resolve_file_url(f.target_id))
                .map(|url| json!({ "url": url }))
                .unwrap_or_else(|| json!({})),
            FieldTypeTag::TextWithSummary => rich_text(value),
            FieldTypeTag::File
            | FieldTypeTag::ListFloat
            | FieldTypeTag::ListInteger
            | FieldTypeTag::ListString
            | FieldTypeTag::Other(_) => value.map(FieldValue::raw).unwrap_or(Value::Null),
        }
    }
}

/// `{format, summary, value}` with empty-string defaults.
fn rich_text(value: Option<&FieldValue>) -> Value {
    let (format, summary, text) = match value {
        Some(FieldValue::Text(t)) => (
            t.format.clone(),
            t.summary.clone().unwrap_or_default(),
            t.value.clone(),
        ),
        Some(other) => (
            String::new(),
            String::new(),
            other.text().map(|t| t.into_owned()).unwrap_or_default(),
        ),
        None => (String::new(), String::new(), String::new()),
    };
    json!({ "format": format, "summary": summary, "value": text })
}
