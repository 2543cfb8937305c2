//! Article reference renderer.

use std::borrow::Cow;

use serde_json::{Value, json};
use tracing::debug;

use drakkar_sdk::types::{ContentNode, EntityRef, FieldValue, Paragraph, ParagraphType};

use crate::projection::{ProjectedRecord, Projector, fields};

/// Teaser cards for the articles referenced by the paragraph.
///
/// References that are not nodes, or whose node cannot be loaded, are
/// skipped.
pub(crate) fn article_reference(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    let store = projector.store();
    let mut items = Vec::new();

    for reference in projector
        .reader(p)
        .references(fields::CONTENT_REFERENCE_TOOLBOX)
    {
        if reference.target_type != EntityRef::NODE {
            continue;
        }
        let Some(node) = store.load_node(reference.target_id) else {
            debug!(node = reference.target_id, "referenced article not found; skipping");
            continue;
        };
        items.push(teaser(projector, &node));
    }

    ProjectedRecord::new(ParagraphType::ArticleReference, Value::Array(items))
}

fn teaser(projector: &Projector<'_>, node: &ContentNode) -> Value {
    let image = node
        .fields
        .get(fields::IMAGE)
        .and_then(|v| v.files().first())
        .and_then(|f| projector.store().resolve_file_url(f.target_id))
        .unwrap_or_default();
    let teaser = node
        .fields
        .get(fields::TEXT)
        .and_then(FieldValue::text)
        .map(Cow::into_owned)
        .unwrap_or_default();

    json!({
        "title": node.title,
        "image": image,
        "teaser": teaser,
    })
}
