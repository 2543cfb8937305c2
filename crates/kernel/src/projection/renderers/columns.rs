//! Two-column image and text renderer.

use serde_json::{Value, json};

use drakkar_sdk::types::{Paragraph, ParagraphType};

use super::{image, text_block};
use crate::projection::{ProjectedRecord, Projector, fields};

/// Columns only hold image and text block paragraphs; anything else is dropped.
fn column(projector: &Projector<'_>, children: &[Paragraph]) -> Vec<Value> {
    children
        .iter()
        .filter_map(|child| match child.paragraph_type() {
            Some(ParagraphType::Image) => Some(image(projector, child)),
            Some(ParagraphType::TextBlock) => Some(text_block(projector, child)),
            _ => None,
        })
        .map(Value::from)
        .collect()
}

pub(crate) fn two_columns(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    let r = projector.reader(p);
    let content = json!({
        "title": r.string(fields::TEXT),
        "columnOne": column(projector, r.paragraphs(fields::PARA_REFERENCE)),
        "columnTwo": column(projector, r.paragraphs(fields::PARA_REFERENCE_2)),
    });
    ProjectedRecord::new(ParagraphType::TwoColumnsImageAndText, content)
        .with_style(Value::String(r.string(fields::COLUMN_PADDING)))
}
