//! Page section renderer.
//!
//! A page section is the main container of a page: it carries its own style
//! block and fans out to every other renderer through the dispatcher.

use serde_json::{Map, json};

use drakkar_sdk::types::{Paragraph, ParagraphType};

use crate::projection::{ProjectedRecord, Projector, fields};

/// Render a page section.
///
/// `content.paragraphs` is keyed by child uuid in stored order. Children of
/// unknown type are left out, and so are heroes, which only render at the
/// page level.
pub(crate) fn page_section(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    let r = projector.reader(p);

    let style = json!({
        "sectionTitleStyle": r.string(fields::SECTION_TITLE_STYLE),
        "backgroundColor": r.color(fields::TAX_REFERENCE),
        "bottomPadding": r.string(fields::SECTION_BOTTOM_PADDING),
        "highlightColor": r.color(fields::TAX_REFERENCE_HIGHLIGHT),
        "separators": r.strings(fields::SEPARATOR),
    });

    let mut paragraphs = Map::new();
    for child in r.paragraphs(fields::PARA_REFERENCE) {
        if child.paragraph_type() == Some(ParagraphType::Hero) {
            continue;
        }
        if let Some(record) = projector.dispatch(child) {
            paragraphs.insert(child.uuid.to_string(), record.into());
        }
    }

    let content = json!({
        "anchor": r.string(fields::ANCHOR),
        "title": r.string(fields::TEXT),
        "cta": r.link(fields::CTA),
        "paragraphs": paragraphs,
    });

    ProjectedRecord::new(ParagraphType::PageSection, content).with_style(style)
}
