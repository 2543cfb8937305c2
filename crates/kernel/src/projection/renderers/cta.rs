//! Call-to-action renderers: buttons, banners, and linked image lists.

use serde_json::{Value, json};

use drakkar_sdk::types::{Paragraph, ParagraphType};

use crate::projection::{ProjectedRecord, Projector, fields};

pub(crate) fn button(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    let r = projector.reader(p);
    let content = json!({
        "cta": r.link(fields::CTA),
        "position": r.string(fields::POSITION),
    });
    ProjectedRecord::new(ParagraphType::Button, content)
}

/// The image comes from the icon attached to the referenced term.
pub(crate) fn icon_and_text(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    let r = projector.reader(p);
    let content = json!({
        "title": r.string(fields::TEXT),
        "image": { "url": r.term_image_url(fields::TAX_REFERENCE) },
        "subtitle": r.string(fields::SUBTITLE),
    });
    ProjectedRecord::new(ParagraphType::IconAndText, content)
}

/// Style sits inside `content` for this type; front ends read it there.
pub(crate) fn image_and_text_cta(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    let r = projector.reader(p);
    let content = json!({
        "title": r.string(fields::TEXT),
        "subtitle": r.string(fields::SUBTITLE),
        "cta": r.link(fields::CTA),
        "image": r.image(fields::IMAGE_SINGLE),
        "style": {
            "theme": r.string(fields::THEME_CTA),
            "highlightColor": r.color(fields::TAX_REFERENCE),
        },
    });
    ProjectedRecord::new(ParagraphType::ImageAndTextCta, content)
}

pub(crate) fn image_and_text_cta_drawer(
    projector: &Projector<'_>,
    p: &Paragraph,
) -> ProjectedRecord {
    let r = projector.reader(p);
    let content = json!({
        "cta": r.link(fields::CTA),
        "image": r.image(fields::IMAGE_SINGLE),
        "title": r.string(fields::TEXT),
        "links": r.string(fields::WYSIWYG),
        "subtitle": r.string(fields::SUBTITLE),
    });
    let style = json!({ "highlightColor": r.color(fields::TAX_REFERENCE) });
    ProjectedRecord::new(ParagraphType::ImageAndTextCtaDrawer, content).with_style(style)
}

pub(crate) fn inspiration_banner(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    let r = projector.reader(p);
    let content = json!({
        "title": r.string(fields::TEXT),
        "subtitle": r.string(fields::SUBTITLE),
        "image": r.image(fields::IMAGE_SINGLE),
        "cta": r.link(fields::CTA),
    });
    ProjectedRecord::new(ParagraphType::InspirationBanner, content)
}

/// Linked images read from `reference_field`, shared by logo groups,
/// vector items, and region CTAs.
pub(crate) fn vector_items(
    projector: &Projector<'_>,
    p: &Paragraph,
    kind: ParagraphType,
    reference_field: &str,
) -> ProjectedRecord {
    let items: Vec<Value> = projector
        .reader(p)
        .paragraphs(reference_field)
        .iter()
        .map(|child| {
            let r = projector.reader(child);
            json!({
                "cta": r.link(fields::CTA),
                "image": r.image(fields::IMAGE_SINGLE),
            })
        })
        .collect();
    ProjectedRecord::new(kind, Value::Array(items))
}
