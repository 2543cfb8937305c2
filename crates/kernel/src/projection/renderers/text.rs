//! Text renderers and the list-shaped groups built from child paragraphs.

use serde_json::{Value, json};

use drakkar_sdk::types::{Paragraph, ParagraphType};

use crate::projection::{FieldReader, ProjectedRecord, Projector, fields};

pub(crate) fn text_block(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    let r = projector.reader(p);
    ProjectedRecord::new(
        ParagraphType::TextBlock,
        json!({ "text": r.string(fields::WYSIWYG) }),
    )
    .with_style(json!({ "padding": r.string(fields::PADDING) }))
}

/// Build `{type, content: [item, ..]}` from the children in `reference_field`.
fn group(
    projector: &Projector<'_>,
    p: &Paragraph,
    kind: ParagraphType,
    reference_field: &str,
    item: impl Fn(&FieldReader<'_>) -> Value,
) -> ProjectedRecord {
    let items: Vec<Value> = projector
        .reader(p)
        .paragraphs(reference_field)
        .iter()
        .map(|child| item(&projector.reader(child)))
        .collect();
    ProjectedRecord::new(kind, Value::Array(items))
}

pub(crate) fn accordion_group(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    group(
        projector,
        p,
        ParagraphType::AccordionGroup,
        fields::PARA_REFERENCE,
        |r| {
            json!({
                "title": r.string(fields::TEXT),
                "content": r.string(fields::WYSIWYG),
                "numberingText": r.string(fields::NUMBERING_TEXT),
            })
        },
    )
}

pub(crate) fn form(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    group(projector, p, ParagraphType::Form, fields::PARA_REFERENCE, |r| {
        json!({ "form": r.string(fields::TEXT) })
    })
}

pub(crate) fn testimonials_group(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    group(
        projector,
        p,
        ParagraphType::TestimonialsGroup,
        fields::CONTENT_REFERENCE,
        |r| {
            json!({
                "name": r.string(fields::NAME),
                "position": r.string(fields::JOB_POSITION),
                "company": r.string(fields::COMPANY),
                "quote": r.string(fields::QUOTE),
            })
        },
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use drakkar_sdk::types::TextValue;

    use super::*;
    use crate::store::{FileUrlGenerator, MemoryStore};

    fn store() -> MemoryStore {
        MemoryStore::new(FileUrlGenerator::new("http://localhost", "/files").unwrap())
    }

    #[test]
    fn accordion_items_in_order() {
        let store = store();
        let projector = Projector::new(&store);
        let item = |title: &str, n: &str| {
            Paragraph::new("accordion")
                .with_field(fields::TEXT, title)
                .with_field(fields::WYSIWYG, TextValue::html("<p>answer</p>"))
                .with_field(fields::NUMBERING_TEXT, n)
        };
        let p = Paragraph::new("accordion_group")
            .with_field(fields::PARA_REFERENCE, vec![item("First", "01"), item("Second", "02")]);

        let value: Value = accordion_group(&projector, &p).into();
        assert_eq!(
            value,
            json!({
                "type": "accordion_group",
                "content": [
                    {"title": "First", "content": "<p>answer</p>", "numberingText": "01"},
                    {"title": "Second", "content": "<p>answer</p>", "numberingText": "02"}
                ]
            })
        );
    }

    #[test]
    fn empty_groups_have_empty_content() {
        let store = store();
        let projector = Projector::new(&store);
        assert_eq!(
            form(&projector, &Paragraph::new("form")).content,
            json!([])
        );
        assert_eq!(
            testimonials_group(&projector, &Paragraph::new("testimonials_group")).content,
            json!([])
        );
    }

    #[test]
    fn testimonial_fields() {
        let store = store();
        let projector = Projector::new(&store);
        let quote = Paragraph::new("testimonial")
            .with_field(fields::NAME, "Ada")
            .with_field(fields::JOB_POSITION, "Engineer")
            .with_field(fields::QUOTE, "Great team.");
        let p = Paragraph::new("testimonials_group")
            .with_field(fields::CONTENT_REFERENCE, vec![quote]);

        let record = testimonials_group(&projector, &p);
        assert_eq!(
            record.content,
            json!([{"name": "Ada", "position": "Engineer", "company": "", "quote": "Great team."}])
        );
    }

    #[test]
    fn text_block_has_padding_style() {
        let store = store();
        let projector = Projector::new(&store);
        let p = Paragraph::new("text_block").with_field(fields::PADDING, "small");
        let record = text_block(&projector, &p);
        assert_eq!(record.content, json!({"text": ""}));
        assert_eq!(record.style, Some(json!({"padding": "small"})));
    }
}
