//! Hero and slide renderers.

use serde_json::{Map, Value, json};

use drakkar_sdk::types::{Paragraph, ParagraphType};

use crate::projection::{ProjectedRecord, Projector, fields};

/// `{theme, slides}` for a hero paragraph. Non-slide children are ignored.
pub(crate) fn hero_content(projector: &Projector<'_>, hero: &Paragraph) -> Value {
    let r = projector.reader(hero);

    let mut slides = Map::new();
    for child in r.paragraphs(fields::PARA_REFERENCE) {
        if child.paragraph_type() == Some(ParagraphType::Slide) {
            slides.insert(child.uuid.to_string(), slide(projector, child).into());
        }
    }

    json!({
        "theme": r.string(fields::THEME),
        "slides": slides,
    })
}

pub(crate) fn hero(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    ProjectedRecord::new(ParagraphType::Hero, hero_content(projector, p))
}

pub(crate) fn slide(projector: &Projector<'_>, p: &Paragraph) -> ProjectedRecord {
    let r = projector.reader(p);
    let content = json!({
        "title": r.string(fields::WYSIWYG),
        "imageSingle": r.image(fields::IMAGE_SINGLE),
        "cta": r.link(fields::CTA),
    });
    let style = json!({ "highlightColor": r.color(fields::TAX_REFERENCE) });
    ProjectedRecord::new(ParagraphType::Slide, content).with_style(style)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use drakkar_sdk::types::{EntityRef, FieldValue, FileRef, StoredFile, Term, TextValue};

    use super::*;
    use crate::store::{FileUrlGenerator, MemoryStore};

    fn store() -> MemoryStore {
        let mut store =
            MemoryStore::new(FileUrlGenerator::new("http://localhost", "/files").unwrap());
        store.insert_file(StoredFile {
            id: 3,
            uri: "public://slides/one.jpg".to_string(),
        });
        store.insert_term(Term {
            id: 9,
            name: "Orange".to_string(),
            image: None,
        });
        store
    }

    fn slide_with_title(title: &str) -> Paragraph {
        Paragraph::new("slide").with_field(fields::WYSIWYG, TextValue::html(title))
    }

    #[test]
    fn hero_keys_slides_by_uuid_in_order() {
        let store = store();
        let projector = Projector::new(&store);
        let slides = vec![
            slide_with_title("One"),
            slide_with_title("Two"),
            slide_with_title("Three"),
        ];
        let uuids: Vec<String> = slides.iter().map(|s| s.uuid.to_string()).collect();
        let hero = Paragraph::new("hero")
            .with_field(fields::THEME, "dark")
            .with_field(fields::PARA_REFERENCE, slides);

        let content = projector.project_hero(&hero);
        assert_eq!(content["theme"], json!("dark"));

        let slides = content["slides"].as_object().unwrap();
        let keys: Vec<String> = slides.keys().cloned().collect();
        assert_eq!(keys, uuids);
        assert_eq!(slides[&uuids[1]]["content"]["title"], json!("Two"));
        assert_eq!(slides[&uuids[2]]["type"], json!("slide"));
    }

    #[test]
    fn hero_ignores_non_slide_children() {
        let store = store();
        let projector = Projector::new(&store);
        let hero = Paragraph::new("hero").with_field(
            fields::PARA_REFERENCE,
            vec![Paragraph::new("button"), slide_with_title("Only")],
        );

        let content = projector.project_hero(&hero);
        assert_eq!(content["slides"].as_object().unwrap().len(), 1);
    }

    #[test]
    fn slide_renders_image_and_highlight() {
        let store = store();
        let projector = Projector::new(&store);
        let p = slide_with_title("Welcome")
            .with_field(fields::IMAGE_SINGLE, FieldValue::Image(vec![FileRef::new(3)]))
            .with_field(
                fields::TAX_REFERENCE,
                FieldValue::Reference(vec![EntityRef::term(9)]),
            );

        let value: Value = slide(&projector, &p).into();
        assert_eq!(
            value,
            json!({
                "type": "slide",
                "content": {
                    "title": "Welcome",
                    "imageSingle": {"url": "/files/slides/one.jpg"},
                    "cta": ""
                },
                "style": {"highlightColor": {"value": "Orange"}}
            })
        );
    }
}
