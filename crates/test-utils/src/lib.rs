//! Drakkar test utilities.
//!
//! Helpers for integration testing: a content fixtures builder, a demo site
//! that exercises every paragraph type, and JSON assertion helpers.

use drakkar_sdk::types::{
    BundleDefinition, ContentFixtures, ContentNode, EntityKind, EntityRef, FieldDefinition,
    FieldValue, FileRef, GeoPoint, HERO_FIELD, LinkValue, Paragraph, Scalar, StoredFile, Term,
    TextValue,
};
use uuid::Uuid;

/// Create a bundle definition from `(field_name, field_type, label)` triples.
pub fn bundle(machine_name: &str, label: &str, fields: &[(&str, &str, &str)]) -> BundleDefinition {
    BundleDefinition {
        machine_name: machine_name.to_string(),
        label: label.to_string(),
        fields: fields
            .iter()
            .map(|(name, field_type, label)| FieldDefinition::new(name, *field_type).label(label))
            .collect(),
    }
}

/// Create a taxonomy term.
pub fn term(id: u64, name: &str) -> Term {
    Term {
        id,
        name: name.to_string(),
        image: None,
    }
}

/// Create a managed file.
pub fn file(id: u64, uri: &str) -> StoredFile {
    StoredFile {
        id,
        uri: uri.to_string(),
    }
}

/// A paragraph with a fixed uuid, so tests can look it up in keyed output.
pub fn paragraph(bundle: &str, uuid: u128) -> Paragraph {
    Paragraph::new(bundle).with_uuid(Uuid::from_u128(uuid))
}

/// Image field value referencing the given files.
pub fn images(ids: &[u64]) -> FieldValue {
    FieldValue::Image(ids.iter().copied().map(FileRef::new).collect())
}

/// Reference field value pointing at taxonomy terms.
pub fn terms(ids: &[u64]) -> FieldValue {
    FieldValue::Reference(ids.iter().copied().map(EntityRef::term).collect())
}

/// Reference field value pointing at nodes.
pub fn nodes(ids: &[u64]) -> FieldValue {
    FieldValue::Reference(ids.iter().copied().map(EntityRef::node).collect())
}

/// A content fixtures builder.
#[derive(Debug, Clone, Default)]
pub struct FixturesBuilder {
    fixtures: ContentFixtures,
}

impl FixturesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node.
    pub fn with_node(mut self, node: ContentNode) -> Self {
        self.fixtures.nodes.push(node);
        self
    }

    /// Add a taxonomy term.
    pub fn with_term(mut self, term: Term) -> Self {
        self.fixtures.terms.push(term);
        self
    }

    /// Add a managed file.
    pub fn with_file(mut self, file: StoredFile) -> Self {
        self.fixtures.files.push(file);
        self
    }

    /// Add a bundle definition for nodes or paragraphs.
    pub fn with_bundle(mut self, kind: EntityKind, definition: BundleDefinition) -> Self {
        match kind {
            EntityKind::Node => self.fixtures.bundles.node.push(definition),
            EntityKind::Paragraph => self.fixtures.bundles.paragraph.push(definition),
        }
        self
    }

    pub fn build(self) -> ContentFixtures {
        self.fixtures
    }
}

/// Stable ids and uuids used by [`demo_site`].
pub mod demo {
    /// Basic page with a hero and one page section holding every paragraph type.
    pub const PAGE_ID: u64 = 1;
    /// Article with an image, body, and tags.
    pub const ARTICLE_ID: u64 = 2;
    /// Recruitment industry page with a hero.
    pub const RECRUITMENT_ID: u64 = 3;
    /// Page without a hero.
    pub const PLAIN_PAGE_ID: u64 = 4;
    /// An id no fixture uses.
    pub const MISSING_ID: u64 = 999;

    pub const PAGE_UUID: u128 = 0x1000;
    pub const ARTICLE_UUID: u128 = 0x2000;
    pub const RECRUITMENT_UUID: u128 = 0x3000;
    pub const PLAIN_PAGE_UUID: u128 = 0x4000;

    pub const HERO_UUID: u128 = 0x1100;
    pub const SLIDE_UUIDS: [u128; 3] = [0x1101, 0x1102, 0x1103];
    pub const SECTION_UUID: u128 = 0x1200;
    pub const RECRUITMENT_HERO_UUID: u128 = 0x3100;

    pub const NAVY_TERM: u64 = 1;
    pub const GOLD_TERM: u64 = 2;
    pub const ICON_TERM: u64 = 3;
    pub const TAG_TERM: u64 = 10;

    pub const SITE_URL: &str = "http://drakkar.test";
    pub const FILES_PATH: &str = "/sites/default/files";
}

/// A small site covering every paragraph type, field type, and envelope.
///
/// The page section children are listed in [`ParagraphType`] order, followed
/// by one paragraph with an unknown type.
///
/// [`ParagraphType`]: drakkar_sdk::types::ParagraphType
pub fn demo_site() -> ContentFixtures {
    use demo::*;

    let link = |uri: &str, title: &str| LinkValue::new(uri, title);

    let slides: Vec<Paragraph> = SLIDE_UUIDS
        .iter()
        .enumerate()
        .map(|(i, uuid)| {
            paragraph("slide", *uuid)
                .with_field("field_wysiwyg", TextValue::html(format!("<p>Slide {}</p>", i + 1)))
                .with_field("field_image_single", images(&[1]))
                .with_field("field_cta", link("internal:/jobs", "See jobs"))
                .with_field("field_tax_reference", terms(&[GOLD_TERM]))
        })
        .collect();
    let hero = paragraph("hero", HERO_UUID)
        .with_field("field_theme", "dark")
        .with_field("field_para_reference", slides);

    let image_para = |uuid: u128| {
        paragraph("image", uuid)
            .with_field("field_image_single", images(&[2]))
            .with_field("field_image_style", "rounded")
    };
    let text_para = |uuid: u128| {
        paragraph("text_block", uuid)
            .with_field("field_wysiwyg", TextValue::html("<p>We build ships.</p>"))
            .with_field("field_padding", "small")
    };
    let logo = |uuid: u128| {
        paragraph("vector_item", uuid)
            .with_field("field_cta", link("https://partner.test", "Partner"))
            .with_field("field_image_single", images(&[3]))
    };

    let children = vec![
        paragraph("page_section", 0x1201).with_field("field_text", "Nested section"),
        paragraph("hero", 0x1202),
        paragraph("slide", 0x1203).with_field("field_wysiwyg", "Loose slide"),
        paragraph("2_columns_image_and_text", 0x1204)
            .with_field("field_text", "Two columns")
            .with_field("field_column_padding", "wide")
            .with_field("field_para_reference", vec![image_para(0x12041)])
            .with_field("field_para_reference_2", vec![text_para(0x12042)]),
        paragraph("accordion_group", 0x1205).with_field(
            "field_para_reference",
            vec![
                paragraph("accordion", 0x12051)
                    .with_field("field_text", "How do I apply?")
                    .with_field("field_wysiwyg", "<p>Online.</p>")
                    .with_field("field_numbering_text", "01"),
            ],
        ),
        paragraph("button", 0x1206)
            .with_field("field_cta", link("internal:/apply", "Apply"))
            .with_field("field_position", "center"),
        paragraph("form", 0x1207).with_field(
            "field_para_reference",
            vec![paragraph("form_item", 0x12071).with_field("field_text", "contact")],
        ),
        paragraph("gallery", 0x1208).with_field("field_image", images(&[1, 404, 2])),
        paragraph("icon_and_text", 0x1209)
            .with_field("field_text", "Benefits")
            .with_field("field_subtitle", "Full coverage")
            .with_field("field_tax_reference", terms(&[ICON_TERM])),
        image_para(0x120a),
        paragraph("image_and_text_cta", 0x120b)
            .with_field("field_text", "Grow with us")
            .with_field("field_theme_cta", "light")
            .with_field("field_tax_reference", terms(&[NAVY_TERM])),
        paragraph("image_and_text_cta_drawer", 0x120c)
            .with_field("field_text", "Locations")
            .with_field("field_wysiwyg", "<ul><li>North</li></ul>"),
        paragraph("inspiration_banner", 0x120d)
            .with_field("field_text", "Be bold")
            .with_field("field_image_single", images(&[2])),
        paragraph("logo_group", 0x120e)
            .with_field("field_para_reference", vec![logo(0x120e1), logo(0x120e2)]),
        paragraph("map", 0x120f)
            .with_field("field_map", GeoPoint { lat: 45.5, lng: -73.5 })
            .with_field("field_text", "Head office")
            .with_field("field_city", "Montreal")
            .with_field("field_phone", "555-0100"),
        paragraph("testimonials_group", 0x1210).with_field(
            "field_content_reference",
            vec![
                paragraph("testimonial", 0x12101)
                    .with_field("field_name", "Ada")
                    .with_field("field_job_position", "Engineer")
                    .with_field("field_company", "Drakkar")
                    .with_field("field_quote", "Great crew."),
            ],
        ),
        text_para(0x1211),
        paragraph("article_reference", 0x1212)
            .with_field("field_content_reference_toolbox", nodes(&[ARTICLE_ID, MISSING_ID])),
        paragraph("vector_item", 0x1213).with_field("field_para_reference", vec![logo(0x12131)]),
        paragraph("region_cta", 0x1214)
            .with_field("field_para_reference_region", vec![logo(0x12141)]),
        paragraph("video", 0x1215).with_field("field_text", "dQw4w9WgXcQ"),
        paragraph("carousel", 0x1216),
    ];

    let section = paragraph("page_section", SECTION_UUID)
        .with_field("field_anchor", "careers")
        .with_field("field_text", "Open roles")
        .with_field("field_cta", link("internal:/jobs", "All jobs"))
        .with_field("field_section_title_style", "large")
        .with_field("field_section_bottom_padding", "medium")
        .with_field("field_tax_reference", terms(&[NAVY_TERM]))
        .with_field("field_tax_reference_highlight", terms(&[GOLD_TERM]))
        .with_field(
            "field_separator",
            FieldValue::List(vec![Scalar::from("thin"), Scalar::from("thick")]),
        )
        .with_field("field_para_reference", children);

    let mut page = ContentNode::new(PAGE_ID, "page", "Careers")
        .with_field(HERO_FIELD, vec![hero])
        .with_field("field_page_sections", vec![section])
        .with_field("field_link", link("https://drakkar.test/about", "About"))
        .with_field("field_image", images(&[1]));
    page.uuid = Uuid::from_u128(PAGE_UUID);
    page.created = 1_700_000_000;
    page.body = Some(TextValue::html("<p>Join the crew.</p>").with_summary("Join"));

    let mut article = ContentNode::new(ARTICLE_ID, "article", "Hiring news")
        .with_field("field_image", images(&[2]))
        .with_field("field_tags", terms(&[TAG_TERM, 404]))
        .with_field("field_text", "We are hiring.");
    article.uuid = Uuid::from_u128(ARTICLE_UUID);
    article.body = Some(TextValue::html("<p>Story</p>"));

    let recruitment_hero = paragraph("hero", RECRUITMENT_HERO_UUID)
        .with_field("field_theme", "light")
        .with_field(
            "field_para_reference",
            vec![paragraph("slide", 0x3101).with_field("field_wysiwyg", "Retail")],
        );
    let mut recruitment = ContentNode::new(RECRUITMENT_ID, "recruitment_industry", "Retail")
        .with_field(HERO_FIELD, vec![recruitment_hero])
        .with_field(
            "field_content",
            vec![paragraph("text_block", 0x3200).with_field("field_wysiwyg", "Retail jobs")],
        );
    recruitment.uuid = Uuid::from_u128(RECRUITMENT_UUID);

    let mut plain = ContentNode::new(PLAIN_PAGE_ID, "page", "About");
    plain.uuid = Uuid::from_u128(PLAIN_PAGE_UUID);

    let mut icon = term(ICON_TERM, "Shield");
    icon.image = Some(FileRef::new(3));

    let page_fields: &[(&str, &str, &str)] = &[
        ("uuid", "uuid", "UUID"),
        ("title", "string", "Title"),
        ("created", "created", "Authored on"),
        ("body", "text_with_summary", "Body"),
        (HERO_FIELD, "entity_reference_revisions", "Hero"),
        ("field_page_sections", "entity_reference_revisions", "Sections"),
        ("field_link", "link", "Link"),
        ("field_image", "image", "Image"),
    ];

    FixturesBuilder::new()
        .with_node(page)
        .with_node(article)
        .with_node(recruitment)
        .with_node(plain)
        .with_term(term(NAVY_TERM, "Navy"))
        .with_term(term(GOLD_TERM, "Gold"))
        .with_term(icon)
        .with_term(term(TAG_TERM, "Careers"))
        .with_file(file(1, "public://hero/sea.jpg"))
        .with_file(file(2, "public://photos/crew.jpg"))
        .with_file(file(3, "public://icons/shield.svg"))
        .with_bundle(EntityKind::Node, bundle("page", "Basic page", page_fields))
        .with_bundle(
            EntityKind::Node,
            bundle(
                "article",
                "Article",
                &[
                    ("title", "string", "Title"),
                    ("field_image", "image", "Image"),
                    ("body", "text_with_summary", "Body"),
                    ("field_tags", "entity_reference", "Tags"),
                    ("field_text", "string_long", "Teaser"),
                ],
            ),
        )
        .with_bundle(
            EntityKind::Node,
            bundle(
                "recruitment_industry",
                "Recruitment industry",
                &[
                    ("title", "string", "Title"),
                    (HERO_FIELD, "entity_reference_revisions", "Hero"),
                    ("field_content", "entity_reference_revisions", "Content"),
                ],
            ),
        )
        .with_bundle(
            EntityKind::Paragraph,
            bundle(
                "text_block",
                "Text block",
                &[
                    ("field_wysiwyg", "text_long", "Text"),
                    ("field_padding", "list_string", "Padding"),
                ],
            ),
        )
        .build()
}

/// Assertion helpers for JSON content.
pub mod assert {
    use serde_json::Value;

    /// Assert that a JSON value has a specific key.
    pub fn has_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_some(),
            "Expected JSON to have key '{key}', got: {value}"
        );
    }

    /// Assert that a JSON value does not have a specific key.
    pub fn lacks_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_none(),
            "Expected JSON to NOT have key '{key}', got: {value}"
        );
    }

    /// Assert that a JSON object's keys are exactly `expected`, in order.
    pub fn keys_eq(value: &Value, expected: &[&str]) {
        let keys: Vec<&str> = value
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, expected, "key mismatch in: {value}");
    }

    /// Assert that a JSON value equals expected.
    pub fn json_eq(actual: &Value, expected: &Value) {
        assert_eq!(
            actual,
            expected,
            "JSON mismatch:\nactual: {}\nexpected: {}",
            serde_json::to_string_pretty(actual).unwrap_or_default(),
            serde_json::to_string_pretty(expected).unwrap_or_default()
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use drakkar_sdk::types::ParagraphType;

    use super::*;

    #[test]
    fn demo_site_covers_every_paragraph_type() {
        let site = demo_site();
        let page = site.nodes.iter().find(|n| n.id == demo::PAGE_ID).unwrap();
        let section = &page.fields["field_page_sections"].paragraphs()[0];
        let children = section.fields["field_para_reference"].paragraphs();

        let kinds: Vec<Option<ParagraphType>> =
            children.iter().map(Paragraph::paragraph_type).collect();
        for kind in ParagraphType::ALL {
            assert!(kinds.contains(&Some(kind)), "missing {kind}");
        }
        assert!(kinds.contains(&None));
    }

    #[test]
    fn builder_sorts_bundles_by_kind() {
        let fixtures = FixturesBuilder::new()
            .with_bundle(EntityKind::Node, bundle("page", "Page", &[]))
            .with_bundle(EntityKind::Paragraph, bundle("button", "Button", &[]))
            .build();
        assert_eq!(fixtures.bundles.node.len(), 1);
        assert_eq!(fixtures.bundles.paragraph[0].machine_name, "button");
    }
}
