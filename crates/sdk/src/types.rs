//! Core content types.
//!
//! A page is a [`ContentNode`] whose fields may hold nested [`Paragraph`]s,
//! which in turn hold their own fields. Every field value is a [`FieldValue`];
//! how a value is projected is decided by the [`FieldTypeTag`] on its
//! [`FieldDefinition`], not by the value itself.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Field holding a node's hero paragraph.
pub const HERO_FIELD: &str = "field_para_reference_hero";

/// Entity kinds that carry their own field definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Node,
    Paragraph,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Paragraph => "paragraph",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scalar value (string, integer, float or boolean).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Convert to a JSON value. Non-finite floats become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Integer(i) => serde_json::Value::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", u8::from(*b)),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A text field value with its format (e.g., "basic_html", "plain_text")
/// and an optional summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextValue {
    pub value: String,
    #[serde(default)]
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl TextValue {
    pub fn new(value: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: format.into(),
            summary: None,
        }
    }

    /// Create plain text value.
    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(value, "plain_text")
    }

    /// Create basic HTML value.
    pub fn html(value: impl Into<String>) -> Self {
        Self::new(value, "basic_html")
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// A link field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkValue {
    pub uri: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub options: serde_json::Map<String, serde_json::Value>,
}

impl LinkValue {
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
            options: serde_json::Map::new(),
        }
    }

    /// The link as a JSON object: `{uri, title, options}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "uri": self.uri,
            "title": self.title,
            "options": self.options,
        })
    }
}

/// A reference to a managed file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRef {
    pub target_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl FileRef {
    pub fn new(target_id: u64) -> Self {
        Self {
            target_id,
            alt: None,
        }
    }
}

/// A reference to another entity (taxonomy term, node, user, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub target_type: String,
    pub target_id: u64,
}

impl EntityRef {
    pub const TERM: &'static str = "taxonomy_term";
    pub const NODE: &'static str = "node";

    pub fn new(target_type: impl Into<String>, target_id: u64) -> Self {
        Self {
            target_type: target_type.into(),
            target_id,
        }
    }

    pub fn term(target_id: u64) -> Self {
        Self::new(Self::TERM, target_id)
    }

    pub fn node(target_id: u64) -> Self {
        Self::new(Self::NODE, target_id)
    }
}

/// A geographic point from a map field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A stored field value.
///
/// Multi-valued kinds hold their items in stored order; an empty list is
/// an empty field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Scalar(Scalar),
    Text(TextValue),
    Link(LinkValue),
    Image(Vec<FileRef>),
    File(Vec<FileRef>),
    List(Vec<Scalar>),
    Reference(Vec<EntityRef>),
    Paragraphs(Vec<Paragraph>),
    Geo(GeoPoint),
}

impl FieldValue {
    /// Whether the field holds no usable value.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(Scalar::String(s)) => s.is_empty(),
            Self::Scalar(_) | Self::Link(_) | Self::Geo(_) => false,
            Self::Text(t) => t.value.is_empty(),
            Self::Image(files) | Self::File(files) => files.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Reference(refs) => refs.is_empty(),
            Self::Paragraphs(paras) => paras.is_empty(),
        }
    }

    /// The primary text of a scalar or text value.
    pub fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(Cow::Borrowed(s.as_str())),
            Self::Scalar(other) => Some(Cow::Owned(other.to_string())),
            Self::Text(t) => Some(Cow::Borrowed(t.value.as_str())),
            Self::List(items) => items.first().map(|s| Cow::Owned(s.to_string())),
            _ => None,
        }
    }

    /// Referenced files of an image or file field.
    pub fn files(&self) -> &[FileRef] {
        match self {
            Self::Image(files) | Self::File(files) => files,
            _ => &[],
        }
    }

    /// Nested paragraphs of a paragraph-reference field.
    pub fn paragraphs(&self) -> &[Paragraph] {
        match self {
            Self::Paragraphs(paras) => paras,
            _ => &[],
        }
    }

    /// Entity references of a reference field.
    pub fn references(&self) -> &[EntityRef] {
        match self {
            Self::Reference(refs) => refs,
            _ => &[],
        }
    }

    pub fn link(&self) -> Option<&LinkValue> {
        match self {
            Self::Link(link) => Some(link),
            _ => None,
        }
    }

    pub fn geo(&self) -> Option<GeoPoint> {
        match self {
            Self::Geo(point) => Some(*point),
            _ => None,
        }
    }

    /// The stored value as raw JSON, without any type-specific shaping.
    pub fn raw(&self) -> serde_json::Value {
        match self {
            Self::Scalar(s) => s.to_json(),
            Self::Text(t) => serde_json::Value::String(t.value.clone()),
            Self::Link(link) => link.to_json(),
            Self::Image(files) | Self::File(files) => files
                .iter()
                .map(|f| serde_json::json!({ "target_id": f.target_id }))
                .collect(),
            Self::List(items) => items.iter().map(Scalar::to_json).collect(),
            Self::Reference(refs) => refs
                .iter()
                .map(|r| serde_json::json!({ "target_id": r.target_id }))
                .collect(),
            Self::Paragraphs(paras) => paras
                .iter()
                .map(|p| serde_json::Value::String(p.uuid.to_string()))
                .collect(),
            Self::Geo(point) => serde_json::json!({ "lat": point.lat, "lng": point.lng }),
        }
    }
}

impl From<Scalar> for FieldValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<TextValue> for FieldValue {
    fn from(value: TextValue) -> Self {
        Self::Text(value)
    }
}

impl From<LinkValue> for FieldValue {
    fn from(value: LinkValue) -> Self {
        Self::Link(value)
    }
}

impl From<GeoPoint> for FieldValue {
    fn from(value: GeoPoint) -> Self {
        Self::Geo(value)
    }
}

impl From<Vec<Paragraph>> for FieldValue {
    fn from(value: Vec<Paragraph>) -> Self {
        Self::Paragraphs(value)
    }
}

/// Known paragraph types. Paragraphs store their type as a raw tag so
/// content with unknown types still loads; the tag is resolved here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParagraphType {
    PageSection,
    Hero,
    Slide,
    TwoColumnsImageAndText,
    AccordionGroup,
    Button,
    Form,
    Gallery,
    IconAndText,
    Image,
    ImageAndTextCta,
    ImageAndTextCtaDrawer,
    InspirationBanner,
    LogoGroup,
    Map,
    TestimonialsGroup,
    TextBlock,
    ArticleReference,
    VectorItem,
    RegionCta,
    Video,
}

impl ParagraphType {
    /// Every known paragraph type.
    pub const ALL: [ParagraphType; 21] = [
        Self::PageSection,
        Self::Hero,
        Self::Slide,
        Self::TwoColumnsImageAndText,
        Self::AccordionGroup,
        Self::Button,
        Self::Form,
        Self::Gallery,
        Self::IconAndText,
        Self::Image,
        Self::ImageAndTextCta,
        Self::ImageAndTextCtaDrawer,
        Self::InspirationBanner,
        Self::LogoGroup,
        Self::Map,
        Self::TestimonialsGroup,
        Self::TextBlock,
        Self::ArticleReference,
        Self::VectorItem,
        Self::RegionCta,
        Self::Video,
    ];

    /// The machine name used in stored content and in projected output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PageSection => "page_section",
            Self::Hero => "hero",
            Self::Slide => "slide",
            Self::TwoColumnsImageAndText => "2_columns_image_and_text",
            Self::AccordionGroup => "accordion_group",
            Self::Button => "button",
            Self::Form => "form",
            Self::Gallery => "gallery",
            Self::IconAndText => "icon_and_text",
            Self::Image => "image",
            Self::ImageAndTextCta => "image_and_text_cta",
            Self::ImageAndTextCtaDrawer => "image_and_text_cta_drawer",
            Self::InspirationBanner => "inspiration_banner",
            Self::LogoGroup => "logo_group",
            Self::Map => "map",
            Self::TestimonialsGroup => "testimonials_group",
            Self::TextBlock => "text_block",
            Self::ArticleReference => "article_reference",
            Self::VectorItem => "vector_item",
            Self::RegionCta => "region_cta",
            Self::Video => "video",
        }
    }

    /// Resolve a machine name. Returns `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for ParagraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to an entity's fields.
pub trait Fieldable {
    /// Entity kind, used to look up field definitions.
    fn kind(&self) -> EntityKind;

    /// Bundle (type tag) of the entity.
    fn bundle(&self) -> &str;

    /// A field's value, or `None` when the field is absent.
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>>;
}

/// A typed content sub-entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub uuid: Uuid,

    /// Paragraph type machine name (e.g., "page_section", "button").
    #[serde(rename = "type")]
    pub bundle: String,

    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
}

impl Paragraph {
    /// Create an empty paragraph with a random UUID.
    pub fn new(bundle: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            bundle: bundle.into(),
            fields: HashMap::new(),
        }
    }

    pub fn with_uuid(mut self, uuid: Uuid) -> Self {
        self.uuid = uuid;
        self
    }

    pub fn with_field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// The known type of this paragraph, if any.
    pub fn paragraph_type(&self) -> Option<ParagraphType> {
        ParagraphType::from_tag(&self.bundle)
    }

    /// A field's value, ignoring empty fields.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).filter(|v| !v.is_empty())
    }
}

impl Fieldable for Paragraph {
    fn kind(&self) -> EntityKind {
        EntityKind::Paragraph
    }

    fn bundle(&self) -> &str {
        &self.bundle
    }

    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        self.fields.get(name).map(Cow::Borrowed)
    }
}

/// A top-level content entity (a page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    pub id: u64,

    pub uuid: Uuid,

    /// Content type machine name (e.g., "page", "article").
    #[serde(rename = "type")]
    pub bundle: String,

    /// Unix timestamp when created.
    #[serde(default)]
    pub created: i64,

    pub title: String,

    #[serde(default)]
    pub body: Option<TextValue>,

    /// Configurable fields. The hero paragraph lives under [`HERO_FIELD`].
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
}

impl ContentNode {
    pub fn new(id: u64, bundle: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            uuid: Uuid::new_v4(),
            bundle: bundle.into(),
            created: 0,
            title: title.into(),
            body: None,
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// The node's hero paragraph, if one is attached.
    pub fn hero(&self) -> Option<&Paragraph> {
        self.fields
            .get(HERO_FIELD)
            .and_then(|v| v.paragraphs().first())
    }

    /// The body text, or an empty string.
    pub fn body_value(&self) -> &str {
        self.body.as_ref().map(|b| b.value.as_str()).unwrap_or("")
    }
}

impl Fieldable for ContentNode {
    fn kind(&self) -> EntityKind {
        EntityKind::Node
    }

    fn bundle(&self) -> &str {
        &self.bundle
    }

    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        match name {
            "title" => Some(Cow::Owned(FieldValue::Scalar(Scalar::String(
                self.title.clone(),
            )))),
            "body" => self.body.clone().map(|b| Cow::Owned(FieldValue::Text(b))),
            _ => self.fields.get(name).map(Cow::Borrowed),
        }
    }
}

/// A taxonomy term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub name: String,
    /// Icon image attached to the term.
    #[serde(default)]
    pub image: Option<FileRef>,
}

/// Declared type of a field. Decides which projection rule applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldTypeTag {
    EntityReferenceRevisions,
    EntityReference,
    Link,
    Image,
    File,
    ListFloat,
    ListInteger,
    ListString,
    TextWithSummary,
    /// Any other field type (string, text_long, boolean, ...).
    Other(String),
}

impl FieldTypeTag {
    pub fn as_str(&self) -> &str {
        match self {
            Self::EntityReferenceRevisions => "entity_reference_revisions",
            Self::EntityReference => "entity_reference",
            Self::Link => "link",
            Self::Image => "image",
            Self::File => "file",
            Self::ListFloat => "list_float",
            Self::ListInteger => "list_integer",
            Self::ListString => "list_string",
            Self::TextWithSummary => "text_with_summary",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for FieldTypeTag {
    fn from(tag: &str) -> Self {
        match tag {
            "entity_reference_revisions" => Self::EntityReferenceRevisions,
            "entity_reference" => Self::EntityReference,
            "link" => Self::Link,
            "image" => Self::Image,
            "file" => Self::File,
            "list_float" => Self::ListFloat,
            "list_integer" => Self::ListInteger,
            "list_string" => Self::ListString,
            "text_with_summary" => Self::TextWithSummary,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldTypeTag {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<FieldTypeTag> for String {
    fn from(tag: FieldTypeTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for FieldTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field definition within a bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub field_name: String,
    pub field_type: FieldTypeTag,
    pub label: String,
}

impl FieldDefinition {
    pub fn new(name: &str, field_type: impl Into<FieldTypeTag>) -> Self {
        Self {
            field_name: name.into(),
            field_type: field_type.into(),
            label: name.into(),
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.into();
        self
    }
}

/// A bundle definition: machine name, label, and ordered fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleDefinition {
    pub machine_name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// A managed file: id and stream-wrapper URI (e.g. `public://hero.jpg`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: u64,
    pub uri: String,
}

/// Bundle definitions grouped by entity kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundleFixtures {
    #[serde(default)]
    pub node: Vec<BundleDefinition>,
    #[serde(default)]
    pub paragraph: Vec<BundleDefinition>,
}

/// A complete content document: everything a store needs to serve projections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentFixtures {
    #[serde(default)]
    pub nodes: Vec<ContentNode>,
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default)]
    pub files: Vec<StoredFile>,
    #[serde(default)]
    pub bundles: BundleFixtures,
}
