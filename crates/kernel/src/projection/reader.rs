//! Placeholder-aware field access for renderers.
//!
//! Every accessor is total: an absent, empty or mistyped field yields an
//! empty string, an empty object or an empty slice, never an error.

use std::borrow::Cow;

use serde_json::{Value, json};

use drakkar_sdk::types::{EntityRef, FieldValue, GeoPoint, Paragraph};

use crate::store::ContentStore;

/// Machine names of the paragraph fields read by the renderers.
pub mod fields {
    pub const ANCHOR: &str = "field_anchor";
    pub const CITY: &str = "field_city";
    pub const COLUMN_PADDING: &str = "field_column_padding";
    pub const COMPANY: &str = "field_company";
    pub const CONTENT_REFERENCE: &str = "field_content_reference";
    pub const CONTENT_REFERENCE_TOOLBOX: &str = "field_content_reference_toolbox";
    pub const CTA: &str = "field_cta";
    pub const FAX: &str = "field_fax";
    pub const IMAGE: &str = "field_image";
    pub const IMAGE_SINGLE: &str = "field_image_single";
    pub const IMAGE_STYLE: &str = "field_image_style";
    pub const JOB_POSITION: &str = "field_job_position";
    pub const MAP: &str = "field_map";
    pub const NAME: &str = "field_name";
    pub const NUMBERING_TEXT: &str = "field_numbering_text";
    pub const PADDING: &str = "field_padding";
    pub const PARA_REFERENCE: &str = "field_para_reference";
    pub const PARA_REFERENCE_2: &str = "field_para_reference_2";
    pub const PARA_REFERENCE_REGION: &str = "field_para_reference_region";
    pub const PHONE: &str = "field_phone";
    pub const POSITION: &str = "field_position";
    pub const QUOTE: &str = "field_quote";
    pub const SECTION_BOTTOM_PADDING: &str = "field_section_bottom_padding";
    pub const SECTION_TITLE_STYLE: &str = "field_section_title_style";
    pub const SEPARATOR: &str = "field_separator";
    pub const SUBTITLE: &str = "field_subtitle";
    pub const TAX_REFERENCE: &str = "field_tax_reference";
    pub const TAX_REFERENCE_HIGHLIGHT: &str = "field_tax_reference_highlight";
    pub const TEXT: &str = "field_text";
    pub const THEME: &str = "field_theme";
    pub const THEME_CTA: &str = "field_theme_cta";
    pub const TOLL_FREE_NUMBER: &str = "field_toll_free_number";
    pub const WYSIWYG: &str = "field_wysiwyg";
}

/// Reads one paragraph's fields, resolving files and terms through the store.
pub struct FieldReader<'a> {
    paragraph: &'a Paragraph,
    store: &'a dyn ContentStore,
}

impl<'a> FieldReader<'a> {
    pub fn new(paragraph: &'a Paragraph, store: &'a dyn ContentStore) -> Self {
        Self { paragraph, store }
    }

    fn value(&self, name: &str) -> Option<&'a FieldValue> {
        self.paragraph.value(name)
    }

    /// Text of a scalar or rich-text field.
    pub fn string(&self, name: &str) -> String {
        self.value(name)
            .and_then(FieldValue::text)
            .map(Cow::into_owned)
            .unwrap_or_default()
    }

    /// Every item of a multi-valued scalar field, in stored order.
    pub fn strings(&self, name: &str) -> Vec<String> {
        match self.value(name) {
            Some(FieldValue::List(items)) => items.iter().map(ToString::to_string).collect(),
            Some(other) => other.text().map(Cow::into_owned).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// A link as `{uri, title, options}`, or `""`.
    pub fn link(&self, name: &str) -> Value {
        self.value(name)
            .and_then(FieldValue::link)
            .map(|link| link.to_json())
            .unwrap_or_else(|| Value::String(String::new()))
    }

    /// URL of the first file in an image field, or `""`.
    pub fn image_url(&self, name: &str) -> String {
        self.value(name)
            .and_then(|v| v.files().first())
            .and_then(|f| self.store.resolve_file_url(f.target_id))
            .unwrap_or_default()
    }

    /// `{url}` object for the first file in an image field.
    pub fn image(&self, name: &str) -> Value {
        json!({ "url": self.image_url(name) })
    }

    /// URLs of every resolvable file in an image field.
    pub fn image_urls(&self, name: &str) -> Vec<String> {
        self.value(name)
            .map(FieldValue::files)
            .unwrap_or_default()
            .iter()
            .filter_map(|f| self.store.resolve_file_url(f.target_id))
            .collect()
    }

    fn first_reference(&self, name: &str) -> Option<&'a EntityRef> {
        self.value(name).and_then(|v| v.references().first())
    }

    /// Name of the first referenced taxonomy term, or `""`.
    pub fn term_name(&self, name: &str) -> String {
        self.first_reference(name)
            .and_then(|r| self.store.resolve_term_name(r.target_id))
            .unwrap_or_default()
    }

    /// Icon URL of the first referenced taxonomy term, or `""`.
    pub fn term_image_url(&self, name: &str) -> String {
        self.first_reference(name)
            .and_then(|r| self.store.resolve_term_image_url(r.target_id))
            .unwrap_or_default()
    }

    /// A colour block: `{value: <term name>}`.
    pub fn color(&self, name: &str) -> Value {
        json!({ "value": self.term_name(name) })
    }

    /// Nested paragraphs, in stored order.
    pub fn paragraphs(&self, name: &str) -> &'a [Paragraph] {
        self.value(name)
            .map(FieldValue::paragraphs)
            .unwrap_or_default()
    }

    /// Entity references, in stored order.
    pub fn references(&self, name: &str) -> &'a [EntityRef] {
        self.value(name)
            .map(FieldValue::references)
            .unwrap_or_default()
    }

    pub fn geo(&self, name: &str) -> Option<GeoPoint> {
        self.value(name).and_then(FieldValue::geo)
    }
}
