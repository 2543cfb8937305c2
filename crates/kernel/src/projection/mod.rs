//! Content projection.
//!
//! Flattens a node and its nested paragraphs into a plain JSON tree for the
//! decoupled front end. Two mutually recursive halves do the work:
//!
//! - the field classifier ([`Projector::classify`]) walks an entity's field
//!   definitions and renders each value according to its declared type;
//! - the paragraph dispatcher ([`Projector::dispatch`]) routes a paragraph to
//!   the shape renderer for its type.
//!
//! Projection is total over well-formed input: missing files, terms, or
//! referenced nodes degrade to empty placeholders and unknown paragraph types
//! are left out. Nothing is cached or mutated between calls.

mod classify;
mod dispatch;
mod reader;
mod record;
mod renderers;

pub use classify::{EXCLUDED_FIELDS, is_excluded};
pub use reader::{FieldReader, fields};
pub use record::{FieldMap, FieldRecord, ProjectedRecord};

use serde_json::{Map, Value, json};
use tracing::debug;

use drakkar_sdk::types::{ContentNode, EntityKind, Paragraph, ParagraphType};

use crate::store::ContentStore;

/// Projects content read from a [`ContentStore`].
///
/// Cheap to construct; create one per request.
#[derive(Clone, Copy)]
pub struct Projector<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> Projector<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a dyn ContentStore {
        self.store
    }

    pub(crate) fn reader<'p>(&self, paragraph: &'p Paragraph) -> FieldReader<'p>
    where
        'a: 'p,
    {
        FieldReader::new(paragraph, self.store)
    }

    /// Project a node's fields.
    ///
    /// With an empty `field_filter` the full field-name-keyed map is
    /// returned. Otherwise the result is a reduced view keyed by each
    /// included field's lower-cased label, holding `{type, content}`; fields
    /// that were not projected (excluded, or holding a hero) are skipped.
    pub fn project_node(&self, node: &ContentNode, field_filter: &[&str]) -> Value {
        let definitions = self.store.field_definitions(EntityKind::Node, &node.bundle);
        let fields = self.classify(node, &definitions);

        if field_filter.is_empty() {
            return fields.into();
        }

        let mut view = Map::new();
        for name in field_filter {
            let Some(record) = fields.get(name) else {
                debug!(node = node.id, field = %name, "filtered field not projected");
                continue;
            };
            view.insert(
                record.label.to_lowercase(),
                json!({ "type": record.kind, "content": record.content }),
            );
        }
        Value::Object(view)
    }

    /// Project a hero paragraph to `{theme, slides}`.
    ///
    /// Only `slide` children are kept, keyed by uuid in stored order.
    pub fn project_hero(&self, hero: &Paragraph) -> Value {
        renderers::hero_content(self, hero)
    }

    /// Project a page section paragraph.
    pub fn project_page_section(&self, paragraph: &Paragraph) -> ProjectedRecord {
        renderers::page_section(self, paragraph)
    }

    /// Render a nested paragraph found in a reference-with-revisions field:
    /// page sections get their dedicated shape, everything else is
    /// classified field by field.
    fn project_nested(&self, paragraph: &Paragraph) -> Value {
        if paragraph.paragraph_type() == Some(ParagraphType::PageSection) {
            return self.project_page_section(paragraph).into();
        }
        let definitions = self
            .store
            .field_definitions(EntityKind::Paragraph, &paragraph.bundle);
        self.classify(paragraph, &definitions).into()
    }
}
