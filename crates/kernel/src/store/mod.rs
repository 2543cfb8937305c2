//! Content store.
//!
//! The projector never loads anything itself: every lookup of a node, term,
//! file or field definition goes through [`ContentStore`]. Lookups are
//! read-only and answer `None` when the target does not exist, which the
//! projector turns into an empty placeholder.

mod file_url;
mod memory;

pub use file_url::FileUrlGenerator;
pub use memory::MemoryStore;

use drakkar_sdk::types::{ContentNode, EntityKind, EntityRef, FieldDefinition, Term};

/// Read access to stored content.
pub trait ContentStore: Send + Sync {
    /// Load a node by id.
    fn load_node(&self, id: u64) -> Option<ContentNode>;

    /// Load a taxonomy term by id.
    fn load_term(&self, id: u64) -> Option<Term>;

    /// Ordered field definitions of a bundle. Unknown bundles have no fields.
    fn field_definitions(&self, kind: EntityKind, bundle: &str) -> Vec<FieldDefinition>;

    /// Root-relative URL of a managed file.
    fn resolve_file_url(&self, file_id: u64) -> Option<String>;

    /// Display name of a taxonomy term.
    fn resolve_term_name(&self, term_id: u64) -> Option<String> {
        self.load_term(term_id).map(|t| t.name)
    }

    /// URL of the icon image attached to a taxonomy term.
    fn resolve_term_image_url(&self, term_id: u64) -> Option<String> {
        self.load_term(term_id)
            .and_then(|t| t.image)
            .and_then(|f| self.resolve_file_url(f.target_id))
    }

    /// Display label of a referenced entity.
    fn entity_label(&self, reference: &EntityRef) -> Option<String> {
        match reference.target_type.as_str() {
            EntityRef::TERM => self.resolve_term_name(reference.target_id),
            EntityRef::NODE => self.load_node(reference.target_id).map(|n| n.title),
            _ => None,
        }
    }

    /// Number of stored nodes, when the store can tell cheaply.
    fn node_count(&self) -> Option<usize> {
        None
    }
}
