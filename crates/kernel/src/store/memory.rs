//! In-memory content store.
//!
//! Holds a [`ContentFixtures`] document indexed by id. The document is read
//! once at startup (YAML or JSON) and never mutated afterwards, so the store
//! can be shared across request handlers without locking.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use drakkar_sdk::types::{
    BundleDefinition, ContentFixtures, ContentNode, EntityKind, FieldDefinition, StoredFile, Term,
};

use super::{ContentStore, FileUrlGenerator};

/// Maximum fixture file size (32 MB).
const MAX_FIXTURE_FILE_SIZE: u64 = 32 * 1024 * 1024;

/// Content store backed by in-memory maps.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    nodes: HashMap<u64, ContentNode>,
    terms: HashMap<u64, Term>,
    files: HashMap<u64, String>,
    bundles: HashMap<(EntityKind, String), Vec<FieldDefinition>>,
    urls: FileUrlGenerator,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new(urls: FileUrlGenerator) -> Self {
        Self {
            nodes: HashMap::new(),
            terms: HashMap::new(),
            files: HashMap::new(),
            bundles: HashMap::new(),
            urls,
        }
    }

    /// Build a store from a fixture document.
    ///
    /// Later entries with a duplicate id replace earlier ones.
    pub fn from_fixtures(fixtures: ContentFixtures, urls: FileUrlGenerator) -> Self {
        let mut store = Self::new(urls);
        for node in fixtures.nodes {
            store.insert_node(node);
        }
        for term in fixtures.terms {
            store.insert_term(term);
        }
        for file in fixtures.files {
            store.insert_file(file);
        }
        for bundle in fixtures.bundles.node {
            store.define_bundle(EntityKind::Node, bundle);
        }
        for bundle in fixtures.bundles.paragraph {
            store.define_bundle(EntityKind::Paragraph, bundle);
        }
        store
    }

    /// Load a fixture document from disk. `.json` files are parsed as JSON,
    /// everything else as YAML.
    pub fn load(path: &Path, urls: FileUrlGenerator) -> Result<Self> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("failed to stat {}", path.display()))?;
        if metadata.len() > MAX_FIXTURE_FILE_SIZE {
            anyhow::bail!(
                "{} exceeds maximum fixture size of {MAX_FIXTURE_FILE_SIZE} bytes",
                path.display()
            );
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let fixtures = parse_fixtures(&raw, path)?;
        let store = Self::from_fixtures(fixtures, urls);

        info!(
            path = %path.display(),
            nodes = store.nodes.len(),
            terms = store.terms.len(),
            files = store.files.len(),
            bundles = store.bundles.len(),
            "content fixtures loaded"
        );
        Ok(store)
    }

    pub fn insert_node(&mut self, node: ContentNode) {
        let id = node.id;
        if self.nodes.insert(id, node).is_some() {
            warn!(node = id, "duplicate node id in fixtures; keeping the last one");
        }
    }

    pub fn insert_term(&mut self, term: Term) {
        self.terms.insert(term.id, term);
    }

    pub fn insert_file(&mut self, file: StoredFile) {
        self.files.insert(file.id, file.uri);
    }

    pub fn define_bundle(&mut self, kind: EntityKind, bundle: BundleDefinition) {
        self.bundles
            .insert((kind, bundle.machine_name), bundle.fields);
    }
}

fn parse_fixtures(raw: &str, path: &Path) -> Result<ContentFixtures> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(raw).with_context(|| format!("invalid JSON in {}", path.display()))
    } else {
        serde_yml::from_str(raw).with_context(|| format!("invalid YAML in {}", path.display()))
    }
}

impl ContentStore for MemoryStore {
    fn load_node(&self, id: u64) -> Option<ContentNode> {
        self.nodes.get(&id).cloned()
    }

    fn load_term(&self, id: u64) -> Option<Term> {
        self.terms.get(&id).cloned()
    }

    fn field_definitions(&self, kind: EntityKind, bundle: &str) -> Vec<FieldDefinition> {
        self.bundles
            .get(&(kind, bundle.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    fn resolve_file_url(&self, file_id: u64) -> Option<String> {
        self.files
            .get(&file_id)
            .and_then(|uri| self.urls.relative(uri))
    }

    fn node_count(&self) -> Option<usize> {
        Some(self.nodes.len())
    }
}
