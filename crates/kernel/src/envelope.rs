//! Response envelopes for the three node views.
//!
//! Each view projects the same node but wraps the result differently; the
//! dynamic uuid keys rule out fixed response structs.

use std::fmt;

use clap::ValueEnum;
use serde_json::{Map, Value, json};

use drakkar_sdk::types::ContentNode;

use crate::projection::{Projector, fields};

/// Node view served by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NodeView {
    /// Full page: meta, body, hero, and every field.
    #[value(name = "node")]
    Basic,
    /// Article teaser fields keyed by label.
    Article,
    /// Recruitment industry page: hero and every field.
    Recruitment,
}

/// Fields included in the article view, in output order.
const ARTICLE_FIELDS: &[&str] = &[fields::IMAGE, "body", "field_tags"];

impl NodeView {
    /// Human-readable kind used in not-found messages.
    pub fn label(&self) -> &'static str {
        match self {
            NodeView::Basic => "Basic",
            NodeView::Article => "Article",
            NodeView::Recruitment => "Recruitment Industry",
        }
    }

    /// Fields the view reduces the projection to. Empty means all fields.
    pub fn field_filter(&self) -> &'static [&'static str] {
        match self {
            NodeView::Article => ARTICLE_FIELDS,
            NodeView::Basic | NodeView::Recruitment => &[],
        }
    }

    /// Project `node` and wrap it in this view's envelope.
    pub fn render(&self, projector: &Projector<'_>, node: &ContentNode) -> Value {
        let fields = projector.project_node(node, self.field_filter());
        let hero = node.hero();

        match self {
            NodeView::Basic => {
                let (key, hero) = match hero {
                    Some(hero) => (hero.uuid.to_string(), projector.project_hero(hero)),
                    None => (node.uuid.to_string(), Value::Null),
                };
                let mut content = Map::new();
                content.insert("body".to_string(), Value::String(node.body_value().to_string()));
                content.insert(key, json!({ "hero": hero, "fields": fields }));

                json!({
                    "meta": {
                        "pageTitle": node.title,
                        "id": node.id,
                        "created": node.created,
                    },
                    "config": {},
                    "content": content,
                })
            }
            NodeView::Article => keyed(node, fields),
            NodeView::Recruitment => {
                let hero = hero
                    .map(|hero| projector.project_hero(hero))
                    .unwrap_or_else(|| Value::Object(Map::new()));
                keyed(node, json!({ "hero": hero, "content": fields }))
            }
        }
    }
}

impl fmt::Display for NodeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn keyed(node: &ContentNode, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(node.uuid.to_string(), value);
    Value::Object(map)
}
