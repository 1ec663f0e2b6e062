//! JSON renderer — structured output for downstream tooling.

use serde_json::{json, Map, Value};

use crate::model::Document;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> String {
        pretty(&document_value(doc))
    }

    fn render_consolidated(&self, docs: &[Document]) -> String {
        // Keyed by query label in processing order; a repeated label
        // replaces the earlier value but keeps its position.
        let mut map = Map::new();
        for doc in docs {
            map.insert(doc.query.clone(), document_value(doc));
        }
        pretty(&Value::Object(map))
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn document_value(doc: &Document) -> Value {
    json!({
        "query": &doc.query,
        "result_count": doc.results.len(),
        "results": &doc.results,
    })
}

fn pretty(value: &Value) -> String {
    // Serializing an in-memory Value cannot fail
    let mut out = serde_json::to_string_pretty(value).unwrap_or_default();
    out.push('\n');
    out
}
