//! Markdown renderer — one summary table per query.

use crate::model::Document;
use crate::render::Renderer;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> String {
        format!(
            "# FRED Search Results: {}\n\n{}",
            doc.query,
            render_query_section(doc)
        )
    }

    fn render_consolidated(&self, docs: &[Document]) -> String {
        let mut sections = vec!["# FRED Search Results".to_string()];
        for doc in docs {
            sections.push(render_query_section(doc));
        }
        sections.join("\n")
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render one query's section: heading, result count, and either a
/// placeholder or a six-column table.
fn render_query_section(doc: &Document) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("## {}", doc.query));
    lines.push(format!("Total results: {}", doc.results.len()));
    lines.push(String::new());

    if doc.results.is_empty() {
        lines.push("_No series found._".to_string());
        lines.push(String::new());
        return lines.join("\n");
    }

    lines.push("| ID | Title | Frequency | Units | Last Updated | Notes |".to_string());
    lines.push("| --- | --- | --- | --- | --- | --- |".to_string());

    for series in &doc.results {
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} |",
            escape_pipes(&series.series_id),
            escape_pipes(&series.title),
            escape_pipes(&series.frequency),
            escape_pipes(&series.units),
            escape_pipes(&series.last_updated),
            escape_pipes(&series.notes),
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Escape pipe characters so free-text cells don't break the table.
fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}
