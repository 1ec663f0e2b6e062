//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::model::Document;
use anyhow::{anyhow, Result};

/// Trait for rendering parsed search results into a specific format.
pub trait Renderer {
    /// Render a single document.
    fn render(&self, doc: &Document) -> String;
    /// Render all documents into one consolidated output, keyed or
    /// sectioned by query label in processing order.
    fn render_consolidated(&self, docs: &[Document]) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}
