//! Parser module — dispatch by file extension.

pub mod search;

use crate::model::Document;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Parse a search-result file into a Document based on its extension.
///
/// The file stem doubles as the fallback query label for documents
/// missing a `Query:` header.
pub fn parse_document(path: &Path, content: &str) -> Result<Document> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("txt") => {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("search");
            Ok(search::parse(content, stem))
        }
        _ => Err(anyhow!("unsupported file type: {}", path.display())),
    }
}
