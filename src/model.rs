//! Data model for parsed search results — format-agnostic.

use serde::Serialize;

/// Complete parsed result from a single search-result document.
#[derive(Debug, Default)]
pub struct Document {
    /// Label from the `Query:` header line, or the caller's fallback.
    pub query: String,
    /// Series entries in order of appearance. Duplicate ids are kept.
    pub results: Vec<Series>,
}

/// One series entry parsed from a numbered record block.
///
/// The optional fields hold an empty string when the record block never
/// stated them. Field names are the wire names used by the JSON output.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Series {
    pub series_id: String,
    pub title: String,
    pub frequency: String,
    pub units: String,
    pub last_updated: String,
    /// Contiguous notes lines joined with single spaces.
    pub notes: String,
}
