//! FRED search-dump parser — single-pass line scan with lookahead.
//!
//! The exporter writes a short header block (`FRED Series Search
//! Results`, `Query:`, `Timestamp:`, `Total Results:`), then numbered
//! series records with indented metadata lines. Records are usually
//! separated by a blank line, but the lookahead detects boundaries
//! without one. Anything that doesn't fit a known shape is dropped
//! rather than reported; garbage input degrades to fewer records,
//! never an error.

use crate::model::{Document, Series};
use regex::Regex;
use std::sync::LazyLock;

// -- Patterns -----------------------------------------------------------------

// Record start: "1. GDPC1 - Real Gross Domestic Product"
static RE_RECORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+([A-Z0-9]+)\s+-\s+(.+)$").unwrap());

/// Header lines skipped by the main scan.
const SKIP_PREFIXES: &[&str] = &["FRED Series", "Query:", "Timestamp:", "Total Results:"];

/// Notes value the exporter writes when a series has no description.
const NO_DESCRIPTION: &str = "No description available";

/// Number of leading lines checked for the `Query:` header.
const HEADER_SCAN_LINES: usize = 10;

// -- Public API ---------------------------------------------------------------

/// Parse one search-result document.
///
/// `fallback_label` becomes the query label when no `Query:` header is
/// present; callers pass the file stem. Pure and total: the same input
/// always yields the same result, and there is no failure path.
pub fn parse(input: &str, fallback_label: &str) -> Document {
    let lines: Vec<&str> = input.trim().lines().collect();

    let mut doc = Document {
        query: query_label(&lines, fallback_label),
        results: Vec::new(),
    };

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        if line.is_empty() || SKIP_PREFIXES.iter().any(|p| line.starts_with(p)) {
            i += 1;
            continue;
        }

        if let Some(caps) = RE_RECORD.captures(line) {
            let (series, next) = collect_record(&lines, i, &caps);
            doc.results.push(series);
            i = next;
            continue;
        }

        // Stray text outside any record
        i += 1;
    }

    doc
}

// -- Helpers ------------------------------------------------------------------

/// Extract the query label from a `Query:` header near the top of the
/// document, falling back to the caller's label.
fn query_label(lines: &[&str], fallback: &str) -> String {
    for line in lines.iter().take(HEADER_SCAN_LINES) {
        if let Some(rest) = line.strip_prefix("Query: ") {
            return rest.trim().to_string();
        }
    }
    fallback.to_string()
}

/// Collect one record starting at `lines[i]`, scanning forward for its
/// metadata. Returns the record and the index where the main scan
/// resumes.
fn collect_record(lines: &[&str], i: usize, caps: &regex::Captures) -> (Series, usize) {
    let mut series = Series {
        series_id: caps[1].trim().to_string(),
        title: caps[2].trim().to_string(),
        ..Series::default()
    };

    let mut notes_lines: Vec<String> = Vec::new();
    let mut j = i + 1;

    while j < lines.len() {
        let line = lines[j].trim();

        if line.is_empty() {
            // A blank line ends the record only when the next line
            // starts a new one; otherwise it's a plain separator.
            if j + 1 < lines.len() && RE_RECORD.is_match(lines[j + 1].trim()) {
                break;
            }
            j += 1;
            continue;
        }

        if RE_RECORD.is_match(line) {
            break;
        }

        if let Some(rest) = line.strip_prefix("Units: ") {
            series.units = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("Frequency: ") {
            series.frequency = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("Last Updated: ") {
            series.last_updated = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("Notes: ") {
            let text = rest.trim();
            if text != NO_DESCRIPTION {
                notes_lines.push(text.to_string());
            }
        } else if !notes_lines.is_empty() || (j > i + 1 && lines[j - 1].contains("Notes:")) {
            // Continuation of an active notes block. The raw-previous-line
            // test is deliberately loose; tightening it changes the output
            // for existing dumps.
            notes_lines.push(line.to_string());
        }

        j += 1;
    }

    series.notes = notes_lines.join(" ").trim().to_string();
    (series, j)
}
