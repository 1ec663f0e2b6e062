//! fredconv — convert FRED series search dumps to structured formats.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `fredconv < results.txt` writes the rendered
//!   document to stdout.
//! - **file mode**: `fredconv -o out/ search_results/*.txt` writes one
//!   output per input document, plus an optional consolidated file
//!   keyed by query label.

mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "fredconv",
    about = "Convert FRED series search result dumps to JSON or Markdown"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Also write a consolidated output keyed by query label
    #[arg(long)]
    consolidated: bool,

    /// Fallback query label for stdin input without a Query: header
    #[arg(long, default_value = "stdin")]
    label: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read one document from stdin, write the rendering to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let doc = parser::search::parse(&input, &cli.label);
    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&doc));
    Ok(())
}

/// file mode: parse every input document, write per-document outputs and
/// an optional consolidated file into the output directory.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    let mut parsed: Vec<(PathBuf, model::Document)> = Vec::new();
    for path in &input_files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };
        match parser::parse_document(path, &content) {
            Ok(doc) => parsed.push((path.clone(), doc)),
            Err(e) => eprintln!("warning: skipping {}: {}", path.display(), e),
        }
    }

    for (source, doc) in &parsed {
        let name = derive_output_name(source);
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, renderer.render(doc))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    let docs: Vec<model::Document> = parsed.into_iter().map(|(_, doc)| doc).collect();

    if cli.consolidated {
        let out_path = output_dir.join(format!("search_results_consolidated.{}", ext));
        fs::write(&out_path, renderer.render_consolidated(&docs))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        println!("Consolidated output written to {}", out_path.display());
    }

    let query_count = docs
        .iter()
        .map(|d| d.query.as_str())
        .collect::<HashSet<_>>()
        .len();
    let series_count: usize = docs.iter().map(|d| d.results.len()).sum();
    println!("Total queries: {}", query_count);
    println!("Total series: {}", series_count);

    Ok(())
}

/// File extensions recognized as search-result dumps.
const SUPPORTED_EXTENSIONS: &[&str] = &["txt"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a source path.
/// "search_results/gdp_20240101.txt" → "gdp_20240101"
fn derive_output_name(source: &Path) -> String {
    source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}
