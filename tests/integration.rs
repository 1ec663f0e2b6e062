use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_fredconv")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_markdown() {
    let input = std::fs::read_to_string(fixture_path("gdp.txt")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("gdp.expected.md")).unwrap();

    let assert = cmd().write_stdin(input).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn stdin_mode_json_shape() {
    let input = std::fs::read_to_string(fixture_path("gdp.txt")).unwrap();

    let assert = cmd()
        .args(["-f", "json"])
        .write_stdin(input)
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["query"], "gross domestic product");
    assert_eq!(value["result_count"], 3);
    assert_eq!(value["results"][0]["series_id"], "GDPC1");
    // Sentinel notes value is elided
    assert_eq!(value["results"][1]["notes"], "");
    // Continuation line is folded into the notes
    assert_eq!(
        value["results"][2]["notes"],
        "Percent change from preceding period, seasonally adjusted annual rate."
    );
}

#[test]
fn stdin_mode_default_label() {
    let input = std::fs::read_to_string(fixture_path("orphan.txt")).unwrap();

    cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("## stdin"));
}

#[test]
fn stdin_mode_custom_label() {
    let input = std::fs::read_to_string(fixture_path("orphan.txt")).unwrap();

    cmd()
        .args(["--label", "payrolls"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("## payrolls"));
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("gdp.txt"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("gdp.md")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("gdp.expected.md")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn file_mode_multiple_files_and_summary() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("gdp.txt"))
        .arg(fixture_path("unemployment.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Total queries: 2"))
        .stdout(predicate::str::contains("Total series: 5"));

    assert!(dir.path().join("gdp.md").exists());
    assert!(dir.path().join("unemployment.md").exists());
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg(fixture_path("gdp.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn invalid_format_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "xml"])
        .arg(fixture_path("gdp.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn file_mode_json_consolidated() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "json"])
        .arg("--consolidated")
        .arg(fixture_path("gdp.txt"))
        .arg(fixture_path("unemployment.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Consolidated output written to"));

    let consolidated = dir.path().join("search_results_consolidated.json");
    let value: Value =
        serde_json::from_str(&std::fs::read_to_string(consolidated).unwrap()).unwrap();

    // Keys follow processing order (inputs are sorted)
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["gross domestic product", "unemployment rate"]);
    assert_eq!(value["gross domestic product"]["result_count"], 3);
    assert_eq!(value["unemployment rate"]["result_count"], 2);

    // Per-document outputs are still written
    assert!(dir.path().join("gdp.json").exists());
    assert!(dir.path().join("unemployment.json").exists());
}

#[test]
fn directory_input_scans_for_txt() {
    let dir = TempDir::new().unwrap();
    let fixtures = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(&fixtures)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total queries: 3"));

    // The headerless document falls back to its file stem as label
    let orphan = std::fs::read_to_string(dir.path().join("orphan.md")).unwrap();
    assert!(orphan.contains("## orphan"));
    assert!(orphan.contains("| PAYEMS |"));
}

#[test]
fn unsupported_file_skipped_with_warning() {
    let dir = TempDir::new().unwrap();
    let mut input = NamedTempFile::with_suffix(".csv").unwrap();
    input.write_all(b"series_id,title\nGDPC1,Real GDP\n").unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(input.path().to_str().unwrap())
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: skipping"))
        .stdout(predicate::str::contains("Total queries: 0"));
}

#[test]
fn consolidated_markdown_has_all_sections() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg("--consolidated")
        .arg(fixture_path("gdp.txt"))
        .arg(fixture_path("unemployment.txt"))
        .assert()
        .success();

    let consolidated =
        std::fs::read_to_string(dir.path().join("search_results_consolidated.md")).unwrap();
    assert!(consolidated.starts_with("# FRED Search Results\n"));
    assert!(consolidated.contains("## gross domestic product"));
    assert!(consolidated.contains("## unemployment rate"));
    assert!(consolidated.contains("| UNRATE |"));
}
