//! Integration tests for the rubric CLI
//!
//! These tests run the rubric binary against the built-in rubric and small
//! rubric files written to temporary directories.

mod support;

use predicates::prelude::*;
use std::fs;
use support::{rubric, run_json, write_rubric, UNMAPPED_RUBRIC};
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    rubric()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: rubric"))
        .stdout(predicate::str::contains("chart"))
        .stdout(predicate::str::contains("table"))
        .stdout(predicate::str::contains("readme"));
}

#[test]
fn test_version_flag() {
    rubric()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rubric"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    rubric()
        .assert()
        .success()
        .stdout(predicate::str::contains("rubric --help"));
}

// ============================================================================
// Usage errors (exit code 2)
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    rubric()
        .args(["--format", "xml", "chart"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    rubric()
        .args(["--format", "json", "chart", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_zero_scale_max_is_usage_error() {
    rubric()
        .args(["--format", "json", "chart", "--scale-max", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_unsupported_rubric_extension() {
    let dir = tempdir().unwrap();
    let path = write_rubric(dir.path(), "rubric.csv", "key,label\n");

    rubric()
        .arg("--rubric")
        .arg(&path)
        .arg("chart")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported rubric file extension"));
}

// ============================================================================
// Chart
// ============================================================================

#[test]
fn test_chart_json_for_builtin() {
    let chart = run_json(&["chart", "--format", "json"]);

    assert_eq!(chart["type"], "radar");
    let labels = chart["data"]["labels"].as_array().unwrap();
    assert_eq!(labels.len(), 4);
    assert_eq!(labels[0], "Openness");

    let datasets = chart["data"]["datasets"].as_array().unwrap();
    assert_eq!(datasets.len(), 7);
    assert!(datasets
        .iter()
        .all(|d| d["data"].as_array().unwrap().len() == 4));
    assert_eq!(datasets[0]["label"], "Text");
    assert_eq!(datasets[0]["data"], serde_json::json!([100, 100, 20, 33]));

    assert_eq!(chart["options"]["scale"]["ticks"]["max"], 110);
    assert_eq!(chart["options"]["scale"]["ticks"]["beginAtZero"], true);
}

#[test]
fn test_chart_scale_max_flag() {
    let chart = run_json(&["chart", "--format", "json", "--scale-max", "100"]);
    assert_eq!(chart["options"]["scale"]["ticks"]["max"], 100);
}

#[test]
fn test_chart_human_in_norwegian() {
    rubric()
        .args(["--lang", "nb", "chart"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Axes: Åpenhet, Tilgjengelighet, Utvikling, Implementering\n",
        ))
        .stdout(predicate::str::contains("Tekst: 100, 100, 20, 33\n"));
}

#[test]
fn test_unknown_language_falls_back_to_english() {
    rubric()
        .args(["--lang", "xx", "--format", "json", "chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Openness\""))
        .stderr(predicate::str::contains("unsupported language"));
}

#[test]
fn test_language_from_environment() {
    let output = rubric()
        .env("RUBRIC_LANG", "nb")
        .args(["languages", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let languages: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(languages["selected"], "nb");
    assert_eq!(languages["default"], "en");
    assert_eq!(languages["languages"], serde_json::json!(["en", "nb"]));
}

// ============================================================================
// Table and README
// ============================================================================

#[test]
fn test_table_html() {
    rubric()
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<table>\n"))
        .stdout(predicate::str::contains(
            "<th colspan=\"4\" scope=\"col\">Openness</th>",
        ))
        .stdout(predicate::str::contains(">100 (3)</td>"))
        .stdout(predicate::str::ends_with("</table>\n"));
}

#[test]
fn test_table_json() {
    let table = run_json(&["table", "--format", "json"]);

    assert_eq!(table["language"], "en");
    assert_eq!(table["header"]["columns"].as_array().unwrap().len(), 11);

    let rows = table["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["cells"][0]["text"], "100 (3)");
    assert!(table["missing"].as_array().unwrap().is_empty());
}

#[test]
fn test_readme() {
    rubric()
        .arg("readme")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# Multilingual rubric for evaluation of development of open content\n",
        ))
        .stdout(predicate::str::contains("`0` - Completely locked  \n"));
}

#[test]
fn test_readme_to_output_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docs").join("README.nb.md");

    rubric()
        .args(["readme", "--lang", "nb", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let readme = fs::read_to_string(&path).unwrap();
    assert!(readme.contains("### Åpenhet\n"));
}

// ============================================================================
// Missing mappings
// ============================================================================

#[test]
fn test_missing_fail_exits_with_data_error() {
    let dir = tempdir().unwrap();
    let path = write_rubric(dir.path(), "podcast.toml", UNMAPPED_RUBRIC);

    rubric()
        .arg("--rubric")
        .arg(&path)
        .args(["--missing", "fail", "--format", "json", "scores"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"missing_mapping\""))
        .stderr(predicate::str::contains("openness.licence"));
}

#[test]
fn test_missing_warn_skips_and_logs() {
    let dir = tempdir().unwrap();
    let path = write_rubric(dir.path(), "podcast.toml", UNMAPPED_RUBRIC);

    rubric()
        .arg("--rubric")
        .arg(&path)
        .arg("scores")
        .assert()
        .success()
        .stdout(predicate::str::contains("Podcast\n  Openness: 100\n"))
        .stderr(predicate::str::contains("skipping unmapped score"));
}

#[test]
fn test_missing_skip_is_silent() {
    let dir = tempdir().unwrap();
    let path = write_rubric(dir.path(), "podcast.toml", UNMAPPED_RUBRIC);

    rubric()
        .env("RUBRIC_FILE", &path)
        .args(["--missing", "skip", "chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Podcast: 100\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_rubric_file() {
    let dir = tempdir().unwrap();

    rubric()
        .arg("--rubric")
        .arg(dir.path().join("absent.toml"))
        .arg("chart")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rubric not found"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_sets_language_and_policy() {
    let dir = tempdir().unwrap();
    let rubric_path = write_rubric(dir.path(), "podcast.toml", UNMAPPED_RUBRIC);
    fs::write(
        dir.path().join("config.toml"),
        format!(
            "missing = \"fail\"\nrubric = {:?}\n",
            rubric_path.display().to_string()
        ),
    )
    .unwrap();

    rubric()
        .env("RUBRIC_CONFIG_DIR", dir.path())
        .arg("chart")
        .assert()
        .code(3);

    // Flags take precedence over the config file
    rubric()
        .env("RUBRIC_CONFIG_DIR", dir.path())
        .args(["--missing", "skip", "chart"])
        .assert()
        .success();
}

#[test]
fn test_config_file_language() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "language = \"nb\"\n[chart]\nscale_max = 120\n",
    )
    .unwrap();

    let output = rubric()
        .env("RUBRIC_CONFIG_DIR", dir.path())
        .args(["--format", "json", "chart"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let chart: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(chart["data"]["labels"][0], "Åpenhet");
    assert_eq!(chart["options"]["scale"]["ticks"]["max"], 120);
}
