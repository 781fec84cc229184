use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for rubric, isolated from the user's config and environment
pub fn rubric() -> Command {
    let mut cmd = cargo_bin_cmd!("rubric");
    cmd.env("RUBRIC_CONFIG_DIR", "/nonexistent/rubric-test-config")
        .env_remove("RUBRIC_FILE")
        .env_remove("RUBRIC_LANG")
        .env_remove("RUBRIC_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a rubric document into `dir` and return its path
#[allow(dead_code)]
pub fn write_rubric(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Run rubric and parse stdout as JSON
#[allow(dead_code)]
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let output = rubric().args(args).output().unwrap();
    assert!(
        output.status.success(),
        "rubric {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// A one-entity rubric whose `licence` score has no subfactor in the schema
#[allow(dead_code)]
pub const UNMAPPED_RUBRIC: &str = r#"
default_language = "en"

[[languages.en.factors]]
key = "openness"
label = "Openness"

[[languages.en.factors.items]]
key = "materials"
label = "Materials"
values = [
  { score = 0, description = "Locked" },
  { score = 3, description = "Open" },
]

[[entities]]
key = "podcast"
label = "Podcast"

[entities.scores.openness]
materials = 3
licence = 2
"#;
