use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("quire-compiler")
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn compile_kitchensink_to_flat_via_cli() {
    let fixture = fixture_path("kitchensink.json");
    let mut cmd = cargo_bin_cmd!("quire");
    cmd.arg("compile").arg(&fixture).arg("--to").arg("flat");

    let output_pred = predicate::str::contains("\"orderedList\"")
        .and(predicate::str::contains("\"codeBlock\""))
        .and(predicate::str::contains("Field Notes"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn compile_defaults_to_paged() {
    let fixture = fixture_path("kitchensink.json");
    let mut cmd = cargo_bin_cmd!("quire");
    cmd.arg("compile").arg(&fixture);

    let output_pred = predicate::str::contains("\"pages\"")
        .and(predicate::str::contains("\"unorderedList\""))
        .and(predicate::str::contains("\"orderedList\"").not());

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn compile_rejects_unknown_schema() {
    let fixture = fixture_path("kitchensink.json");
    let mut cmd = cargo_bin_cmd!("quire");
    cmd.arg("compile").arg(&fixture).arg("--to").arg("scroll");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unsupported schema"));
}

#[test]
fn compile_reports_missing_input() {
    let mut cmd = cargo_bin_cmd!("quire");
    cmd.arg("compile").arg("does-not-exist.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn compile_then_decompile_flat() {
    let dir = tempdir().unwrap();
    let record = dir.path().join("record.json");

    let mut compile = cargo_bin_cmd!("quire");
    compile
        .arg("compile")
        .arg(fixture_path("kitchensink.json"))
        .arg("--to")
        .arg("flat")
        .arg("--output")
        .arg(&record);
    compile.assert().success().stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&record).unwrap();
    assert!(written.contains("\"items\""));

    let mut decompile = cargo_bin_cmd!("quire");
    decompile.arg("decompile").arg(&record).arg("--from").arg("flat");

    let output_pred = predicate::str::contains("\"type\": \"root\"")
        .and(predicate::str::contains("\"ordered\": true"))
        .and(predicate::str::contains("Second thought."));

    decompile.assert().success().stdout(output_pred);
}

#[test]
fn decompile_rejects_record_of_other_schema() {
    let dir = tempdir().unwrap();
    let record = dir.path().join("record.json");
    fs::write(&record, r#"{"items": []}"#).unwrap();

    let mut cmd = cargo_bin_cmd!("quire");
    cmd.arg("decompile").arg(&record).arg("--from").arg("paged");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Decompile failed"));
}

#[test]
fn schemas_lists_builtins() {
    let mut cmd = cargo_bin_cmd!("quire");
    cmd.arg("schemas");

    let output_pred = predicate::str::contains("Available schemas")
        .and(predicate::str::contains("  flat"))
        .and(predicate::str::contains("  paged"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn compile_renders_yaml() {
    let mut cmd = cargo_bin_cmd!("quire");
    cmd.arg("compile")
        .arg(fixture_path("kitchensink.json"))
        .arg("--to")
        .arg("flat")
        .arg("--format")
        .arg("yaml");

    let output_pred = predicate::str::contains("heading")
        .and(predicate::str::contains("plaintext: Field Notes"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn config_file_changes_defaults() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("quire.toml");
    fs::write(
        &config,
        "[compile]\ndefault_schema = \"paged\"\n\n[compile.paged]\nalignment = \"center\"\ntext_size = \"large\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("quire");
    cmd.arg("--config")
        .arg(&config)
        .arg("compile")
        .arg(fixture_path("kitchensink.json"));

    let output_pred = predicate::str::contains("\"alignment\": \"center\"")
        .and(predicate::str::contains("\"textSize\": \"large\""))
        .and(predicate::str::contains("\"alignment\": \"left\"").not());

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn config_file_must_exist() {
    let mut cmd = cargo_bin_cmd!("quire");
    cmd.arg("--config")
        .arg("missing.toml")
        .arg("schemas");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn schema_flag_beats_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("quire.toml");
    fs::write(&config, "[compile]\ndefault_schema = \"flat\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("quire");
    cmd.arg("--config")
        .arg(&config)
        .arg("compile")
        .arg(fixture_path("kitchensink.json"))
        .arg("--to")
        .arg("paged");

    let output_pred = predicate::str::contains("\"pages\"")
        .and(predicate::str::contains("First thought. Second thought."));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn config_file_with_unknown_schema_fails_at_startup() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("quire.toml");
    fs::write(&config, "[compile]\ndefault_schema = \"scroll\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("quire");
    cmd.arg("--config").arg(&config).arg("schemas");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error: Unsupported schema 'scroll'"));
}
