//! Integration tests for the `solarfarm` binary.

use std::{fs, path::PathBuf};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const FARM_JSON: &str = r#"[
  { "id": 1, "row": 5, "column": 9, "section": "West",
    "tracking": true, "material": "cd-te", "yearInstalled": 2011 }
]"#;

fn solarfarm(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("solarfarm");
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SOLARFARM__STORE__SEED_FILE");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn west_5_9_args() -> [&'static str; 11] {
    [
        "add", "--section", "West", "--row", "5", "--column", "9", "--material", "cd-te",
        "--year", "2011",
    ]
}

#[test]
fn help_describes_the_tool() {
    let dir = TempDir::new().unwrap();
    solarfarm(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("panel"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    solarfarm(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn add_valid_panel_succeeds() {
    let dir = TempDir::new().unwrap();
    solarfarm(&dir)
        .args(west_5_9_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added panel"));
}

#[test]
fn add_invalid_row_is_rejected() {
    let dir = TempDir::new().unwrap();
    solarfarm(&dir)
        .args([
            "add", "--section", "West", "--row", "-5", "--column", "9", "--material", "cd-te",
            "--year", "2011",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Row"));
}

#[test]
fn add_without_material_is_rejected() {
    let dir = TempDir::new().unwrap();
    solarfarm(&dir)
        .args([
            "add", "--section", "West", "--row", "5", "--column", "9", "--year", "2011",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Material"));
}

#[test]
fn add_duplicate_of_existing_panel_is_rejected() {
    let dir = TempDir::new().unwrap();
    write(&dir, "farm.json", FARM_JSON);

    solarfarm(&dir)
        .args(west_5_9_args())
        .args(["--existing", "farm.json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Duplicate"));
}

#[test]
fn add_json_output_reports_outcome() {
    let dir = TempDir::new().unwrap();
    let output = solarfarm(&dir)
        .args(["--output-format", "json"])
        .args(west_5_9_args())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["messages"].as_array().unwrap().len(), 0);
    assert_eq!(value["stored"]["id"], 1);
}

#[test]
fn seed_file_from_config_is_used() {
    let dir = TempDir::new().unwrap();
    let farm = write(&dir, "farm.json", FARM_JSON);
    let config = write(
        &dir,
        "solarfarm.toml",
        &format!("[store]\nseed_file = {:?}\n", farm.display().to_string()),
    );

    solarfarm(&dir)
        .arg("--config")
        .arg(&config)
        .args(west_5_9_args())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Duplicate"));
}

#[test]
fn seed_file_from_environment_is_used() {
    let dir = TempDir::new().unwrap();
    let farm = write(&dir, "farm.json", FARM_JSON);

    solarfarm(&dir)
        .env("SOLARFARM__STORE__SEED_FILE", &farm)
        .args(west_5_9_args())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Duplicate"));
}

#[test]
fn missing_config_file_exits_with_config_error() {
    let dir = TempDir::new().unwrap();
    solarfarm(&dir)
        .args(["--config", "nope.toml", "materials"])
        .assert()
        .code(4);
}

#[test]
fn import_reports_each_panel() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "batch.toml",
        r#"
[[panels]]
row = 1
column = 1
section = "East"
material = "mono-si"
year_installed = 2010

[[panels]]
row = 1
column = 1
section = "East"
material = "cigs"
year_installed = 2012

[[panels]]
row = 2
column = 1
section = "East"
year_installed = 2012
"#,
    );

    let output = solarfarm(&dir)
        .args(["--output-format", "json", "import", "batch.toml"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 3);
    assert_eq!(value["added"], 1);
    assert_eq!(value["rejected"], 2);
    assert!(
        value["results"][1]["messages"][0]
            .as_str()
            .unwrap()
            .contains("Duplicate")
    );
    assert!(
        value["results"][2]["messages"][0]
            .as_str()
            .unwrap()
            .contains("Material")
    );
}

#[test]
fn import_all_valid_succeeds() {
    let dir = TempDir::new().unwrap();
    write(&dir, "batch.json", FARM_JSON);

    solarfarm(&dir)
        .args(["import", "batch.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 added, 0 rejected"));
}

#[test]
fn import_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    solarfarm(&dir)
        .args(["import", "missing.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn materials_lists_codes() {
    let dir = TempDir::new().unwrap();
    solarfarm(&dir)
        .arg("materials")
        .assert()
        .success()
        .stdout(predicate::str::contains("cd-te"))
        .stdout(predicate::str::contains("Cadmium Telluride"));
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    solarfarm(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("solarfarm"));
}

#[test]
fn existing_flag_accepted_before_subcommand() {
    let dir = TempDir::new().unwrap();
    write(&dir, "farm.json", FARM_JSON);

    solarfarm(&dir)
        .args(["--existing", "farm.json"])
        .args(west_5_9_args())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Duplicate"));
}

#[test]
fn bad_material_in_json_batch_is_reported() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "batch.json",
        r#"[{ "row": 1, "column": 1, "section": "East", "material": "wood", "yearInstalled": 2010 }]"#,
    );

    solarfarm(&dir)
        .args(["import", "batch.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("wood"));
}
