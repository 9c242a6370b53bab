//! Integration tests for the pathparams CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/petstore.yaml");
const TEMPLATE: &str = "/owners/{ownerId}/pets/{petId}";

fn stdout_lines(output: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect()
}

#[test]
fn test_list_path_item_parameters() {
    let output = Command::cargo_bin("pathparams")
        .unwrap()
        .args(["list", "--spec", FIXTURE, "--path", TEMPLATE])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output.stdout);
    let names: Vec<&str> = lines.iter().map(|l| l["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["ownerId", "petId", "legacyId"]);

    assert_eq!(lines[0]["missing"], false);
    assert_eq!(lines[0]["type"], "integer (int64)");
    assert_eq!(lines[1]["missing"], true);
    assert_eq!(lines[1]["required"], true);
    assert!(lines[1]["nodePath"].is_null());
}

#[test]
fn test_list_operation_parameters() {
    let output = Command::cargo_bin("pathparams")
        .unwrap()
        .args(["list", "--spec", FIXTURE, "--path", TEMPLATE, "--method", "get"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output.stdout);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["name"], "petId");
    assert_eq!(
        lines[1]["nodePath"],
        "/paths[/owners/{ownerId}/pets/{petId}]/get/parameters[0]"
    );
}

#[test]
fn test_create_emits_command_line() {
    Command::cargo_bin("pathparams")
        .unwrap()
        .args([
            "create",
            "--spec",
            FIXTURE,
            "--path",
            TEMPLATE,
            "--document-id",
            "petstore",
            "petId",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"NewParamCommand""#))
        .stdout(predicate::str::contains(r#""document":"petstore""#))
        .stdout(predicate::str::contains(
            r#""parentPath":"/paths[/owners/{ownerId}/pets/{petId}]""#,
        ));
}

#[test]
fn test_retype_emits_simplified_type() {
    let output = Command::cargo_bin("pathparams")
        .unwrap()
        .args([
            "retype", "--spec", FIXTURE, "--path", TEMPLATE, "ownerId", "--type", "string",
            "--format", "uuid",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output.stdout);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["type"], "ChangeParameterTypeCommand");
    assert_eq!(
        lines[0]["newType"],
        serde_json::json!({ "type": "string", "as": "uuid", "required": true })
    );
}

#[test]
fn test_delete_undeclared_parameter_fails() {
    Command::cargo_bin("pathparams")
        .unwrap()
        .args(["delete", "--spec", FIXTURE, "--path", TEMPLATE, "petId"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not declared"));
}

#[test]
fn test_unknown_path_fails() {
    Command::cargo_bin("pathparams")
        .unwrap()
        .args(["list", "--spec", FIXTURE, "--path", "/nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in document"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(config, "document_id = \"from-config\"\ndefault_method = \"get\"").unwrap();

    Command::cargo_bin("pathparams")
        .unwrap()
        .args(["describe", "--spec", FIXTURE, "--path", TEMPLATE, "petId", "Pet id"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""document":"from-config""#))
        .stdout(predicate::str::contains(
            r#""target":"/paths[/owners/{ownerId}/pets/{petId}]/get/parameters[0]""#,
        ))
        .stdout(predicate::str::contains(r#""newValue":"Pet id""#));
}

#[test]
fn test_path_item_flag_overrides_config_method() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(config, "default_method = \"get\"").unwrap();

    let output = Command::cargo_bin("pathparams")
        .unwrap()
        .args(["list", "--spec", FIXTURE, "--path", TEMPLATE, "--path-item"])
        .arg("--config")
        .arg(config.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output.stdout);
    let names: Vec<&str> = lines.iter().map(|l| l["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["ownerId", "petId", "legacyId"]);
}

#[test]
fn test_path_item_flag_conflicts_with_method() {
    Command::cargo_bin("pathparams")
        .unwrap()
        .args(["list", "--spec", FIXTURE, "--path", TEMPLATE, "--method", "get", "--path-item"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
