use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// 사용자/프로젝트 설정이 섞이지 않도록 임시 디렉터리 안에서 실행한다.
fn routekit(home: &Path) -> Command {
    let data_dir = home.join("positions");
    let config = home.join("routekit.json");
    fs::write(
        &config,
        format!(
            r#"{{"storage":{{"data_dir":{}}}}}"#,
            serde_json::to_string(&data_dir.to_string_lossy()).unwrap()
        ),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("routekit").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_DATA_HOME", home.join(".local/share"))
        .env("ROUTEKIT_CONFIG", &config)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn api_prints_message() {
    let home = TempDir::new().unwrap();
    routekit(home.path())
        .arg("api")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello from the API!"));
}

#[test]
fn unknown_command_exits_with_resolution_code() {
    let home = TempDir::new().unwrap();
    routekit(home.path())
        .arg("bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error! Code ='2'"));
}

#[test]
fn missing_argument_exits_with_binding_code() {
    let home = TempDir::new().unwrap();
    routekit(home.path())
        .args(["position", "add", "1"])
        .assert()
        .code(3);
}

#[test]
fn positions_persist_between_runs() {
    let home = TempDir::new().unwrap();
    let output = routekit(home.path())
        .args(["position", "add", "1", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = String::from_utf8(output).unwrap().trim().to_string();
    assert!(home.path().join("positions").join(format!("{id}.json")).exists());

    routekit(home.path())
        .args(["position", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{id} (1, 2)")));
}

#[test]
fn help_lists_commands_and_exits_zero() {
    let home = TempDir::new().unwrap();
    routekit(home.path())
        .args(["position", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add").and(predicate::str::contains("remove")));
}

#[test]
fn config_prints_effective_settings() {
    let home = TempDir::new().unwrap();
    let output = routekit(home.path())
        .arg("config")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["effective"]["verbosity"], "Normal");
    assert!(json["loaded_paths"].as_array().is_some_and(|paths| paths.len() == 1));
}

#[test]
fn malformed_config_exits_with_configuration_code() {
    let home = TempDir::new().unwrap();
    let broken = home.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    routekit(home.path())
        .arg("--config")
        .arg(&broken)
        .arg("api")
        .assert()
        .code(4);
}
