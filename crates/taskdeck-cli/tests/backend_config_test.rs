mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn backend_show_reports_local_defaults() {
    let fixture = TestFixture::new();

    let output = fixture
        .json_command()
        .arg("backend")
        .arg("show")
        .output()
        .expect("Failed to run backend show");
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["mode"], "local");
    assert_eq!(result["base_url"], "http://localhost:8080");
    assert!(
        result["store_path"]
            .as_str()
            .unwrap()
            .ends_with("tasks.json")
    );
}

#[test]
fn backend_use_persists_mode_and_base_url() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("backend")
        .arg("use")
        .arg("remote")
        .arg("--base-url")
        .arg("http://tasks.example:8080")
        .assert()
        .success()
        .stdout(predicate::str::contains("remote"));

    let output = fixture
        .json_command()
        .arg("backend")
        .arg("show")
        .output()
        .unwrap();
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["mode"], "remote");
    assert_eq!(result["base_url"], "http://tasks.example:8080");
}

#[test]
fn unreachable_remote_backend_warns_and_exits_cleanly() {
    let fixture = TestFixture::new();

    // Point at a port nothing listens on.
    fixture
        .command()
        .arg("backend")
        .arg("use")
        .arg("remote")
        .arg("--base-url")
        .arg("http://127.0.0.1:9")
        .assert()
        .success();

    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot reach the remote backend"));

    // Mutations hit the same boundary: no crash, one notice.
    fixture
        .command()
        .arg("add")
        .arg("Unsendable")
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot reach the remote backend"));
}
