//! Binary-level tests for the `marinetrack` command.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn marinetrack() -> Command {
    let mut cmd = cargo_bin_cmd!("marinetrack");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn config_for(dir: &tempfile::TempDir) -> PathBuf {
    let db = dir.path().join("tracking.db");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        format!(
            "database = {:?}\n\n[logging]\nlevel = \"warn\"\nformat = \"pretty\"\n",
            db.to_string_lossy()
        ),
    )
    .unwrap();
    path
}

#[test]
fn help_lists_subcommands() {
    marinetrack()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("query"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_names_binary() {
    marinetrack()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("marinetrack"));
}

#[test]
fn query_dataset_prints_json_response() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    let output = marinetrack()
        .args(["--json", "query", "--locations", "ST-1", "--dataset"])
        .arg(fixture("dataset.json"))
        .arg("-c")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let orders = json["marineTrackings"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["orderId"], "SO-100");
    assert_eq!(orders[0]["earliestEtd"], "2024-03-01T06:00:00Z");
    assert_eq!(orders[0]["earliestEta"], "2024-03-30T00:00:00Z");
}

#[test]
fn query_dataset_renders_table() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    marinetrack()
        .args(["--color", "never", "query", "--locations", "ST-1,ST-2", "--dataset"])
        .arg(fixture("dataset.json"))
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Order SO-100"))
        .stdout(predicate::str::contains("Order SO-200"))
        .stdout(predicate::str::contains("Vessel departed @ Ningbo"));
}

#[test]
fn query_warns_about_requested_orders_left_out() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    marinetrack()
        .args(["--color", "never", "query", "--locations", "ST-1"])
        .args(["--order", "SO-100", "--order", "SO-200", "--dataset"])
        .arg(fixture("dataset.json"))
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Order SO-100"))
        .stdout(predicate::str::contains(
            "Order SO-200 has no tracking for the authorized locations",
        ));
}

#[test]
fn query_with_unknown_location_reports_nothing_found() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    marinetrack()
        .args(["query", "--locations", "ST-9", "--dataset"])
        .arg(fixture("dataset.json"))
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("No marine trackings"));
}

#[test]
fn import_then_query_database() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    marinetrack()
        .args(["--json", "import"])
        .arg(fixture("dataset.json"))
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tracking_events\":5"));

    let output = marinetrack()
        .args(["--json", "query", "--locations", "ST-2", "--recent-activity"])
        .arg("-c")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["marineTrackings"][0]["orderId"], "SO-200");
    assert_eq!(
        json["marineTrackings"][0]["bookings"][0]["bookingNumber"],
        "BK-2"
    );
}

#[test]
fn missing_dataset_fails_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    marinetrack()
        .args(["query", "--locations", "ST-1", "--dataset"])
        .arg(dir.path().join("absent.json"))
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn config_validate_accepts_good_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    marinetrack()
        .args(["config", "validate", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn config_validate_rejects_bad_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

    marinetrack()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging.format"));
}

#[test]
fn config_show_json_includes_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let output = marinetrack()
        .args(["--json", "config", "show", "-c"])
        .arg(dir.path().join("absent.toml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["exists"], false);
    assert_eq!(json["config"]["database"], "marinetrack.db");
    assert_eq!(
        json["config"]["query"]["shipment_types"],
        serde_json::json!(["marine", "truck30"])
    );
}

#[test]
fn query_requires_locations_flag() {
    marinetrack()
        .arg("query")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--locations"));
}
