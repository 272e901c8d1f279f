use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("dashchart").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dashchart"))
        .stdout(predicate::str::contains("prepare"))
        .stdout(predicate::str::contains("layout"));
}

#[test]
fn prepare_sorts_aging_csv() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("aging.csv");
    fs::write(
        &input,
        "category,value\n61-90 days,3\nCurrent,10\n31-60 days,4\n0-30 days,7\n",
    )
    .unwrap();

    let out = Command::cargo_bin("dashchart")
        .unwrap()
        .args(["prepare", "--input"])
        .arg(&input)
        .args(["--width", "500", "--height", "300"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["categoryKind"], "aging");
    assert_eq!(v["isMultiSeries"], false);
    let cats: Vec<&str> = v["dataset"]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["category"].as_str().unwrap())
        .collect();
    assert_eq!(cats, vec!["Current", "0-30 days", "31-60 days", "61-90 days"]);
    assert_eq!(v["layout"]["tier"], "large");
}

#[test]
fn prepare_with_config_and_sort_override() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("sales.json");
    fs::write(
        &input,
        r#"[
            {"category": "Q1", "value": 5, "seriesName": "North"},
            {"category": "Q1", "value": 2, "seriesName": "South"},
            {"category": "Q2", "value": 9, "seriesName": "North"}
        ]"#,
    )
    .unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"orientation": "horizontal", "sortType": "alphabetical"}"#).unwrap();

    let out = Command::cargo_bin("dashchart")
        .unwrap()
        .args(["prepare", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .args(["--sort", "value-descending", "--pretty"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["sortType"], "value-descending");
    assert_eq!(v["layout"]["orientation"], "horizontal");
    assert_eq!(v["dataset"]["shape"], "wide");
    assert_eq!(v["dataset"]["rows"][0]["category"], "Q2");
    assert_eq!(v["legend"].as_array().unwrap().len(), 2);
}

#[test]
fn prepare_rejects_unknown_extension() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.txt");
    fs::write(&input, "whatever").unwrap();
    Command::cargo_bin("dashchart")
        .unwrap()
        .args(["prepare", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported input format"));
}

#[test]
fn layout_prints_params() {
    let out = Command::cargo_bin("dashchart")
        .unwrap()
        .args(["layout", "--width", "160", "--height", "120", "--series", "2", "--legend"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["tier"], "very-small");
    assert_eq!(v["legend"]["height"], 18.0);
    assert_eq!(v["showValueLabels"], false);
}

#[test]
fn layout_horizontal_without_legend() {
    let out = Command::cargo_bin("dashchart")
        .unwrap()
        .args(["layout", "--width", "700", "--height", "400", "--horizontal", "--series", "3"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["orientation"], "horizontal");
    assert_eq!(v["tier"], "extra-large");
    assert!(v["legend"].is_null());
}

#[test]
fn strategies_lists_menu() {
    Command::cargo_bin("dashchart")
        .unwrap()
        .args(["strategies", "--business"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aging-logical"))
        .stdout(predicate::str::contains("chronological").not());
}
