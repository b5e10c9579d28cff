use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn tabwrangle() -> Command {
    Command::cargo_bin("tabwrangle").unwrap()
}

#[test]
fn load_prints_selected_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "t.txt", "a 1 x\nb 2 y\n");

    tabwrangle()
        .args(["load", "--use-cols", "0,2", "--format", "csv"])
        .arg(&path)
        .assert()
        .success()
        .stdout("f0,f1\na,x\nb,y\n");
}

#[test]
fn load_json_with_conversion() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "t.txt", "1 2.5\n2 3.5\n");

    let output = tabwrangle()
        .args(["--format", "json", "load", "--convert"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["columns"][0]["column_type"], "Int");
    assert_eq!(value["rows"][1]["cells"][1], 3.5);
}

#[test]
fn load_reports_width_mismatch() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "t.txt", "1 2\n3\n");

    tabwrangle()
        .arg("load")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Row width mismatch on line 2"));
}

#[test]
fn load_rejects_unknown_compression() {
    tabwrangle()
        .args(["load", "--compression", "bz2", "nowhere.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported compression"));
}

#[test]
fn dict_prints_last_value() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "p.ini",
        "key1 = val1\nkey2 = val2\n# comment\nkey1 = val3",
    );

    tabwrangle()
        .args(["dict", "--format", "csv"])
        .arg(&path)
        .assert()
        .success()
        .stdout("key,value\nkey1,val3\nkey2,val2\n");
}

#[test]
fn bin_counts_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "x.txt", "0.05 1\n0.15 2\n0.17 3\n0.95 4\n1.5 5\n");

    let output = tabwrangle()
        .args(["bin", "--column", "0", "--width", "0.5", "--min", "0", "--max", "1", "-f", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let counts: Vec<u64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["count"].as_u64().unwrap())
        .collect();
    assert_eq!(counts, vec![3, 1]);
}

#[test]
fn merge_two_files() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", "5\n1\n3\n");
    let b = write_file(&dir, "b.txt", "2\n3\n4\n");

    tabwrangle()
        .args(["merge", "--sort", "--format", "csv"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("set,value\nonly_a,1\nonly_a,5\nonly_b,2\nonly_b,4\ncommon,3\n");
}

#[test]
fn merge_requires_sorted_input() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", "5\n1\n");
    let b = write_file(&dir, "b.txt", "2\n");

    tabwrangle()
        .arg("merge")
        .arg(&a)
        .arg(&b)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not sorted"));
}
