mod common;
use common::{spv, temp_out, write_basic_events};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_pivot_csv() {
    let src = write_basic_events("export_csv");
    let out = temp_out("export_csv", "csv");

    spv()
        .args([
            "pivot", &src, "--merge", "--export", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("Category,"));
    assert!(content.contains("2024-01-02"));
    assert!(content.contains("TOTAL"));
    assert!(content.contains("X,2,0,0,2"));
}

#[test]
fn test_export_pivot_json_keeps_category_as_string() {
    let src = write_basic_events("export_json");
    let out = temp_out("export_json", "json");

    spv()
        .args([
            "pivot", &src, "--merge", "--export", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let first = &rows.as_array().expect("array of rows")[0];

    assert_eq!(first["Category"], serde_json::json!("X"));
    assert_eq!(first["TOTAL"], serde_json::json!(2.0));
}

#[test]
fn test_export_pivot_xlsx_writes_file() {
    let src = write_basic_events("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    spv()
        .args([
            "pivot", &src, "--merge", "--export", "xlsx", "--file", &out,
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let src = write_basic_events("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "already here").unwrap();

    spv()
        .args([
            "pivot", &src, "--merge", "--export", "csv", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    spv()
        .args([
            "pivot", &src, "--merge", "--export", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Category,"));
}

#[test]
fn test_export_without_file_is_rejected() {
    let src = write_basic_events("export_no_file");

    spv()
        .args(["pivot", &src, "--merge", "--export", "csv"])
        .assert()
        .failure()
        .stderr(contains("--file"));

    spv()
        .args(["matrix", &src, "--export", "csv"])
        .assert()
        .failure()
        .stderr(contains("--file"));
}

#[test]
fn test_export_multiple_sources_requires_merge() {
    let a = write_basic_events("export_multi_a");
    let b = write_basic_events("export_multi_b");
    let out = temp_out("export_multi", "csv");

    spv()
        .args(["pivot", &a, &b, "--export", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("--merge"));
}
