mod common;
use common::{spv, write_fixture};
use predicates::str::contains;

fn status_doc(name: &str) -> String {
    write_fixture(
        name,
        "json",
        r#"{"data":[
            {"equipId":"RLTC-01","equipLineNo":"7","runTime":120,"runCount":2,
             "activeRunTime":60,"troubleTime":"30","troubleCount":1},
            {"equipId":"OTHER-99","runTime":999,"runCount":9}
        ]}"#,
    )
}

#[test]
fn test_status_all_shifts_coalesce_to_one_range() {
    let doc = status_doc("status_all_ranges");

    spv()
        .args(["status", &doc, "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("1 range(s):"))
        .stdout(contains("2024-01-01 06:00:00 .. 2024-01-02 05:59:59"));
}

#[test]
fn test_status_day_and_night_keep_two_ranges() {
    let doc = status_doc("status_two_ranges");

    spv()
        .args(["status", &doc, "--date", "2024-01-01", "--day", "--night"])
        .assert()
        .success()
        .stdout(contains("2 range(s):"))
        .stdout(contains("2024-01-01 06:00:00 .. 2024-01-01 13:59:59"))
        .stdout(contains("2024-01-01 22:00:00 .. 2024-01-02 05:59:59"));
}

#[test]
fn test_status_equipment_substring_match_and_sums() {
    let doc = status_doc("status_eqp");

    // Case-insensitive substring match keeps only the RLTC record; its
    // string-typed troubleTime still sums.
    spv()
        .args(["status", &doc, "--date", "2024-01-01", "--eqp", "rltc"])
        .assert()
        .success()
        .stdout(contains("Matched 1 record(s)."))
        .stdout(contains("Run"))
        .stdout(contains("120"))
        .stdout(contains("30"));
}

#[test]
fn test_status_line_number_matches_exactly() {
    let doc = status_doc("status_line");

    spv()
        .args(["status", &doc, "--date", "2024-01-01", "--line", "7"])
        .assert()
        .success()
        .stdout(contains("Matched 1 record(s)."));
}

#[test]
fn test_status_rounds_fractional_timer_values() {
    let doc = write_fixture(
        "status_fractional",
        "json",
        r#"[{"equipId":"A","runTime":120.5,"runCount":1}]"#,
    );

    spv()
        .args(["status", &doc, "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("121"));
}

#[test]
fn test_status_accepts_bare_array_root() {
    let doc = write_fixture(
        "status_bare",
        "json",
        r#"[{"equipId":"A","runTime":10,"runCount":1}]"#,
    );

    spv()
        .args(["status", &doc, "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("Matched 1 record(s)."));
}

#[test]
fn test_status_rejects_document_without_records() {
    let doc = write_fixture("status_norecords", "json", r#"{"foo": 1}"#);

    spv()
        .args(["status", &doc, "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("record array"));
}

#[test]
fn test_status_invalid_date_is_fatal() {
    let doc = status_doc("status_bad_date");

    spv()
        .args(["status", &doc, "--date", "01/01/2024"])
        .assert()
        .failure();
}
