mod common;
use common::{spv, write_fixture};
use predicates::str::contains;

#[test]
fn test_tracker_duration_falls_back_to_start_end() {
    // No minutes column; the interval crosses midnight and still resolves
    // to 115 minutes.
    let src = write_fixture(
        "tracker_wrap",
        "csv",
        "category,timestamp,start,end\n\
         JAM,2024-01-01 22:10:00,22:10:00,00:05:00\n",
    );

    spv()
        .args(["tracker", &src, "--copy"])
        .assert()
        .success()
        .stdout("JAM\t1\t115.0\n");
}

#[test]
fn test_tracker_raw_rows_without_duration_are_dropped() {
    let src = write_fixture(
        "tracker_zero",
        "csv",
        "category,timestamp,start,end\n\
         JAM,2024-01-01 10:00:00,10:00:00,10:00:00\n",
    );

    spv()
        .args(["tracker", &src, "--copy"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_tracker_rollup_keeps_rows_with_any_contribution() {
    // Pre-aggregated shape: a row survives if either the count or the
    // minutes contribute something.
    let src = write_fixture(
        "tracker_rollup",
        "csv",
        "name,frequency,minutes\n\
         A,0,0\n\
         B,2,30.5\n\
         C,0,10\n",
    );

    spv()
        .args(["tracker", &src, "--copy"])
        .assert()
        .success()
        .stdout("B\t2\t30.5\nC\t0\t10.0\n");
}

#[test]
fn test_tracker_avg_uses_at_least_one_occurrence() {
    let src = write_fixture(
        "tracker_avg",
        "csv",
        "name,frequency,minutes\n\
         B,2,30.5\n\
         C,0,10\n",
    );

    // C has count 0 but the average divides by max(count, 1).
    spv()
        .args(["tracker", &src, "--avg", "--copy"])
        .assert()
        .success()
        .stdout("B\t2\t30.5\t15.3\nC\t0\t10.0\t10.0\n");
}

#[test]
fn test_tracker_merges_case_variants_across_files() {
    let a = write_fixture(
        "tracker_multi_a",
        "csv",
        "name,frequency,minutes\njam,1,5\n",
    );
    let b = write_fixture(
        "tracker_multi_b",
        "csv",
        "name,frequency,minutes\nJAM,2,7\n",
    );

    spv()
        .args(["tracker", &a, &b, "--copy"])
        .assert()
        .success()
        .stdout("jam\t3\t12.0\n");
}

#[test]
fn test_tracker_table_prints_grand_total() {
    let src = write_fixture(
        "tracker_total",
        "csv",
        "name,frequency,minutes\nA,2,30\nB,1,10\n",
    );

    spv()
        .args(["tracker", &src])
        .assert()
        .success()
        .stdout(contains("Total: 3 occurrences, 40.0 minutes"));
}
