mod common;
use common::{spv, write_fixture};

fn matrix_pair(name: &str) -> (String, String) {
    let a = write_fixture(
        &format!("{name}_a"),
        "csv",
        "Alarm,2024-01-01,2024-01-02\n\
         A,1,2\n\
         TOTAL,1,2\n",
    );
    let b = write_fixture(
        &format!("{name}_b"),
        "csv",
        "Alarm,2024-01-02,2024-01-03\n\
         A,3,0\n\
         B,0,0\n",
    );
    (a, b)
}

#[test]
fn test_matrix_merge_sums_overlapping_cells() {
    let (a, b) = matrix_pair("matrix_merge");

    // Overlapping 2024-01-02 cells sum, the TOTAL row is skipped and the
    // all-zero B row is dropped from the merged result.
    spv()
        .args(["matrix", &a, &b, "--copy"])
        .assert()
        .success()
        .stdout("A\t1\t5\t0\n");
}

#[test]
fn test_matrix_merge_is_order_independent() {
    let (a, b) = matrix_pair("matrix_order");

    let ab = spv().args(["matrix", &a, &b, "--copy"]).output().unwrap();
    let ba = spv().args(["matrix", &b, &a, "--copy"]).output().unwrap();

    assert!(ab.status.success());
    assert_eq!(ab.stdout, ba.stdout);
}

#[test]
fn test_matrix_single_file_passes_through() {
    let src = write_fixture(
        "matrix_single",
        "csv",
        "Alarm,2024-06-01,2024-06-02\n\
         JAM,4,1\n",
    );

    spv()
        .args(["matrix", &src, "--copy"])
        .assert()
        .success()
        .stdout("JAM\t4\t1\n");
}
