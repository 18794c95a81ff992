#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn spv() -> Command {
    cargo_bin_cmd!("shiftpivot")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a fixture file into the system temp dir and return its path
pub fn write_fixture(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fixture.{}", name, ext));
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Small event source covering three categories across two shifts
pub fn write_basic_events(name: &str) -> String {
    write_fixture(
        name,
        "csv",
        "category,timestamp\n\
         X,2024-01-01 07:00:00\n\
         X,2024-01-01 23:30:00\n\
         Y,2024-01-03 10:00:00\n",
    )
}
