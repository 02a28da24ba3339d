//! Command-line tests.
//!
//! Run the built binary and check that fatal errors reach stderr even when
//! logging is switched off.

use std::process::Command;

use super::test_utils::{file_names, write_image};

fn slicer_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_image-slicer"));
    cmd.env("RUST_LOG", "off")
        .env_remove("SLICER_DESTINATION")
        .env_remove("SLICER_WORKERS")
        .env_remove("SLICER_MERGE_REMAINDER");
    cmd
}

#[test]
fn test_relative_source_reported_on_stderr() {
    let output = slicer_command()
        .args(["relative/images", "200", "100"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid path to folder with images"), "{stderr}");
    assert!(stderr.contains("Try again"), "{stderr}");
}

#[test]
fn test_zero_width_reported_without_slicing() {
    let dir = tempfile::tempdir().unwrap();
    write_image(dir.path(), "sample.png", 40, 40);

    let output = slicer_command()
        .arg(dir.path())
        .args(["0", "10"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid slice size"), "{stderr}");
    assert_eq!(file_names(dir.path()), vec!["sample.png"]);
}

#[test]
fn test_relative_destination_reported() {
    let dir = tempfile::tempdir().unwrap();

    let output = slicer_command()
        .arg(dir.path())
        .args(["10", "10", "--destination", "out"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid path to folder for slices"), "{stderr}");
}

#[test]
fn test_successful_run() {
    let dir = tempfile::tempdir().unwrap();
    write_image(dir.path(), "sample.png", 445, 306);

    let output = slicer_command()
        .arg(dir.path())
        .args(["200", "100", "--merge-remainder", "--workers", "2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(file_names(dir.path()).len(), 7);
}
