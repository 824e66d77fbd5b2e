//! CLI tests for the one-shot gtimg binary

use std::fs;
use tempfile::TempDir;

use crate::helpers::run_bin;

fn run_gtimg(args: &[&str]) -> (Vec<u8>, String, i32) {
    run_bin(env!("CARGO_BIN_EXE_gtimg"), args, b"")
}

#[test]
fn ten_byte_file_prints_exact_sequence() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ten.bin");
    fs::write(&path, (0u8..10).collect::<Vec<_>>()).unwrap();

    let (stdout, stderr, exit_code) = run_gtimg(&[path.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, b"\x1b]1337;File=inline=1:AAECAwQFBgcICQ==\x07");
}

#[test]
fn missing_argument_prints_usage_and_exits_one() {
    let (stdout, stderr, exit_code) = run_gtimg(&[]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Usage: gtimg <IMAGE_PATH>"));
    assert!(stdout.is_empty());
}

#[test]
fn missing_file_reports_error_without_output() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.png");

    let (stdout, stderr, exit_code) = run_gtimg(&[path.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Image file not found"));
    assert!(stdout.is_empty());
}

#[test]
fn display_flags_are_emitted_after_inline() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("hi.png");
    fs::write(&path, b"hi").unwrap();

    let (stdout, _stderr, exit_code) = run_gtimg(&[
        path.to_str().unwrap(),
        "--size",
        "--width",
        "100%",
        "--preserve-aspect-ratio",
        "1",
        "-o",
        "z-index=2",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        "\x1b]1337;File=inline=1;size=2;width=100%;preserveAspectRatio=1;z-index=2:aGk=\x07"
    );
}

#[test]
fn help_lists_display_flags() {
    let (stdout, _stderr, exit_code) = run_gtimg(&["--help"]);
    let stdout = String::from_utf8(stdout).unwrap();

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("IMAGE_PATH"));
    assert!(stdout.contains("--width"));
    assert!(stdout.contains("--option"));
}
