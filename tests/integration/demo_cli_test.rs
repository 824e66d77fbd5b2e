//! CLI tests for the gtimg-demo binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{count_sequences, run_bin, write_images, write_instant_config};

fn demo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gtimg-demo").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn missing_directory_exits_one() {
    let temp = TempDir::new().unwrap();
    let config = write_instant_config(temp.path(), 1);
    let missing = temp.path().join("nowhere");

    demo_cmd()
        .arg("--image-dir")
        .arg(&missing)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\x1b]1337").not())
        .stderr(predicate::str::contains("Image directory not found"));
}

#[test]
fn directory_without_images_exits_one_without_sequences() {
    let temp = TempDir::new().unwrap();
    let config = write_instant_config(temp.path(), 1);
    let images = temp.path().join("pics");
    std::fs::create_dir(&images).unwrap();
    write_images(&images, &["notes.txt", "photo.gif"]);

    demo_cmd()
        .arg("--image-dir")
        .arg(&images)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No JPG or PNG images found"));
}

#[test]
fn full_run_completes_with_piped_input() {
    let temp = TempDir::new().unwrap();
    let config = write_instant_config(temp.path(), 3);
    let images = temp.path().join("pics");
    std::fs::create_dir(&images).unwrap();
    write_images(&images, &["one.jpg", "two.png"]);

    let (stdout, stderr, exit_code) = run_bin(
        env!("CARGO_BIN_EXE_gtimg-demo"),
        &[
            "--image-dir",
            images.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ],
        b"\n\n\n\n",
    );

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.starts_with(&format!("Found 2 images in {}\n", images.display())));
    assert_eq!(count_sequences(&stdout), 4 + 3 + 2 + 1 + 3);
    assert!(text.ends_with("Thank you for trying the advanced image features!\n"));
}

#[test]
fn closed_stdin_still_runs_to_completion() {
    let temp = TempDir::new().unwrap();
    let config = write_instant_config(temp.path(), 0);
    write_images(temp.path(), &["only.png"]);

    demo_cmd()
        .arg("--image-dir")
        .arg(temp.path())
        .arg("--config")
        .arg(&config)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Need at least 2 images for the z-index demo."));
}

#[test]
fn invalid_config_exits_one() {
    let temp = TempDir::new().unwrap();
    write_images(temp.path(), &["a.jpg"]);
    let config = temp.path().join("bad.toml");
    std::fs::write(&config, "[demo]\nframe_count = \"lots\"\n").unwrap();

    demo_cmd()
        .arg("--image-dir")
        .arg(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}
