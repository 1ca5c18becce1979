//! CLI end-to-end tests
//!
//! Tests for the convertforge command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the convertforge binary
#[allow(deprecated)]
fn convertforge_cmd() -> Command {
    Command::cargo_bin("convertforge").unwrap()
}

fn write_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 10, 10, 128]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = convertforge_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = convertforge_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("convertforge "));
}

#[test]
fn test_cli_check_tools_command() {
    let mut cmd = convertforge_cmd();
    cmd.arg("check-tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("ffmpeg"))
        .stdout(predicate::str::contains("heif-enc"));
}

#[test]
fn test_cli_formats_lists_all_kinds() {
    let mut cmd = convertforge_cmd();
    cmd.arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("image:"))
        .stdout(predicate::str::contains("audio:"))
        .stdout(predicate::str::contains("AUDIO (Extract from Video)"));
}

#[test]
fn test_cli_formats_json_for_one_kind() {
    let output = convertforge_cmd()
        .args(["formats", "--kind", "audio", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listing.as_array().unwrap().len(), 1);
    assert_eq!(listing[0]["kind"], "audio");
    assert_eq!(listing[0]["targets"][6]["extension"], "flac");
}

#[test]
fn test_cli_validate_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("convertforge.toml");
    fs::write(&config, "[limits]\nmax_files = 5\n").unwrap();

    let mut cmd = convertforge_cmd();
    cmd.args(["validate", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Max files per batch: 5"));
}

#[test]
fn test_cli_validate_rejects_bad_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("convertforge.toml");
    fs::write(&config, "[output]\nsubfolder_name = \"a|b\"\n").unwrap();

    let mut cmd = convertforge_cmd();
    cmd.args(["validate", config.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_cli_convert_images_into_subfolder() {
    let dir = tempdir().unwrap();
    let a = write_png(dir.path(), "a.png");
    let b = write_png(dir.path(), "b.png");
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    let mut cmd = convertforge_cmd();
    cmd.current_dir(dir.path())
        .args(["convert", "--kind", "image", "--to", "JPG", "--subfolder", "Done", "-o"])
        .arg(&out)
        .arg(&a)
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("Converting 2/2: b.png"))
        .stdout(predicate::str::contains("Success: 2"))
        .stdout(predicate::str::contains("Errors: 0"))
        .stdout(predicate::str::contains("Converted 2 images to JPG"));

    assert!(out.join("Done").join("a.jpg").is_file());
    assert!(out.join("Done").join("b.jpg").is_file());
}

#[test]
fn test_cli_convert_json_report() {
    let dir = tempdir().unwrap();
    let a = write_png(dir.path(), "a.png");
    let broken = dir.path().join("broken.png");
    fs::write(&broken, b"not an image").unwrap();

    let output = convertforge_cmd()
        .current_dir(dir.path())
        .args(["convert", "--kind", "image", "--to", "bmp", "--json", "-o"])
        .arg(dir.path())
        .arg(&a)
        .arg(&broken)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 2);
    assert_eq!(report["succeeded"], 1);
    assert_eq!(report["failed"], 1);
    assert_eq!(report["failures"][0]["file_name"], "broken.png");
    assert_eq!(report["resulting_format"], "bmp");
}

#[test]
fn test_cli_convert_without_output_fails() {
    let dir = tempdir().unwrap();
    let a = write_png(dir.path(), "a.png");

    let mut cmd = convertforge_cmd();
    cmd.current_dir(dir.path())
        .args(["convert", "--kind", "image", "--to", "png"])
        .arg(&a)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no output folder selected"));
}

#[test]
fn test_cli_convert_unknown_target_fails() {
    let dir = tempdir().unwrap();
    let a = write_png(dir.path(), "a.png");

    let mut cmd = convertforge_cmd();
    cmd.current_dir(dir.path())
        .args(["convert", "--kind", "image", "--to", "TIFF", "-o"])
        .arg(dir.path())
        .arg(&a)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown image target format: TIFF"));
}

#[test]
fn test_cli_convert_source_filter_rejects_everything() {
    let dir = tempdir().unwrap();
    let a = write_png(dir.path(), "a.png");

    let mut cmd = convertforge_cmd();
    cmd.current_dir(dir.path())
        .args(["convert", "--kind", "image", "--from", "JPG", "--to", "png", "-o"])
        .arg(dir.path())
        .arg(&a)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid JPG files selected!"));
}

#[test]
fn test_cli_convert_exclude_and_cap() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("convertforge.toml");
    fs::write(&config, "[limits]\nmax_files = 2\n").unwrap();
    let a = write_png(dir.path(), "a.png");
    let b = write_png(dir.path(), "b.png");
    let c = write_png(dir.path(), "c.png");
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    let mut cmd = convertforge_cmd();
    cmd.current_dir(dir.path())
        .args(["convert", "--kind", "image", "--to", "webp", "--exclude"])
        .arg(&a)
        .arg("-o")
        .arg(&out)
        .arg(&a)
        .arg(&b)
        .arg(&c)
        .assert()
        .success()
        .stderr(predicate::str::contains("Maximum 2 files allowed"))
        .stdout(predicate::str::contains("Processed 1 images"));

    assert!(!out.join("a.webp").exists());
    assert!(out.join("b.webp").is_file());
    assert!(!out.join("c.webp").exists());
}
