use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn lpost(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lpost").unwrap();
    cmd.arg("--data-dir").arg(data_dir).env("NO_COLOR", "1");
    cmd
}

fn write_image(dir: &Path, name: &str, len: usize) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut bytes = vec![0x89, b'P', b'N', b'G'];
    bytes.resize(len, 1);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_empty_gallery_lists_hint() {
    let temp = TempDir::new().unwrap();
    lpost(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts yet"));
}

#[test]
fn test_add_then_list_and_view() {
    let temp = TempDir::new().unwrap();
    let image = write_image(temp.path(), "sunset.png", 3000);
    let data = temp.path().join("data");

    lpost(&data)
        .args(["add", image.to_str().unwrap(), "-t", "Sunset", "-d", "by the sea"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post added: Sunset"));

    lpost(&data)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Sunset · by the sea"));

    lpost(&data)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("image/png"))
        .stdout(predicate::str::contains("by the sea"));
}

#[test]
fn test_unsupported_format_is_rejected() {
    let temp = TempDir::new().unwrap();
    let image = write_image(temp.path(), "scan.bmp", 100);

    lpost(temp.path())
        .args(["add", image.to_str().unwrap(), "-t", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported image format: image/bmp"));

    lpost(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts yet"));
}

#[test]
fn test_too_large_is_rejected() {
    let temp = TempDir::new().unwrap();
    let image = write_image(temp.path(), "huge.png", 13 * 1024 * 1024);

    lpost(&temp.path().join("data"))
        .args(["add", image.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image too large"));
}

#[test]
fn test_link_and_download() {
    let temp = TempDir::new().unwrap();
    let image = write_image(temp.path(), "pic.png", 64);
    let data = temp.path().join("data");
    let out = temp.path().join("out");

    lpost(&data)
        .args(["add", image.to_str().unwrap(), "-t", "Pic"])
        .assert()
        .success();

    lpost(&data)
        .args(["link", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("data:image/png;base64,"));

    lpost(&data)
        .args(["download", "1", "-o", out.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(
        fs::read(out.join("Pic.png")).unwrap(),
        fs::read(&image).unwrap()
    );
}

#[test]
fn test_settings_merge() {
    let temp = TempDir::new().unwrap();

    lpost(temp.path())
        .args(["settings", "theme", "dark"])
        .assert()
        .success();

    lpost(temp.path())
        .args(["settings", "animations", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme = dark"))
        .stdout(predicate::str::contains("animations = off"));

    lpost(temp.path())
        .args(["settings", "theme", "neon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn test_reset_requires_confirmation() {
    let temp = TempDir::new().unwrap();
    let image = write_image(temp.path(), "a.png", 10);
    let data = temp.path().join("data");

    lpost(&data)
        .args(["add", image.to_str().unwrap(), "-t", "Keep"])
        .assert()
        .success();

    lpost(&data)
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    lpost(&data)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("Keep"));

    lpost(&data)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Local data reset"));

    lpost(&data)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("No posts yet"));
}

#[test]
fn test_reset_recovers_corrupt_posts_record() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("rag_posts_v1.json"), "{not json").unwrap();

    lpost(&data).arg("list").assert().failure();

    lpost(&data)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Local data reset"));

    assert!(!data.join("rag_posts_v1.json").exists());
    lpost(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts yet"));
}

#[test]
fn test_unknown_post_fails() {
    let temp = TempDir::new().unwrap();
    lpost(temp.path())
        .args(["view", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Post not found: 3"));
}
