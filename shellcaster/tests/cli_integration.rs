//! End-to-end CLI tests
//!
//! These exercise argument validation and the no-credentials paths, which
//! never reach the network. Runs happen from an empty temp directory so no
//! stray `.env` file can leak credentials into the tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CREDENTIAL_VARS: &[&str] = &[
    "FACEBOOK_PAGE_ID",
    "FACEBOOK_ACCESS_TOKEN",
    "LINKEDIN_ACCESS_TOKEN",
    "LINKEDIN_AUTHOR_URN",
    "X_CONSUMER_KEY",
    "X_CONSUMER_SECRET",
    "X_ACCESS_TOKEN",
    "X_ACCESS_TOKEN_SECRET",
    "BLOGGER_ACCESS_TOKEN",
    "BLOGGER_BLOG_ID",
];

fn shellcaster(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shellcaster").unwrap();
    cmd.current_dir(dir.path());
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_documents_flags_and_exit_codes() {
    let dir = TempDir::new().unwrap();
    shellcaster(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--post"))
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--platform"))
        .stdout(predicate::str::contains("--trends"))
        .stdout(predicate::str::contains("EXIT CODES"));
}

#[test]
fn test_version_flag_works() {
    let dir = TempDir::new().unwrap();
    shellcaster(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shellcaster"));
}

#[test]
fn test_post_and_file_are_mutually_exclusive() {
    let dir = TempDir::new().unwrap();
    shellcaster(&dir)
        .args(["--post", "hello", "--file", "notes.md"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_missing_input_source_fails() {
    let dir = TempDir::new().unwrap();
    shellcaster(&dir)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No post content provided"));
}

#[test]
fn test_non_markdown_file_rejected_before_dispatch() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("post.txt"), "hello").unwrap();

    shellcaster(&dir)
        .args(["--file", "post.txt"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Markdown"));
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    shellcaster(&dir)
        .args(["--file", "missing.md"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_empty_post_content_rejected() {
    let dir = TempDir::new().unwrap();
    shellcaster(&dir)
        .args(["--post", "   "])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_unknown_platform_reported_without_network() {
    let dir = TempDir::new().unwrap();
    shellcaster(&dir)
        .args(["--post", "hello", "--platform", "myspace"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Unsupported platform: myspace"));
}

#[test]
fn test_missing_credentials_skip_is_reported_per_platform() {
    let dir = TempDir::new().unwrap();
    shellcaster(&dir)
        .args(["--post", "hello", "--platform", "facebook"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("[Facebook]"))
        .stdout(predicate::str::contains("FACEBOOK_PAGE_ID"));
}

#[test]
fn test_mixed_unknown_and_unconfigured_platforms_all_reported() {
    let dir = TempDir::new().unwrap();
    shellcaster(&dir)
        .args(["--post", "hello", "--platform", "facebook,myspace"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("[Facebook]"))
        .stdout(predicate::str::contains("[Myspace]"));
}

#[test]
fn test_default_platform_set_covers_all_builtins() {
    let dir = TempDir::new().unwrap();
    let output = shellcaster(&dir)
        .args(["--post", "hello"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for name in ["[Facebook]", "[Linkedin]", "[X]", "[Blogger]"] {
        assert!(stdout.contains(name), "missing {} in: {}", name, stdout);
    }
}

#[test]
fn test_piped_output_has_no_ansi_codes() {
    let dir = TempDir::new().unwrap();
    let output = shellcaster(&dir)
        .args(["--post", "hello", "--platform", "facebook"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        !stdout.contains("\x1b["),
        "Output should not contain ANSI color codes when piped"
    );
}

#[test]
fn test_platform_list_is_trimmed_and_lowercased() {
    let dir = TempDir::new().unwrap();
    shellcaster(&dir)
        .args(["--post", "hello", "--platform", " Facebook , BLOGGER "])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[Facebook]"))
        .stdout(predicate::str::contains("[Blogger]"));
}

#[test]
fn test_trends_requires_x_credentials() {
    let dir = TempDir::new().unwrap();
    shellcaster(&dir)
        .args(["--trends"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("X_CONSUMER_KEY"));
}

#[test]
fn test_trends_invalid_woeid_warns_before_credential_check() {
    let dir = TempDir::new().unwrap();
    shellcaster(&dir)
        .args(["--trends", "notanumber"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid WOEID"));
}

#[test]
fn test_trends_conflicts_with_post() {
    let dir = TempDir::new().unwrap();
    shellcaster(&dir)
        .args(["--post", "hello", "--trends"])
        .assert()
        .failure()
        .code(2);
}
