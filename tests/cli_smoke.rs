#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! None of these reach the network: they either exit before resolving
//! secrets or fail on a missing secret first.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn translatejp(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("translatejp").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("DISCORD_TOKEN")
        .env_remove("DEEPL_API_KEY")
        .env_remove("GOOGLE_APPLICATION_CREDENTIALS_JSON")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    translatejp(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("translates Japanese"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("translate"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    translatejp(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_serve_without_secrets_exits_with_config_code() {
    let home = TempDir::new().unwrap();
    translatejp(&home)
        .arg("serve")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("discord.token"))
        .stderr(predicate::str::contains("DISCORD_TOKEN"));
}

#[test]
fn test_default_command_is_serve() {
    let home = TempDir::new().unwrap();
    translatejp(&home)
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Missing required configuration"));
}

#[test]
fn test_missing_ocr_credentials_is_fatal() {
    let home = TempDir::new().unwrap();
    translatejp(&home)
        .env("DISCORD_TOKEN", "token")
        .env("DEEPL_API_KEY", "key:fx")
        .arg("serve")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("GOOGLE_APPLICATION_CREDENTIALS_JSON"));
}

#[test]
fn test_invalid_ocr_credentials_is_fatal() {
    let home = TempDir::new().unwrap();
    translatejp(&home)
        .env("DISCORD_TOKEN", "token")
        .env("DEEPL_API_KEY", "key:fx")
        .env("GOOGLE_APPLICATION_CREDENTIALS_JSON", "{not json")
        .arg("translate")
        .args(["--text", "こんにちは"])
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Invalid OCR credentials"));
}

#[test]
fn test_malformed_config_file_is_fatal() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("translatejp");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[deepl\n").unwrap();

    translatejp(&home)
        .arg("configure")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_configure_init_writes_starter_file() {
    let home = TempDir::new().unwrap();
    translatejp(&home)
        .args(["configure", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let written = std::fs::read_to_string(home.path().join("translatejp/config.toml")).unwrap();
    assert!(written.contains("[vision]"));

    translatejp(&home)
        .args(["configure", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_configure_shows_masked_secrets() {
    let home = TempDir::new().unwrap();
    let credentials = include_str!("fixtures/service_account.json");

    translatejp(&home)
        .env("NO_COLOR", "1")
        .env("DISCORD_TOKEN", "MTAx.discord.secret-token-value")
        .env("DEEPL_API_KEY", "0123456789abcdef:fx")
        .env("GOOGLE_APPLICATION_CREDENTIALS_JSON", credentials)
        .arg("configure")
        .assert()
        .success()
        .stdout(predicate::str::contains("api-free.deepl.com"))
        .stdout(predicate::str::contains("ocr-bot@translatejp-test.iam.gserviceaccount.com"))
        .stdout(predicate::str::contains("secret-token-value").not())
        .stdout(predicate::str::contains("cdef:fx").not());
}
