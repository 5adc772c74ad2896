//! Integration tests for the appshell CLI skeleton: help, version, argument errors.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

pub fn appshell() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("appshell"));
    cmd.env("NO_COLOR", "1")
        .env("APPSHELL_CONFIG", "/nonexistent/appshell/config.yaml")
        .env_remove("APPSHELL_REST_URL")
        .env_remove("APPSHELL_APPLICATION")
        .env_remove("APPSHELL_CLIENT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    appshell().assert().code(2).stderr(predicate::str::contains(
        "Administrative shell for the application-management platform",
    ));
}

#[test]
fn test_cli_no_args_without_no_color_shows_help() {
    appshell()
        .env_remove("NO_COLOR")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_help_lists_list_services() {
    appshell()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list-services"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    appshell()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("appshell 0.1.0"));
}

#[test]
fn test_list_services_help_describes_command() {
    appshell()
        .args(["list-services", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Lists all deployed services on the current application",
        ));
}

#[test]
fn test_unknown_client_is_rejected_by_parser() {
    appshell()
        .args(["list-services", "--client", "soap"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown client 'soap'"));
}

#[test]
fn test_invalid_url_fails_before_any_request() {
    appshell()
        .args(["list-services", "--url", "manager:8100"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration"))
        .stderr(predicate::str::contains("Invalid management URL"));
}

#[test]
fn test_invalid_url_json_error_code() {
    appshell()
        .args(["list-services", "--json", "--url", "manager:8100"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""code": "invalid_config""#));
}
