//! End-to-end tests for the `hc` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn hc() -> Command {
    let mut cmd = Command::cargo_bin("hc").unwrap();
    cmd.env_remove("HC_LOG_LEVEL");
    cmd
}

#[test]
fn test_exact_code() {
    hc().args(["418", "--plain"])
        .assert()
        .success()
        .stdout("Status code 418\nMessage: I'm a teapot\nCode explanation: The HTCPCP server is a teapot\n\n")
        .stderr("");
}

#[test]
fn test_wildcard_pattern() {
    hc().args(["1xx", "-p"])
        .assert()
        .success()
        .stdout(
            "Status code 100\nMessage: Continue\nCode explanation: Request received, please continue\n\n\
             Status code 101\nMessage: Switching Protocols\nCode explanation: Switching to new protocol; obey Upgrade header\n\n\
             Status code 102\nMessage: Processing\nCode explanation: WebDAV; RFC 2518\n\n",
        );
}

#[test]
fn test_search_takes_priority() {
    hc().args(["500", "--search", "TEAPOT", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status code 418\n"))
        .stdout(predicate::str::contains("Status code 500").not());
}

#[test]
fn test_no_arguments_lists_all_codes() {
    let output = hc().arg("--plain").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Status code 100\n"));
    assert!(stdout.contains("Status code 599\nMessage: Network connect timeout error\n"));
    assert_eq!(stdout.matches("Status code ").count(), 76);
}

#[test]
fn test_decorated_output_bolds_code() {
    hc().arg("404")
        .env("CLICOLOR_FORCE", "1")
        .env_remove("NO_COLOR")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status code \u{1b}[1m404\u{1b}[0m\n"))
        .stdout(predicate::str::contains("Message: Not Found\n"))
        .stdout(predicate::str::contains("Code explanation: Nothing matches the given URI\n\n"));
}

#[test]
fn test_plain_output_has_no_escape_codes() {
    hc().args(["404", "--plain"])
        .env("CLICOLOR_FORCE", "1")
        .env_remove("NO_COLOR")
        .assert()
        .success()
        .stdout("Status code 404\nMessage: Not Found\nCode explanation: Nothing matches the given URI\n\n")
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_unknown_code_fails() {
    hc().arg("999")
        .assert()
        .failure()
        .stdout("")
        .stderr("No description found for code: 999\n");
}

#[test]
fn test_unmatched_pattern_fails() {
    hc().arg("6xx")
        .assert()
        .failure()
        .stdout("")
        .stderr("No code found corresponding to: 6xx\n");
}

#[test]
fn test_unmatched_search_fails() {
    hc().args(["-s", "zebra"])
        .assert()
        .failure()
        .stderr("No status code found for search: zebra\n");
}

#[test]
fn test_invalid_regex_reports_error() {
    hc().args(["--search", "(teapot", "--plain"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid regular expression '(teapot'"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    hc().args(["418", "--plain", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Status code 418\n"))
        .stderr(predicate::str::contains("resolving query"));
}
