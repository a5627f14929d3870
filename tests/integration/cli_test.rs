use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn netutils() -> Command {
    let mut cmd = Command::cargo_bin("netutils").unwrap();
    cmd.env_remove("NETUTILS_STRICT").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_every_subcommand() {
    let output = netutils().arg("--help").output().unwrap();
    assert!(output.status.success());

    let help = String::from_utf8(output.stdout).unwrap();
    for name in ["address", "hostname", "ping", "os", "ram", "disk", "completions"] {
        assert!(help.contains(name), "help is missing {}", name);
    }
}

#[test]
fn test_no_arguments_prints_help_and_fails() {
    netutils()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_ping_without_host_fails_before_running_anything() {
    netutils()
        .arg("ping")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Please provide a host to ping"));
}

#[test]
fn test_ping_with_blank_host_fails() {
    netutils()
        .args(["ping", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please provide a host to ping"));
}

#[test]
fn test_ping_rejects_option_like_host() {
    netutils()
        .args(["ping", "--", "-f"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot start with '-'"));
}

#[test]
fn test_hostname_prints_label() {
    netutils()
        .arg("hostname")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Host Name:"));
}

#[test]
fn test_address_prints_heading() {
    netutils()
        .arg("ip")
        .assert()
        .success()
        .stdout(predicate::str::contains("IP Addresses:"));
}

#[test]
fn test_version_flag() {
    netutils()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_bash_completions() {
    netutils()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("netutils"));
}

#[test]
fn test_unknown_shell_is_rejected() {
    netutils()
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}
