#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use assert_cmd::Command;
use predicates::str;

#[test]
fn greet_mode_prints_greeting_then_time() {
  let mut cmd = Command::cargo_bin("timeit").unwrap();
  cmd.assert().success().stdout(
    str::is_match(r"\AHello Class! 34-502\nfunction execution time is, [0-9.eE+-]+\n\z")
      .unwrap(),
  );
}

#[test]
fn greet_mode_forwards_name() {
  let mut cmd = Command::cargo_bin("timeit").unwrap();
  cmd
    .args(["--name", "everyone"])
    .assert()
    .success()
    .stdout(str::contains("Hello Class! everyone"));
}

#[test]
fn sleep_mode_rejects_overlong_duration() {
  let mut cmd = Command::cargo_bin("timeit").unwrap();
  cmd
    .args(["--mode", "sleep", "--secs", "1e300"])
    .assert()
    .failure()
    .stderr(str::contains("InvalidDuration"));
}

#[test]
fn sleep_mode_rejects_negative_duration() {
  let mut cmd = Command::cargo_bin("timeit").unwrap();
  cmd
    .args(["--mode", "sleep", "--secs=-0.5"])
    .assert()
    .failure()
    .stderr(str::contains("InvalidDuration"));
}
