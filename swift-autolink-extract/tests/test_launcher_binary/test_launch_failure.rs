use predicates::prelude::*;
use serial_test::serial;

use crate::common;

#[test]
#[serial]
fn test_launch_failure_when_xcrun_is_missing() {
    common::FakePath::new()
        .command()
        .arg("a.o")
        .assert()
        .code(127)
        .stdout("")
        .stderr(
            predicate::str::starts_with("swift_autolink_extract: Error: Error resolving 'xcrun'")
                .and(predicate::str::ends_with(
                    "Is 'xcrun' installed, executable and in the PATH?\n",
                )),
        );
}

#[test]
#[serial]
fn test_launch_failure_when_xcrun_has_a_bad_interpreter() {
    let fake = common::FakePath::new().with_script("xcrun", "/does/not/exist/sh", "exit 0");
    let expected = format!(
        "swift_autolink_extract: Error: Error launching '{}'",
        fake.join("xcrun").display()
    );

    fake.command()
        .assert()
        .code(127)
        .stdout("")
        .stderr(predicate::str::starts_with(expected));
}

#[test]
#[serial]
fn test_successful_run_writes_nothing_to_stderr() {
    common::echo_xcrun()
        .command()
        .arg("a.o")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
#[serial]
fn test_debug_log_shows_arguments_pid_and_status() {
    common::echo_xcrun()
        .command()
        .env("SWIFT_AUTOLINK_EXTRACT_LOG", "debug")
        .arg("bar baz")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("Debug: Running '")
                .and(predicate::str::contains(
                    "with arguments: swift-frontend --driver-mode=swift-autolink-extract bar baz",
                ))
                .and(predicate::str::is_match(r"started with pid [0-9]+\n").unwrap())
                .and(predicate::str::contains("terminated with exit status: 0")),
        );
}
