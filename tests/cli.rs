//! CLI smoke tests for worldbuild.
//!
//! None of these reach make: they either stop at argument parsing, report
//! on the filesystem, or hit a session that is permanently failed.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const MISSING_SRC: &str = "/nonexistent/worldbuild/src";

fn worldbuild() -> Command {
    let mut cmd = cargo_bin_cmd!("worldbuild");
    for var in [
        "WORLDBUILD_SRC",
        "WORLDBUILD_OBJ",
        "WORLDBUILD_KERNCONF",
        "WORLDBUILD_MAKE_CONF",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_targets() {
    worldbuild()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("buildworld"))
        .stdout(predicate::str::contains("installkernel"));
}

#[test]
fn unknown_command_is_rejected() {
    worldbuild().arg("buildeverything").assert().failure();
}

#[test]
fn missing_source_dir_fails_with_code_zero() {
    for target in ["buildworld", "installworld", "buildkernel", "installkernel"] {
        worldbuild()
            .args(["--src", MISSING_SRC, target])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("code 0"))
            .stderr(predicate::str::contains(MISSING_SRC));
    }
}

#[test]
fn status_shows_configuration() {
    let temp = TempDir::new().unwrap();

    worldbuild()
        .arg("--src")
        .arg(temp.path())
        .args(["--kernconf", "MYKERNEL", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KERNCONF:    MYKERNEL"))
        .stdout(predicate::str::contains("Makefile:    NOT FOUND"));
}

#[test]
fn status_reads_environment() {
    worldbuild()
        .env("WORLDBUILD_OBJ", "/tmp/worldbuild-obj")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Object dir:  /tmp/worldbuild-obj"));
}

#[test]
fn preflight_reports_missing_source_tree() {
    worldbuild()
        .args(["--src", MISSING_SRC, "preflight"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[FAIL] Source tree"));
}
