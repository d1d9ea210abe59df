use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use synolint::test_utils::{TestTree, long_name};

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("synolint").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--quiet").and(contains("--json")).and(contains("--color")));
}

#[test]
fn version_flag() {
    cmd().arg("--version").assert().success().stdout(contains("synolint"));
}

#[test]
fn usage_error_without_paths() {
    cmd().assert().code(2).stdout("").stderr(contains("<PATH>"));
}

#[test]
fn unknown_color_mode_is_usage_error() {
    let tree = TestTree::new();
    cmd()
        .args(["--color", "sometimes"])
        .arg(tree.path())
        .assert()
        .code(2);
}

#[test]
fn clean_tree_success() {
    let tree = TestTree::new();
    tree.add_file("fine.txt");
    cmd()
        .arg(tree.path())
        .assert()
        .success()
        .stdout("")
        .stderr(contains("All good"));
}

#[test]
fn violation_fails_with_path_on_stdout() {
    let tree = TestTree::new();
    let bad = tree.add_file(&long_name("bad-"));
    cmd()
        .arg("-q")
        .arg(tree.path())
        .assert()
        .code(1)
        .stdout(format!("{}\n", bad.display()))
        .stderr("");
}

#[test]
fn json_empty_array_when_clean() {
    let tree = TestTree::new();
    cmd()
        .args(["-q", "-j"])
        .arg(tree.path())
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn color_always_still_keeps_stdout_plain() {
    let tree = TestTree::new();
    let bad = tree.add_file(&long_name("bad-"));
    cmd()
        .args(["--color", "always"])
        .arg(tree.path())
        .assert()
        .code(1)
        .stdout(format!("{}\n", bad.display()))
        .stderr(contains("Heads up"));
}
