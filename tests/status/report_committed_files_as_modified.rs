use crate::common::command::{committed_repository_dir, run_arvo_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

// status compares against the staging index, not the last commit
#[rstest]
fn report_committed_files_as_modified(committed_repository_dir: TempDir) {
    run_arvo_command(committed_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes not staged for commit:"))
        .stdout(predicate::str::contains("modified:   1.txt"))
        .stdout(predicate::str::contains("modified:   a/2.txt"))
        .stdout(predicate::str::contains("modified:   a/b/3.py"))
        .stdout(predicate::str::contains("3 tracked, 0 staged"));
}
