use crate::common;
use crate::common::command::{init_repository_dir, run_arvo_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_initial_commit_in_fresh_repository(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let root_oid = common::head_commit_oid(dir)?;

    run_arvo_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("commit {root_oid}")).count(1))
        .stdout(predicate::str::contains("Author: arvo <arvo@local>"))
        .stdout(predicate::str::contains("    Initial commit"));

    Ok(())
}
