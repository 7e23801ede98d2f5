use crate::common;
use crate::common::command::{arvo_commit, committed_repository_dir, run_arvo_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn commit_with_nothing_staged_fails(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let head_before = common::head_commit_oid(dir)?;
    let objects_before = common::stored_objects(dir);

    arvo_commit(dir, "second")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No files staged for commit"));

    assert_eq!(common::head_commit_oid(dir)?, head_before);
    assert_eq!(common::stored_objects(dir), objects_before);

    run_arvo_command(dir, &["log", "--oneline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First commit"))
        .stdout(predicate::str::contains("second").not());

    Ok(())
}
