use crate::common;
use crate::common::command::{committed_repository_dir, run_arvo_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn cat_file_prints_stored_object(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let commit_oid = common::head_commit_oid(dir)?;

    let raw = run_arvo_command(dir, &["cat-file", &commit_oid])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let commit: serde_json::Value = serde_json::from_slice(&raw)?;
    assert_eq!(commit["hash"], commit_oid.as_str());
    assert_eq!(commit["message"], "First commit");

    let tree_oid = commit["tree"].as_str().ok_or("commit has no tree")?;
    run_arvo_command(dir, &["cat-file", "-p", &tree_oid[..10]])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.txt"))
        .stdout(predicate::str::contains("a/2.txt"))
        .stdout(predicate::str::contains("a/b/3.py"));

    Ok(())
}
