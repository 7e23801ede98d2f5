use crate::common;
use crate::common::command::{init_repository_dir, run_arvo_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn commit_falls_back_to_configured_author(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    run_arvo_command(dir, &["add", "a.txt"]).assert().success();

    run_arvo_command(dir, &["commit", "-m", "first"])
        .env_remove("ARVO_AUTHOR_NAME")
        .env_remove("ARVO_AUTHOR_EMAIL")
        .env_remove("ARVO_AUTHOR_DATE")
        .assert()
        .success();

    let commit_oid = common::head_commit_oid(dir)?;
    run_arvo_command(dir, &["cat-file", "-p", &commit_oid])
        .assert()
        .success()
        .stdout(predicate::str::contains("author Ann <ann@x.io>"));

    Ok(())
}
