use crate::common;
use crate::common::command::{arvo_commit, init_repository_dir, run_arvo_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn commit_chain_links_each_parent(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let mut heads = vec![common::head_commit_oid(dir)?];

    for n in 1..=3 {
        write_file(FileSpec::new(dir.join(format!("file{n}.txt")), format!("content {n}")));
        run_arvo_command(dir, &["add", "."]).assert().success();
        arvo_commit(dir, &format!("commit {n}")).assert().success();
        heads.push(common::head_commit_oid(dir)?);
    }

    for pair in heads.windows(2) {
        run_arvo_command(dir, &["cat-file", "-p", &pair[1]])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("parent {}", pair[0])));
    }

    run_arvo_command(dir, &["cat-file", "-p", &heads[0]])
        .assert()
        .success()
        .stdout(predicate::str::contains("parent").not());

    Ok(())
}
