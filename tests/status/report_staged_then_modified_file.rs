use crate::common::command::{init_repository_dir, run_arvo_command};
use crate::common::file::{FileSpec, append_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn report_staged_then_modified_file(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    run_arvo_command(dir, &["add", "a.txt"]).assert().success();

    run_arvo_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes to be committed:"))
        .stdout(predicate::str::contains("staged:     a.txt"))
        .stdout(predicate::str::contains("Changes not staged for commit:").not());

    append_file(&dir.join("a.txt"), " world");

    run_arvo_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes to be committed:").not())
        .stdout(predicate::str::contains("modified:   a.txt"))
        .stdout(predicate::str::contains("1 tracked, 1 staged"));
}
