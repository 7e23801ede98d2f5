use crate::common::command::{repository_dir, run_arvo_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_before_init_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));

    run_arvo_command(dir, &["add", "a.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not an arvo repository"));

    assert!(!dir.join(".arvo").exists());

    Ok(())
}
