use crate::common::command::{init_repository_dir, run_arvo_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use filetime::FileTime;
use predicates::prelude::*;
use rstest::rstest;

// classification follows content hashes, not timestamps
#[rstest]
fn keep_touched_file_staged(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    run_arvo_command(dir, &["add", "a.txt"]).assert().success();

    filetime::set_file_mtime(dir.join("a.txt"), FileTime::from_unix_time(1_000_000, 0))?;

    run_arvo_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("staged:     a.txt"))
        .stdout(predicate::str::contains("modified:").not());

    Ok(())
}
