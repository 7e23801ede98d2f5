use crate::common::command::{arvo_commit, init_repository_dir, run_arvo_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_multiple_commits_in_medium_format(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    for n in 1..=2 {
        write_file(FileSpec::new(dir.join(format!("file{n}.txt")), format!("content {n}")));
        run_arvo_command(dir, &["add", "."]).assert().success();
        arvo_commit(dir, &format!("Commit {n}\n\nBody of commit {n}"))
            .assert()
            .success();
    }

    let output = run_arvo_command(dir, &["log"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;

    let headers = output
        .lines()
        .filter(|line| line.starts_with("commit "))
        .count();
    assert_eq!(headers, 3);

    let second = output.find("    Commit 2").ok_or("missing Commit 2")?;
    let first = output.find("    Commit 1").ok_or("missing Commit 1")?;
    let root = output.find("    Initial commit").ok_or("missing root")?;
    assert!(second < first && first < root);

    assert!(output.contains("Author: fake_user <fake_email@email.com>"));
    assert!(output.contains("Date:   Sun Jan 1 12:00:00 2023 +0000"));
    assert!(output.contains("    Body of commit 2"));

    Ok(())
}
