use crate::common;
use crate::common::command::{arvo_commit, init_repository_dir, run_arvo_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_multiple_commits_in_oneline_format(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let mut expected = vec![format!("{} Initial commit", &common::head_commit_oid(dir)?[..8])];

    for n in 1..=3 {
        write_file(FileSpec::new(dir.join(format!("file{n}.txt")), format!("content {n}")));
        run_arvo_command(dir, &["add", "."]).assert().success();
        arvo_commit(dir, &format!("Commit {n}\n\nignored body"))
            .assert()
            .success();
        expected.push(format!("{} Commit {n}", &common::head_commit_oid(dir)?[..8]));
    }
    expected.reverse();

    let output = run_arvo_command(dir, &["log", "--oneline"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    pretty_assertions::assert_eq!(
        String::from_utf8(output)?.lines().collect::<Vec<_>>(),
        expected
    );

    Ok(())
}
