use crate::common::command::{init_repository_dir, run_arvo_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn list_modified_files_in_diff(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    write_file(FileSpec::new(dir.join("b.csv"), "x,y".to_string()));
    write_file(FileSpec::new(dir.join("c.md"), "# c".to_string()));
    run_arvo_command(dir, &["add", "a.txt", "b.csv"]).assert().success();
    write_file(FileSpec::new(dir.join("b.csv"), "x,y,z".to_string()));

    let output = run_arvo_command(dir, &["diff"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output = String::from_utf8(output)?;
    pretty_assertions::assert_eq!(
        output.lines().map(str::trim).collect::<Vec<_>>(),
        vec!["modified:   b.csv", "modified:   c.md"]
    );

    Ok(())
}
