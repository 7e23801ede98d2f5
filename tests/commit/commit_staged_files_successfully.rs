use crate::common;
use crate::common::command::{generate_random_author, init_repository_dir, run_arvo_command};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn commit_staged_files_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let root_oid = common::head_commit_oid(dir)?;

    let file_count = (1..=5).fake::<usize>();
    let files = write_generated_files(dir, file_count);
    run_arvo_command(dir, &["add", "."]).assert().success();

    let author = generate_random_author();
    let message = Words(3..6).fake::<Vec<String>>().join(" ");

    let commit_excerpt_raw = run_arvo_command(dir, &["commit", "-m", &message])
        .envs(vec![
            ("ARVO_AUTHOR_NAME", &author.name),
            ("ARVO_AUTHOR_EMAIL", &author.email),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^\[main [0-9a-f]{8}\] .+$")?)
        .get_output()
        .stdout
        .trim_ascii()
        .to_vec();
    let commit_excerpt = String::from_utf8(commit_excerpt_raw)?;

    let commit_oid = common::head_commit_oid(dir)?;
    assert_eq!(commit_oid.len(), 64);
    assert_ne!(commit_oid, root_oid);
    assert!(commit_excerpt.contains(&commit_oid[..8]));

    let output = run_arvo_command(dir, &["cat-file", "-p", &commit_oid])
        .assert()
        .success()
        .stdout(predicate::str::contains(&message))
        .stdout(predicate::str::contains(&author.name))
        .stdout(predicate::str::contains(&author.email))
        .stdout(predicate::str::contains(format!("parent {root_oid}")))
        .get_output()
        .stdout
        .clone();

    let output = String::from_utf8(output)?;
    let tree_oid = output
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("tree "))
        .ok_or("commit has no tree line")?
        .to_string();

    let mut assert = run_arvo_command(dir, &["cat-file", "-p", &tree_oid])
        .assert()
        .success();
    for spec in files.iter() {
        let name = spec.path.strip_prefix(dir)?.display().to_string();
        assert = assert.stdout(predicate::str::contains(name));
    }

    // staging is empty again
    run_arvo_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{file_count} tracked, 0 staged")));

    Ok(())
}
