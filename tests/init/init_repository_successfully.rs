use crate::common;
use assert_cmd::Command;
use predicates::prelude::predicate;

#[test]
fn init_repository_successfully() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let dir_absolute_path = dir.path().canonicalize()?.display().to_string();
    let mut sut = Command::cargo_bin("arvo")?;

    sut.arg("init").arg(dir.path());

    sut.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"(?m)^Initialized empty arvo repository in .+$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    let control = dir.path().join(common::CONTROL_DIR);
    assert_eq!(
        std::fs::read_to_string(control.join("HEAD"))?,
        "ref: refs/heads/main"
    );
    assert!(control.join("index").is_file());
    assert!(control.join("config").is_file());

    let head = common::head_commit_oid(dir.path())?;
    assert_eq!(head.len(), 64);
    assert!(head.chars().all(|c| c.is_ascii_hexdigit()));

    // root commit and the empty tree it points at
    assert_eq!(common::stored_objects(dir.path()).len(), 2);

    Ok(())
}
