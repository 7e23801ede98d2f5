use crate::common::command::{repository_dir, run_arvo_command};
use crate::common::CONTROL_DIR;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn init_records_identity_and_journal(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_arvo_command(
        repository_dir.path(),
        &["init", "--name", "Ann", "--email", "ann@x.io"],
    )
    .assert()
    .success();

    let control = repository_dir.path().join(CONTROL_DIR);

    let config: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(control.join("config"))?)?;
    assert_eq!(config["user"]["name"], "Ann");
    assert_eq!(config["user"]["email"], "ann@x.io");
    assert_eq!(config["core"]["repository_format_version"], "1");

    let journal = std::fs::read_to_string(control.join("logs").join("history.log"))?;
    let entries = journal
        .lines()
        .map(serde_json::from_str::<serde_json::Value>)
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["action"], "init");
    assert_eq!(entries[0]["user"], "Ann");

    Ok(())
}
