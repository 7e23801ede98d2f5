use crate::common::command::{init_repository_dir, run_arvo_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::CONTROL_DIR;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_skips_files_over_the_size_limit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let config_path = dir.join(CONTROL_DIR).join("config");
    let mut config: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;
    config["tracking"]["max_file_size"] = serde_json::json!(4);
    std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    write_file(FileSpec::new(dir.join("small.txt"), "tiny".to_string()));
    write_file(FileSpec::new(dir.join("large.txt"), "far too large".to_string()));

    run_arvo_command(dir, &["add", "small.txt", "large.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added: small.txt"))
        .stdout(predicate::str::contains("skipped: File too large to stage: large.txt"));

    Ok(())
}
