use crate::common::command::{init_repository_dir, run_arvo_command};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use crate::common::CONTROL_DIR;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories_to_index_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let nested = dir.join("data").join("raw");
    let generated = write_generated_files(&nested, 3);
    write_file(FileSpec::new(dir.join("data").join("notes.bin"), "skip".to_string()));
    write_file(FileSpec::new(dir.join("train.py"), "print(1)".to_string()));

    let mut assert = run_arvo_command(dir, &["add", "."]).assert().success();
    for spec in generated.iter() {
        let relative = spec.path.strip_prefix(dir)?.display().to_string();
        assert = assert.stdout(predicate::str::contains(format!("added: {relative}")));
    }
    assert.stdout(predicate::str::contains("notes.bin").not());

    let index: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(
        dir.join(CONTROL_DIR).join("index"),
    )?)?;
    let files = index["files"].as_object().ok_or("index has no files map")?;

    assert_eq!(files.len(), 4);
    assert!(files.contains_key("train.py"));
    for spec in generated.iter() {
        let relative = spec.path.strip_prefix(dir)?.display().to_string();
        assert_eq!(files[&relative]["size"], spec.content.len());
    }

    Ok(())
}
