use crate::common::command::{init_repository_dir, run_arvo_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case("zz", "Invalid object id")]
#[case(
    "0000000000000000000000000000000000000000000000000000000000000000",
    "missing from the object store"
)]
fn cat_file_with_unknown_hash_fails(
    init_repository_dir: TempDir,
    #[case] hash: &str,
    #[case] reason: &str,
) {
    run_arvo_command(init_repository_dir.path(), &["cat-file", hash])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(reason));
}
