use crate::common::command::{modified_line_dir, run_linediff_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_diff_for_missing_file_fails(modified_line_dir: TempDir) {
    run_linediff_command(
        modified_line_dir.path(),
        &["diff", "old.txt", "missing.txt"],
    )
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("does not exist"))
    .stderr(predicate::str::contains("missing.txt"));
}
