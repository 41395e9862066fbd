use crate::common::command::{modified_line_dir, run_linediff_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("A", "+ x\n")]
#[case("D", "- b\n")]
#[case("RA", "- b\n+ x\n")]
#[case("U", "  a\n  c\n")]
fn show_diff_with_diff_filter(
    modified_line_dir: TempDir,
    #[case] filter: &str,
    #[case] expected_output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let diff_filter = format!("--diff-filter={filter}");
    let actual_output = stdout_of(&mut run_linediff_command(
        modified_line_dir.path(),
        &["diff", &diff_filter, "old.txt", "new.txt"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
