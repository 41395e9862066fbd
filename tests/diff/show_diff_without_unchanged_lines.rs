use crate::common::command::{modified_line_dir, run_linediff_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(&["--no-unchanged"], "- b\n+ x\n")]
#[case(&["--no-unchanged", "--no-removed"], "+ x\n")]
#[case(&["--no-added", "--no-removed"], "  a\n  c\n")]
#[case(&["--no-added", "--no-removed", "--no-unchanged"], "")]
fn show_diff_without_unchanged_lines(
    modified_line_dir: TempDir,
    #[case] flags: &[&str],
    #[case] expected_output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = vec!["diff"];
    args.extend_from_slice(flags);
    args.extend(["old.txt", "new.txt"]);

    let actual_output = stdout_of(&mut run_linediff_command(modified_line_dir.path(), &args))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
