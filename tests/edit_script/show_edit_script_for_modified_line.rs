use crate::common::command::{modified_line_dir, run_linediff_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_edit_script_for_modified_line(
    modified_line_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_linediff_command(
        modified_line_dir.path(),
        &["edit-script", "old.txt", "new.txt"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, "NOP\nDEL\nADD\nNOP\nedit distance: 2\n");

    Ok(())
}
