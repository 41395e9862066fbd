use crate::common::command::{
    diff_output, file_a, file_b, run_linediff_command, stdout_of, workspace_dir,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_diff_for_rewritten_block(
    workspace_dir: TempDir,
    file_a: String,
    file_b: String,
    diff_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(workspace_dir.path().join("main_a.rs"), file_a));
    write_file(FileSpec::new(workspace_dir.path().join("main_b.rs"), file_b));

    let actual_output = stdout_of(&mut run_linediff_command(
        workspace_dir.path(),
        &["diff", "main_a.rs", "main_b.rs"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, diff_output);

    Ok(())
}
