use crate::common::command::{run_linediff_command, stdout_of, workspace_dir};
use crate::common::file::{FileSpec, generate_lines, lines_to_content, write_file};
use assert_fs::TempDir;
use fake::Fake;
use rstest::rstest;

#[rstest]
fn show_edit_script_for_disjoint_files(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let old_lines = generate_lines((1..=8).fake::<usize>())
        .into_iter()
        .map(|line| format!("old {line}"))
        .collect::<Vec<_>>();
    let new_lines = generate_lines((1..=8).fake::<usize>())
        .into_iter()
        .map(|line| format!("new {line}"))
        .collect::<Vec<_>>();
    write_file(FileSpec::new(
        workspace_dir.path().join("old.txt"),
        lines_to_content(&old_lines),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        lines_to_content(&new_lines),
    ));

    let actual_output = stdout_of(&mut run_linediff_command(
        workspace_dir.path(),
        &["edit-script", "old.txt", "new.txt"],
    ))?;

    let mut expected_output = "DEL\n".repeat(old_lines.len());
    expected_output.push_str(&"ADD\n".repeat(new_lines.len()));
    expected_output.push_str(&format!(
        "edit distance: {}\n",
        old_lines.len() + new_lines.len()
    ));
    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
