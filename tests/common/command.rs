use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Workspace holding `old.txt` and `new.txt` that differ in their middle line
#[fixture]
pub fn modified_line_dir(workspace_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        workspace_dir.path().join("old.txt"),
        "a\nb\nc\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        "a\nx\nc\n".to_string(),
    ));

    workspace_dir
}

#[fixture]
pub fn file_a() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..1000000000 {
        println!("{}",  s);
    }

    println!("Done");
}"#
    .to_string()
}

#[fixture]
pub fn file_b() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");

    if let Err(e) = run() {
        eprintln!("error: {}", e);
    }
}"#
    .to_string()
}

#[fixture]
pub fn diff_output() -> String {
    "  fn main() {\n      let s = String::new();\n      std::io::stdin().read_line(&mut s).unwrap();\n-     for i in 0..1000000000 {\n-         println!(\"{}\",  s);\n-     }\n  \n      println!(\"Done\");\n+ \n+     if let Err(e) = run() {\n+         eprintln!(\"error: {}\", e);\n+     }\n  }\n"
        .to_string()
}

pub fn run_linediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("linediff").expect("Failed to find linediff binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success();
    let stdout = output.get_output().stdout.clone();
    Ok(String::from_utf8(stdout)?)
}
