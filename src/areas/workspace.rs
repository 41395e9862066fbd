use anyhow::Context;
use std::path::Path;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Reads a text file relative to the workspace and splits it into lines
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped; a trailing newline does
    /// not produce an extra empty line.
    pub fn read_lines(&self, file_path: &Path) -> anyhow::Result<Vec<String>> {
        let full_path = self.path.join(file_path);

        if !full_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", file_path);
        }
        if full_path.is_dir() {
            anyhow::bail!("The specified path is a directory: {:?}", file_path);
        }

        let content = std::fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read {:?} as text", file_path))?;

        Ok(content.lines().map(String::from).collect())
    }
}
