use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Context shared by every command: where inputs are resolved and where output goes
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
}

impl Session {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let workspace = Workspace::new(path.into_boxed_path());

        Ok(Session {
            writer: RefCell::new(writer),
            workspace,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Reads the old and new files as lines
    pub fn read_pair(&self, old: &Path, new: &Path) -> anyhow::Result<(Vec<String>, Vec<String>)> {
        let src = self.workspace.read_lines(old)?;
        let dst = self.workspace.read_lines(new)?;

        Ok((src, dst))
    }
}
