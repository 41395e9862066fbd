use crate::areas::session::Session;
use crate::artifacts::diff::myers::compute_edit_script;
use crate::artifacts::diff::operation::edit_distance;
use std::io::Write;
use std::path::Path;

impl Session {
    /// Prints the raw edit script, one operation label per line
    pub fn edit_script(&self, old: &Path, new: &Path) -> anyhow::Result<()> {
        let (src, dst) = self.read_pair(old, new)?;
        let script = compute_edit_script(&src, &dst);

        let mut writer = self.writer();
        for op in &script {
            writeln!(writer, "{op}")?;
        }
        writeln!(writer, "edit distance: {}", edit_distance(&script))?;
        writer.flush()?;

        Ok(())
    }
}
