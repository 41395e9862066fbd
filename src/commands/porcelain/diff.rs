use crate::areas::session::Session;
use crate::artifacts::diff::myers::compute_edit_script;
use crate::artifacts::diff::render::{DiffFilter, DiffOptions, write_diff};
use std::io::Write;
use std::path::Path;

impl Session {
    pub fn diff(&self, old: &Path, new: &Path, options: &DiffOptions) -> anyhow::Result<()> {
        let (src, dst) = self.read_pair(old, new)?;
        let script = compute_edit_script(&src, &dst);

        let mut writer = self.writer();
        write_diff(&src, &dst, &script, options, &mut *writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Combines `--diff-filter` with the `--no-*` switches
///
/// Without `--diff-filter` every kind of line is shown; each `--no-*` switch
/// then removes its kind.
pub fn resolve_filter(
    diff_filter: Option<&str>,
    no_added: bool,
    no_removed: bool,
    no_unchanged: bool,
) -> anyhow::Result<DiffFilter> {
    let mut filter = match diff_filter {
        Some(letters) => match DiffFilter::try_parse(letters) {
            Some(filter) => filter,
            None => anyhow::bail!(
                "Invalid diff filter {:?}: expected letters from A (added), R or D (removed), U (unchanged)",
                letters
            ),
        },
        None => DiffFilter::all(),
    };

    if no_added {
        filter.remove(DiffFilter::ADDED);
    }
    if no_removed {
        filter.remove(DiffFilter::REMOVED);
    }
    if no_unchanged {
        filter.remove(DiffFilter::UNCHANGED);
    }

    Ok(filter)
}
