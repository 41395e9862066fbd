//! Core utilities and shared types
//!
//! This module contains the output plumbing shared by every command: deciding
//! whether output goes through the minus pager, and adapting the pager to
//! `std::io::Write` so commands can print to it like any other writer.

use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables paging when set
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Whether output should be paged
///
/// Paging is only used on an interactive stdout, and never when the user opted
/// out with `--no-pager` or the `NO_PAGER` environment variable.
pub fn should_page(no_pager: bool) -> bool {
    !no_pager && std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal()
}

/// Output collected into the minus pager and shown once the command finishes
///
/// ## Usage
///
/// ```ignore
/// let output = PagedOutput::new();
/// let mut writer = output.writer();
/// writeln!(writer, "Some long output...")?;
/// output.show()?;
/// ```
pub struct PagedOutput {
    pager: Pager,
}

impl PagedOutput {
    pub fn new() -> Self {
        PagedOutput {
            pager: Pager::new(),
        }
    }

    pub fn writer(&self) -> PagerWriter {
        PagerWriter {
            pager: self.pager.clone(),
        }
    }

    pub fn show(self) -> anyhow::Result<()> {
        minus::page_all(self.pager)?;
        Ok(())
    }
}

impl Default for PagedOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle that implements `Write` by pushing text into the pager
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
