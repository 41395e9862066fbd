use crate::artifacts::diff::myers::compute_edit_script;
use crate::artifacts::diff::operation::Operation;
use bitflags::bitflags;
use colored::Colorize;
use derive_new::new;
use std::fmt::Display;
use std::io::Write;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DiffFilter: u32 {
        const ADDED = 0b0001;
        const REMOVED = 0b0010;
        const UNCHANGED = 0b0100;
    }
}

impl DiffFilter {
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                'A' => filter |= Self::ADDED,
                'R' | 'D' => filter |= Self::REMOVED,
                'U' => filter |= Self::UNCHANGED,
                _ => return None,
            }
        }

        Some(filter)
    }

    pub fn matches(&self, op: Operation) -> bool {
        match op {
            Operation::Add => self.contains(DiffFilter::ADDED),
            Operation::Delete => self.contains(DiffFilter::REMOVED),
            Operation::Noop => self.contains(DiffFilter::UNCHANGED),
        }
    }
}

/// Controls which lines the renderer emits and how they look
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DiffOptions {
    filter: DiffFilter,
    colorize: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions::new(DiffFilter::all(), false)
    }
}

impl DiffOptions {
    pub fn filter(&self) -> DiffFilter {
        self.filter
    }

    pub fn include_added(&self) -> bool {
        self.filter.contains(DiffFilter::ADDED)
    }

    pub fn include_removed(&self) -> bool {
        self.filter.contains(DiffFilter::REMOVED)
    }

    pub fn include_unchanged(&self) -> bool {
        self.filter.contains(DiffFilter::UNCHANGED)
    }

    pub fn with_filter(self, filter: DiffFilter) -> Self {
        DiffOptions { filter, ..self }
    }

    pub fn with_colorize(self, colorize: bool) -> Self {
        DiffOptions { colorize, ..self }
    }
}

/// Writes one line per operation of `script`
///
/// The source and destination cursors advance for every operation, whether or
/// not its line passes the filter, so hiding a kind of line never shifts which
/// element the next operation reads.
pub fn write_diff<T, W>(
    src: &[T],
    dst: &[T],
    script: &[Operation],
    options: &DiffOptions,
    writer: &mut W,
) -> anyhow::Result<()>
where
    T: Display,
    W: Write + ?Sized,
{
    let (mut src_index, mut dst_index) = (0, 0);

    for (position, op) in script.iter().enumerate() {
        let line = match op {
            Operation::Add => dst.get(dst_index),
            Operation::Delete | Operation::Noop => src.get(src_index),
        };
        let Some(line) = line else {
            anyhow::bail!(
                "{} at position {} overruns the input ({} of {} source, {} of {} destination lines consumed)",
                op,
                position,
                src_index,
                src.len(),
                dst_index,
                dst.len()
            );
        };
        if *op == Operation::Noop && dst_index >= dst.len() {
            anyhow::bail!(
                "{} at position {} overruns the destination ({} lines)",
                op,
                position,
                dst.len()
            );
        }

        if options.filter.matches(*op) {
            write_line(writer, *op, line, options.colorize)?;
        }

        if op.consumes_source() {
            src_index += 1;
        }
        if op.consumes_destination() {
            dst_index += 1;
        }
    }

    Ok(())
}

fn write_line<T, W>(writer: &mut W, op: Operation, line: &T, colorize: bool) -> anyhow::Result<()>
where
    T: Display,
    W: Write + ?Sized,
{
    let text = match op {
        Operation::Add => format!("+ {line}"),
        Operation::Delete => format!("- {line}"),
        Operation::Noop => format!("  {line}"),
    };

    match (colorize, op) {
        (true, Operation::Add) => writeln!(writer, "{}", text.green())?,
        (true, Operation::Delete) => writeln!(writer, "{}", text.red())?,
        _ => writeln!(writer, "{}", text)?,
    }

    Ok(())
}

/// Diffs two sequences of lines and renders the result as text
pub fn generate_diff<T>(src: &[T], dst: &[T], options: &DiffOptions) -> anyhow::Result<String>
where
    T: Display + PartialEq,
{
    let script = compute_edit_script(src, dst);
    let mut buffer = Vec::new();
    write_diff(src, dst, &script, options, &mut buffer)?;

    Ok(String::from_utf8(buffer)?)
}
