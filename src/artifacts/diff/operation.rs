use std::fmt::Display;

/// A single step of an edit script
///
/// Operations carry no payload: replaying a script against the source and
/// destination sequences advances a source cursor on `Delete`/`Noop` and a
/// destination cursor on `Add`/`Noop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Consumes one destination element (insert)
    Add,
    /// Consumes one source element (deletion)
    Delete,
    /// Consumes one element from both sides (match)
    Noop,
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add => "ADD",
            Operation::Delete => "DEL",
            Operation::Noop => "NOP",
        }
    }

    pub fn consumes_source(&self) -> bool {
        matches!(self, Operation::Delete | Operation::Noop)
    }

    pub fn consumes_destination(&self) -> bool {
        matches!(self, Operation::Add | Operation::Noop)
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Number of non-diagonal moves (inserts plus deletions) in a script
pub fn edit_distance(script: &[Operation]) -> usize {
    script
        .iter()
        .filter(|op| !matches!(op, Operation::Noop))
        .count()
}
