//! Plumbing commands (low-level output)
//!
//! ## Commands
//!
//! - `edit-script`: Print the ADD/DEL/NOP operations and the edit distance

pub mod edit_script;
