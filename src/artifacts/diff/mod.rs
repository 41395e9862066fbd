//! Line diffing
//!
//! - `operation`: the ADD/DEL/NOP steps of an edit script
//! - `trace`: per-depth frontiers recorded by the forward search
//! - `myers`: Myers' shortest edit script (trace building and backtracking)
//! - `render`: turning an edit script into `+ `/`- `/`  ` prefixed lines
//!
//! The algorithm is generic over any `PartialEq` element, so the same core
//! diffs lines, tokens or arbitrary sequences.

pub mod myers;
pub mod operation;
pub mod render;
pub mod trace;

pub use myers::{DiffAlgorithm, MyersDiff, compute_edit_script};
pub use operation::{Operation, edit_distance};
pub use render::{DiffFilter, DiffOptions, generate_diff, write_diff};
