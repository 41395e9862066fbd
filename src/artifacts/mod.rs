//! Diff data structures and algorithms
//!
//! - `core`: Shared output utilities (pager wrapper, etc.)
//! - `diff`: Myers' diff and the line renderer

pub mod core;
pub mod diff;
