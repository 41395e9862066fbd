//! Porcelain commands (user-facing output)
//!
//! ## Commands
//!
//! - `diff`: Show the line differences between two files

pub mod diff;
