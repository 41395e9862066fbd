//! Command context
//!
//! - `session`: shared state for a command run (working directory, output writer)
//! - `workspace`: reading input files from the working directory

pub mod session;
pub(crate) mod workspace;
