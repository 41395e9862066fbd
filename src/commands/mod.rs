//! Command implementations
//!
//! Commands are split the same way git splits its own:
//!
//! - `plumbing`: Low-level output meant for scripts (raw edit script)
//! - `porcelain`: User-facing output (rendered line diff)

pub mod plumbing;
pub mod porcelain;
