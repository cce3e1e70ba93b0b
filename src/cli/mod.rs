//! CLI commands
//!
//! Command implementations for the `guestbook` binary.

mod entries;
mod forms;
mod invoke;
mod style;

pub use entries::run_entries;
pub use forms::run_forms;
pub use invoke::run_invoke;
