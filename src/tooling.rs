//! Tooling Layer
//!
//! The interactive CLI: startup flags, the menu dispatch table, prompts,
//! and text rendering of catalog results.

pub mod cli;
pub mod format;

pub use cli::{Cli, MenuApp, MenuCommand, MENU};
pub use format::Console;
