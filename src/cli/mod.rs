//! Terminal host: command-line flags and the captain's log editor.

mod args;
mod log_editor;

pub use args::Args;
pub use log_editor::TerminalLogEditor;
