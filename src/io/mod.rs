//! Input/output abstractions
//!
//! The engine never touches a terminal directly: it writes lines to an
//! [`OutputWriter`], asks a [`LogEditor`] for captain's log edits and
//! persists snapshots through a [`SaveStore`].

mod store;

pub use store::{FileStore, MemoryStore, SaveStore};

use std::io::{self, BufRead, Write};

/// Trait for reading user input
pub trait InputReader {
    /// Read a line of input from the user with a prompt.
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, io::Error>;
}

/// Trait for writing output to the user, one logical line per call
pub trait OutputWriter {
    fn writeln(&mut self, message: &str);
}

/// Edits the captain's log. Receives the current text and returns the
/// replacement, or `None` to leave the log unchanged.
pub trait LogEditor {
    fn edit(&mut self, current: &str) -> Option<String>;
}

impl<F> LogEditor for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn edit(&mut self, current: &str) -> Option<String> {
        self(current)
    }
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, io::Error> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input))
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Collects output lines in memory.
#[derive(Debug, Default, Clone)]
pub struct BufferedOutput {
    pub lines: Vec<String>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl OutputWriter for BufferedOutput {
    fn writeln(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
