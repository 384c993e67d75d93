use std::io::{self, BufRead};

use sst::io::LogEditor;

/// Captain's log editor for a plain terminal. Shows the current log and
/// reads replacement lines from stdin until a lone `.`.
pub struct TerminalLogEditor;

impl LogEditor for TerminalLogEditor {
    fn edit(&mut self, current: &str) -> Option<String> {
        println!();
        println!("=== CAPTAIN'S LOG ===");
        if current.trim().is_empty() {
            println!("(empty)");
        } else {
            println!("{}", current);
        }
        println!();
        println!("Enter the new log. End with a line containing only '.'");
        read_log(io::stdin().lock())
    }
}

/// Collect lines up to a lone `.`. `None` if input ends before anything
/// was entered.
fn read_log(reader: impl BufRead) -> Option<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };
        let line = line.trim_end_matches('\r');
        if line == "." {
            return Some(lines.join("\n"));
        }
        lines.push(line.to_string());
    }
    (!lines.is_empty()).then(|| lines.join("\n"))
}
