//! User interface
//!
//! Presenters format game state into output lines.

pub mod presenters;
