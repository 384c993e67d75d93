//! Super Star Trek game engine
//!
//! A turn-based text space-combat game in the tradition of the 1978
//! Super Star Trek. The player commands the USS Enterprise on a mission
//! to destroy every Cardassian warship in the galaxy before time runs out.
//!
//! # Overview
//!
//! The engine is a line-in, lines-out interpreter. A [`Game`] owns the
//! session; every call to [`Game::process`] handles one command and
//! writes its response to an [`io::OutputWriter`]. Randomness comes from
//! a seeded, serializable generator, so a session can be saved through a
//! [`io::SaveStore`] and resumed with identical future rolls.
//!
//! # Modules
//!
//! - [`game_engine`] - Game state machine, command parsing and snapshots
//! - [`models`] - Domain models (Galaxy, Enterprise, Cardassian, crew, etc.)
//! - [`services`] - Game services (combat, navigation, scanning, etc.)
//! - [`io`] - Output sink, save stores and the log editor seam
//! - [`ui`] - Presentation of reports
//! - [`config`] - New-game options
//!
//! # Example
//!
//! ```rust
//! use sst::config::GameOptions;
//! use sst::io::{BufferedOutput, MemoryStore};
//! use sst::Game;
//!
//! let mut game = Game::new(GameOptions::new(42), MemoryStore::new());
//! let mut out = BufferedOutput::new();
//! game.start(&mut out);
//! game.process("LRSCAN", &mut out);
//! assert!(out.contains("Long Range Scan for Quadrant"));
//! ```

pub mod config;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

#[cfg(test)]
mod fixtures;

// Re-export commonly used types
pub use game_engine::{Command, DefeatReason, GameEngine, GameState};
pub use services::Game;
