//! Game services
//!
//! This module contains business logic for game operations: combat,
//! navigation, scanning, the replicator, docking, crew management,
//! self-destruct and the command interpreter that ties them together.

pub mod combat;
pub mod computer;
pub mod crew;
pub mod damage;
pub mod dock;
pub mod game;
pub mod navigation;
pub mod scan;
pub mod self_destruct;

pub use game::Game;
