//! Domain models
//!
//! This module contains all domain models representing game entities
//! and concepts. Models are pure data structures with minimal logic.

pub mod buffs;
pub mod cardassian;
pub mod constants;
pub mod crew;
pub mod dice;
pub mod enterprise;
pub mod errors;
pub mod galaxy;
pub mod navigation_types;
pub mod position;
pub mod quadrant;
pub mod sector_map;
