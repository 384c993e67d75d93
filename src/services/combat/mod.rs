//! Combat system
//!
//! Handles phaser fire, torpedo launch, the shield report and the
//! Cardassian counter-attack that follows every turn-advancing action.

mod cardassian_attack;
mod phasers;
mod shields;
mod torpedoes;

pub use cardassian_attack::{cardassians_attack, shield_absorption, ShieldAbsorption};
pub use phasers::{fire_phasers, phaser_falloff};
pub use shields::shield_status;
pub use torpedoes::fire_torpedoes;
