//! Navigation system
//!
//! Warp between quadrants, impulse within the current quadrant and
//! transit through the one-way wormhole circuit.

mod impulse;
mod warp;
mod wormhole;

pub use impulse::impulse;
pub use warp::warp;
pub use wormhole::enter_wormhole;

use crate::models::buffs::{Buff, Buffs};
use crate::models::constants::COFFEE_COST_FACTOR;

/// Base energy for a move of `distance` units, before any coffee discount.
pub fn movement_cost(distance: i32, energy_per_unit: f64, helm_multiplier: f64) -> i32 {
    (f64::from(distance) * energy_per_unit * helm_multiplier).floor() as i32
}

/// Energy actually deducted: coffee takes 30% off the base cost.
pub fn discounted(cost: i32, buffs: &Buffs) -> i32 {
    if buffs.is_active(Buff::Coffee) {
        (f64::from(cost) * COFFEE_COST_FACTOR).floor() as i32
    } else {
        cost
    }
}
