//! Galaxy model
//!
//! Represents the game universe with 8x8 quadrants, each containing
//! Cardassians, starbases, stars, wormholes and the Enterprise.

mod generation;
mod quadrant_ops;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::GameOptions;

use super::buffs::Buffs;
use super::constants::{
    Condition, SectorContent, GALAXY_SIZE, INITIAL_ENERGY, INITIAL_SHIELDS, LOW_ENERGY_THRESHOLD,
    MIN_MISSION_LENGTH,
};
use super::crew::{self, BridgeCrew};
use super::dice::Dice;
use super::enterprise::Enterprise;
use super::position::{QuadrantPosition, SectorPosition};
use super::quadrant::QuadrantData;
use super::sector_map::SectorMap;

pub use generation::QuadrantGrid;
use generation::{generate_galaxy, station_reserves};
use quadrant_ops::enter_quadrant;

/// Consolidated Cardassian count tracking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct CardassianCount {
    remaining: i32,
    initial: i32,
}

/// Top-level game state container.
#[derive(Clone, Serialize, Deserialize)]
pub struct Galaxy {
    stardate: f64,
    starting_stardate: f64,
    ending_stardate: f64,
    /// 8x8 grid of quadrant data, indexed quadrants[y][x].
    quadrants: QuadrantGrid,
    /// Wormhole circuit in placement order; each leads to the next.
    wormholes: Vec<QuadrantPosition>,
    cardassian_count: CardassianCount,
    total_starbases: i32,
    enterprise: Enterprise,
    sector_map: SectorMap,
    buffs: Buffs,
    crew: BridgeCrew,
    dice: Dice,
}

impl Galaxy {
    /// Create and initialize a new game.
    pub fn new(options: &GameOptions) -> Self {
        let mut dice = Dice::new(options.seed);

        let starting_stardate = match options.starting_stardate {
            Some(date) => date,
            None => (dice.below(1000) + 2000) as f64,
        };

        let generated = generate_galaxy(&mut dice, options.cardassians);
        let mut quadrants = generated.quadrants;

        let (crew, reserves) = crew::draft(&mut dice);
        station_reserves(&mut quadrants, reserves);

        let mission_length = options.mission_length.unwrap_or_else(|| {
            MIN_MISSION_LENGTH.max(f64::from(generated.total_cardassians + 5))
        });

        let qx = dice.below(GALAXY_SIZE) as i32;
        let qy = dice.below(GALAXY_SIZE) as i32;

        let mut galaxy = Galaxy {
            stardate: starting_stardate,
            starting_stardate,
            ending_stardate: starting_stardate + mission_length,
            quadrants,
            wormholes: generated.wormholes,
            cardassian_count: CardassianCount {
                remaining: generated.total_cardassians,
                initial: generated.total_cardassians,
            },
            total_starbases: generated.total_starbases,
            enterprise: Enterprise::new(QuadrantPosition::new(qx, qy), SectorPosition::default()),
            sector_map: SectorMap::new(),
            buffs: Buffs::default(),
            crew,
            dice,
        };

        galaxy.enter_quadrant(None);

        tracing::info!(
            seed = options.seed,
            cardassians = galaxy.cardassian_count.initial,
            starbases = galaxy.total_starbases,
            wormholes = galaxy.wormholes.len(),
            stardate = galaxy.starting_stardate,
            "galaxy generated"
        );

        galaxy
    }

    // ========== Accessor Methods ==========

    pub fn stardate(&self) -> f64 {
        self.stardate
    }

    pub fn starting_stardate(&self) -> f64 {
        self.starting_stardate
    }

    pub fn ending_stardate(&self) -> f64 {
        self.ending_stardate
    }

    pub fn stardates_remaining(&self) -> f64 {
        self.ending_stardate - self.stardate
    }

    /// Get total Cardassians remaining
    pub fn remaining_cardassians(&self) -> i32 {
        self.cardassian_count.remaining
    }

    pub fn initial_cardassians(&self) -> i32 {
        self.cardassian_count.initial
    }

    pub fn total_starbases(&self) -> i32 {
        self.total_starbases
    }

    pub fn enterprise(&self) -> &Enterprise {
        &self.enterprise
    }

    pub fn enterprise_mut(&mut self) -> &mut Enterprise {
        &mut self.enterprise
    }

    pub fn sector_map(&self) -> &SectorMap {
        &self.sector_map
    }

    pub fn sector_map_mut(&mut self) -> &mut SectorMap {
        &mut self.sector_map
    }

    pub fn quadrants(&self) -> &QuadrantGrid {
        &self.quadrants
    }

    /// Quadrant summary at an in-bounds position.
    pub fn quadrant(&self, pos: QuadrantPosition) -> &QuadrantData {
        &self.quadrants[pos.y as usize][pos.x as usize]
    }

    pub fn quadrant_mut(&mut self, pos: QuadrantPosition) -> &mut QuadrantData {
        &mut self.quadrants[pos.y as usize][pos.x as usize]
    }

    pub fn current_quadrant(&self) -> &QuadrantData {
        self.quadrant(self.enterprise.quadrant)
    }

    pub fn wormholes(&self) -> &[QuadrantPosition] {
        &self.wormholes
    }

    pub fn buffs(&self) -> &Buffs {
        &self.buffs
    }

    pub fn buffs_mut(&mut self) -> &mut Buffs {
        &mut self.buffs
    }

    pub fn crew(&self) -> &BridgeCrew {
        &self.crew
    }

    pub fn crew_mut(&mut self) -> &mut BridgeCrew {
        &mut self.crew
    }

    pub fn dice(&mut self) -> &mut Dice {
        &mut self.dice
    }

    /// Advance stardate by delta
    pub fn advance_time(&mut self, delta: f64) {
        self.stardate += delta;
    }

    pub fn set_stardate(&mut self, stardate: f64) {
        self.stardate = stardate;
    }

    pub fn set_remaining_cardassians(&mut self, count: i32) {
        self.cardassian_count.remaining = count;
    }

    pub fn set_total_starbases(&mut self, count: i32) {
        self.total_starbases = count;
    }

    // ========== End Accessor Methods ==========

    /// Rebuild the sector grid for the ship's current quadrant.
    /// `preferred` is the sector the ship would like to keep.
    pub fn enter_quadrant(&mut self, preferred: Option<SectorPosition>) {
        let q = self.enterprise.quadrant;
        enter_quadrant(
            &mut self.sector_map,
            &mut self.enterprise,
            &mut self.quadrants[q.y as usize][q.x as usize],
            preferred,
            &mut self.dice,
        );
    }

    /// Recompute docked status from the ship's neighbourhood.
    pub fn check_docking(&mut self) -> bool {
        self.enterprise.docked = self
            .sector_map
            .has_adjacent(self.enterprise.sector, SectorContent::Starbase);
        self.enterprise.docked
    }

    /// Move the ship to another cell of the current quadrant.
    pub fn relocate_enterprise(&mut self, to: SectorPosition) {
        self.sector_map.set(self.enterprise.sector, SectorContent::Empty);
        self.enterprise.sector = to;
        self.sector_map.set(to, SectorContent::Enterprise);
    }

    /// Move the ship to the free cell closest to this quadrant's starbase
    /// and recheck docking. Returns whether the ship is now docked.
    pub fn berth_at_starbase(&mut self) -> bool {
        let spot = self
            .sector_map
            .find(SectorContent::Starbase)
            .and_then(|base| self.sector_map.find_nearby_empty(base, &mut self.dice));
        if let Some(spot) = spot {
            self.relocate_enterprise(spot);
        }
        self.check_docking()
    }

    // ========== Atomic Update Methods ==========

    /// Destroy the Cardassian at `pos`, updating the grid, the live list,
    /// the quadrant summary and the galaxy total. Returns false if there
    /// was no Cardassian there.
    pub fn destroy_cardassian(&mut self, pos: SectorPosition) -> bool {
        let Some(index) = self.sector_map.cardassians.iter().position(|c| c.sector == pos) else {
            return false;
        };
        self.sector_map.cardassians.remove(index);
        self.sector_map.set(pos, SectorContent::Empty);
        let q = self.enterprise.quadrant;
        self.quadrant_mut(q).cardassians -= 1;
        self.cardassian_count.remaining -= 1;
        tracing::debug!(sector = %pos, remaining = self.cardassian_count.remaining, "cardassian destroyed");
        true
    }

    /// Destroy every Cardassian in the current quadrant. Returns how many.
    pub fn destroy_all_cardassians_here(&mut self) -> i32 {
        let count = self.sector_map.cardassians.len() as i32;
        self.sector_map.cardassians.clear();
        self.sector_map.clear_all(SectorContent::Cardassian);
        let q = self.enterprise.quadrant;
        self.quadrant_mut(q).cardassians = 0;
        self.cardassian_count.remaining -= count;
        count
    }

    /// Destroy the starbase at `pos` and recheck docking.
    pub fn destroy_starbase(&mut self, pos: SectorPosition) {
        self.sector_map.set(pos, SectorContent::Empty);
        let q = self.enterprise.quadrant;
        self.quadrant_mut(q).starbases = 0;
        self.total_starbases -= 1;
        self.check_docking();
        tracing::debug!(quadrant = %q, remaining = self.total_starbases, "starbase destroyed");
    }

    // ========== End Atomic Update Methods ==========

    /// Count buffs down by one turn; prune juice restores a tenth of
    /// shield capacity without raising shields past it.
    pub fn tick_buffs(&mut self) {
        if self.buffs.tick() {
            let capacity = self.shield_capacity();
            let shields = &mut self.enterprise.shields;
            if *shields < capacity {
                *shields = (*shields + capacity / 10).min(capacity);
            }
        }
    }

    /// Energy level restored by docking, scaled by the communications officer.
    pub fn energy_capacity(&self) -> i32 {
        (f64::from(INITIAL_ENERGY) * self.crew.dock_efficiency()).floor() as i32
    }

    pub fn shield_capacity(&self) -> i32 {
        (f64::from(INITIAL_SHIELDS) * self.crew.dock_efficiency()).floor() as i32
    }

    pub fn evaluate_condition(&self) -> Condition {
        if self.enterprise.docked {
            Condition::Docked
        } else if !self.sector_map.cardassians.is_empty() {
            Condition::Red
        } else if self.enterprise.energy < LOW_ENERGY_THRESHOLD {
            Condition::Yellow
        } else {
            Condition::Green
        }
    }

    pub fn all_cardassians_destroyed(&self) -> bool {
        self.cardassian_count.remaining <= 0
    }

    pub fn is_time_expired(&self) -> bool {
        self.stardate >= self.ending_stardate
    }

    /// Cardassians destroyed per thousand stardates, elapsed time floored at 1.
    pub fn efficiency_rating(&self) -> i32 {
        let elapsed = (self.stardate - self.starting_stardate).max(1.0);
        (f64::from(self.cardassian_count.initial) / elapsed * 1000.0) as i32
    }

    /// Closest quadrant with a starbase by Manhattan distance; ties go to
    /// the first in row-major order.
    pub fn nearest_starbase(&self) -> Option<QuadrantPosition> {
        let here = self.enterprise.quadrant;
        let mut best: Option<(i32, QuadrantPosition)> = None;
        for (y, row) in self.quadrants.iter().enumerate() {
            for (x, q) in row.iter().enumerate() {
                if q.starbases == 0 {
                    continue;
                }
                let pos = QuadrantPosition::new(x as i32, y as i32);
                let dist = here.manhattan_distance(pos);
                if best.map_or(true, |(d, _)| dist < d) {
                    best = Some((dist, pos));
                }
            }
        }
        best.map(|(_, pos)| pos)
    }

    /// The quadrant a wormhole in the current quadrant leads to, if the
    /// current quadrant is on the circuit.
    pub fn wormhole_destination(&self) -> Option<QuadrantPosition> {
        let here = self.enterprise.quadrant;
        let index = self.wormholes.iter().position(|&w| w == here)?;
        Some(self.wormholes[(index + 1) % self.wormholes.len()])
    }

    /// Structural checks applied to restored games.
    pub fn validate(&self) -> Result<(), String> {
        if !self.enterprise.quadrant.in_bounds() {
            return Err(format!("ship quadrant {:?} out of bounds", self.enterprise.quadrant));
        }
        if !self.enterprise.sector.in_bounds() {
            return Err(format!("ship sector {:?} out of bounds", self.enterprise.sector));
        }
        if let Some(w) = self.wormholes.iter().find(|w| !w.in_bounds()) {
            return Err(format!("wormhole {:?} out of bounds", w));
        }
        if let Some(c) = self.sector_map.cardassians.iter().find(|c| !c.sector.in_bounds()) {
            return Err(format!("cardassian {:?} out of bounds", c.sector));
        }
        if self.sector_map.get(self.enterprise.sector) != SectorContent::Enterprise {
            return Err("ship missing from sector grid".to_string());
        }
        Ok(())
    }
}

// Custom Debug that doesn't expose RNG internals
impl fmt::Debug for Galaxy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Galaxy")
            .field("stardate", &self.stardate)
            .field("remaining_cardassians", &self.remaining_cardassians())
            .field("starbases", &self.total_starbases())
            .field("enterprise", &self.enterprise)
            .finish_non_exhaustive()
    }
}
