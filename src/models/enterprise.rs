use serde::{Deserialize, Serialize};

use super::constants::{Subsystem, INITIAL_ENERGY, INITIAL_SHIELDS, INITIAL_TORPEDOES, NUM_SUBSYSTEMS};
use super::errors::{GameError, GameResult};
use super::position::{QuadrantPosition, SectorPosition};

/// The player's starship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enterprise {
    pub quadrant: QuadrantPosition,
    pub sector: SectorPosition,
    pub energy: i32,
    pub shields: i32,
    pub torpedoes: i32,
    pub docked: bool,
    /// Damage state for each of the 8 subsystems.
    /// 0 = operational, negative = stardates until repaired.
    pub damage: [f64; NUM_SUBSYSTEMS],
}

impl Enterprise {
    pub fn new(quadrant: QuadrantPosition, sector: SectorPosition) -> Self {
        Enterprise {
            quadrant,
            sector,
            energy: INITIAL_ENERGY,
            shields: INITIAL_SHIELDS,
            torpedoes: INITIAL_TORPEDOES,
            docked: false,
            damage: [0.0; NUM_SUBSYSTEMS],
        }
    }

    pub fn quadrant(&self) -> QuadrantPosition {
        self.quadrant
    }

    pub fn sector(&self) -> SectorPosition {
        self.sector
    }

    pub fn is_damaged(&self, subsystem: Subsystem) -> bool {
        self.damage[subsystem as usize] < 0.0
    }

    pub fn damage_of(&self, subsystem: Subsystem) -> f64 {
        self.damage[subsystem as usize]
    }

    /// Set the subsystem to `-amount` if that is worse than its current
    /// state. Returns whether the damage was applied.
    pub fn damage_subsystem(&mut self, subsystem: Subsystem, amount: f64) -> bool {
        let slot = &mut self.damage[subsystem as usize];
        if *slot > -amount {
            *slot = -amount;
            true
        } else {
            false
        }
    }

    /// Clear all damage. Returns how many subsystems were damaged.
    pub fn repair_all(&mut self) -> usize {
        let repaired = self.damage.iter().filter(|&&d| d < 0.0).count();
        self.damage = [0.0; NUM_SUBSYSTEMS];
        repaired
    }

    /// Restore resources to starbase levels.
    pub fn resupply(&mut self, energy: i32, shields: i32) {
        self.energy = energy;
        self.shields = shields;
        self.torpedoes = INITIAL_TORPEDOES;
    }

    /// Factory-fresh ship: full resources, nothing damaged.
    pub fn refit(&mut self) {
        self.resupply(INITIAL_ENERGY, INITIAL_SHIELDS);
        self.repair_all();
    }

    pub fn consume_torpedo(&mut self) -> GameResult<()> {
        if self.torpedoes <= 0 {
            return Err(GameError::InsufficientResources {
                required: 1,
                available: self.torpedoes,
            });
        }
        self.torpedoes -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: create an Enterprise with reduced resources at a given sector.
    fn enterprise_at(sector: SectorPosition) -> Enterprise {
        let mut e = Enterprise::new(QuadrantPosition::new(1, 1), sector);
        e.energy = 1000;
        e.shields = 500;
        e.torpedoes = 3;
        e
    }

    #[test]
    fn damage_only_applies_when_worse() {
        let mut e = enterprise_at(SectorPosition::new(4, 4));
        assert!(e.damage_subsystem(Subsystem::Phasers, 2.0));
        assert_eq!(e.damage_of(Subsystem::Phasers), -2.0);

        assert!(!e.damage_subsystem(Subsystem::Phasers, 1.0));
        assert_eq!(e.damage_of(Subsystem::Phasers), -2.0);

        assert!(e.damage_subsystem(Subsystem::Phasers, 3.5));
        assert_eq!(e.damage_of(Subsystem::Phasers), -3.5);
        assert!(e.is_damaged(Subsystem::Phasers));
        assert!(!e.is_damaged(Subsystem::Shields));
    }

    #[test]
    fn repair_all_counts_damaged_systems() {
        let mut e = enterprise_at(SectorPosition::new(0, 0));
        e.damage_subsystem(Subsystem::WarpEngines, 1.0);
        e.damage_subsystem(Subsystem::Computer, 2.0);
        assert_eq!(e.repair_all(), 2);
        assert!(Subsystem::ALL.iter().all(|&s| !e.is_damaged(s)));
    }

    #[test]
    fn refit_restores_everything() {
        let mut e = enterprise_at(SectorPosition::new(2, 2));
        e.damage_subsystem(Subsystem::Shields, 4.0);
        e.refit();
        assert_eq!(e.energy, INITIAL_ENERGY);
        assert_eq!(e.shields, INITIAL_SHIELDS);
        assert_eq!(e.torpedoes, INITIAL_TORPEDOES);
        assert!(!e.is_damaged(Subsystem::Shields));
    }

    #[test]
    fn consume_torpedo_stops_at_zero() {
        let mut e = enterprise_at(SectorPosition::new(2, 2));
        e.torpedoes = 1;
        assert!(e.consume_torpedo().is_ok());
        assert_eq!(e.torpedoes, 0);
        assert!(matches!(
            e.consume_torpedo(),
            Err(GameError::InsufficientResources { required: 1, available: 0 })
        ));
        assert_eq!(e.torpedoes, 0);
    }
}
