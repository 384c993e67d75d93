use crate::io::OutputWriter;
use crate::models::constants::HULL_SYSTEM_DAMAGE_CHANCE;
use crate::models::galaxy::Galaxy;
use crate::services::damage::damage_random_subsystem;

/// How a single hit is split between the shields and the hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShieldAbsorption {
    /// Shield units drained.
    pub spent: i32,
    /// Damage the drained units blocked.
    pub blocked: i32,
}

impl ShieldAbsorption {
    pub fn hull_damage(&self, damage: i32) -> i32 {
        damage - self.blocked
    }
}

/// Trade shield units for blocked damage at the engineer's efficiency.
/// A better engineer spends fewer units for the same hit.
pub fn shield_absorption(damage: i32, shields: i32, efficiency: f64) -> ShieldAbsorption {
    if shields <= 0 || damage <= 0 {
        return ShieldAbsorption { spent: 0, blocked: 0 };
    }
    let cost = ((f64::from(damage) / efficiency).floor() as i32).max(1);
    let spent = shields.min(cost);
    let blocked = damage.min((f64::from(spent) * efficiency).floor() as i32);
    ShieldAbsorption { spent, blocked }
}

/// Every Cardassian in the quadrant fires at the Enterprise. Does nothing
/// when the quadrant is clear or the ship is docked.
pub fn cardassians_attack(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) {
    if galaxy.sector_map().cardassians.is_empty() || galaxy.enterprise().docked {
        return;
    }

    output.writeln("");
    output.writeln("*** CARDASSIAN ATTACK ***");

    let ship = galaxy.enterprise().sector();
    let attackers: Vec<_> = galaxy
        .sector_map()
        .cardassians
        .iter()
        .map(|c| (c.sector, c.energy, ship.distance_to(c.sector)))
        .collect();

    for (sector, energy, distance) in attackers {
        let hit = 0.7 + galaxy.dice().roll() * 0.3;
        let damage = (f64::from(energy) / (distance + 1.0) * hit * 0.4).floor() as i32;

        if damage <= 0 {
            output.writeln(&format!("Cardassian at [{},{}] misses!", sector.x + 1, sector.y + 1));
            continue;
        }

        output.writeln(&format!("Cardassian at [{},{}] fires - ", sector.x + 1, sector.y + 1));

        let mut remaining = damage;
        if galaxy.enterprise().shields > 0 {
            let efficiency = galaxy.crew().shield_efficiency();
            let absorption = shield_absorption(damage, galaxy.enterprise().shields, efficiency);
            galaxy.enterprise_mut().shields -= absorption.spent;
            remaining = absorption.hull_damage(damage);
            output.writeln(&format!("  Shields absorb {} units", absorption.blocked));
        }

        if remaining > 0 {
            galaxy.enterprise_mut().energy -= remaining;
            output.writeln(&format!("  Hull takes {} damage!", remaining));

            if galaxy.dice().chance(HULL_SYSTEM_DAMAGE_CHANCE) {
                if let Some(subsystem) = damage_random_subsystem(galaxy, 1.0, 3.0) {
                    output.writeln(&format!("  *** {} DAMAGED! ***", subsystem.name()));
                }
            }
        }
    }

    output.writeln("");
}
