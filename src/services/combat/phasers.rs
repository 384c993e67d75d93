use crate::game_engine::TurnOutcome;
use crate::io::OutputWriter;
use crate::models::buffs::Buff;
use crate::models::constants::{Subsystem, RAKTAJINO_PHASER_BONUS};
use crate::models::galaxy::Galaxy;
use crate::ui::presenters::CombatPresenter;

use super::cardassian_attack::cardassians_attack;

/// Damage falls off with distance: full at point blank, about a third
/// across the quadrant.
pub fn phaser_falloff(distance: f64) -> f64 {
    1.0 / (1.0 + distance * 0.3)
}

fn show_usage(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
    output.writeln("");
    output.writeln("PHASERS [energy] - Fire phasers");
    output.writeln("");
    output.writeln("Example: PHASERS 500");
    output.writeln("");
    output.writeln(&format!(
        "Energy will be distributed among all {} Cardassian(s).",
        galaxy.sector_map().cardassians.len()
    ));
    output.writeln("Damage decreases with distance.");
    output.writeln(&format!("Available energy: {}", galaxy.enterprise().energy));
    output.writeln("");
}

/// Fire `energy` units of phaser energy, split evenly across every
/// Cardassian in the quadrant.
pub fn fire_phasers(
    galaxy: &mut Galaxy,
    energy: Option<i32>,
    output: &mut dyn OutputWriter,
) -> TurnOutcome {
    if galaxy.enterprise().is_damaged(Subsystem::Phasers) {
        output.writeln("");
        output.writeln("*** PHASERS ARE DAMAGED ***");
        output.writeln("");
        return TurnOutcome::Held;
    }

    if galaxy.sector_map().cardassians.is_empty() {
        output.writeln("");
        output.writeln("No Cardassians in this quadrant.");
        output.writeln("");
        return TurnOutcome::Held;
    }

    let energy = match energy {
        Some(units) if units > 0 => units,
        _ => {
            show_usage(galaxy, output);
            return TurnOutcome::Held;
        }
    };

    if energy > galaxy.enterprise().energy {
        output.writeln("");
        output.writeln(&format!("Insufficient energy. Available: {}", galaxy.enterprise().energy));
        output.writeln("");
        return TurnOutcome::Held;
    }

    galaxy.enterprise_mut().energy -= energy;
    output.writeln("");
    output.writeln("=== FIRING PHASERS ===");
    output.writeln(&format!("Energy used: {}", energy));
    output.writeln("");

    let share = f64::from(energy) / galaxy.sector_map().cardassians.len() as f64;
    let bonus = if galaxy.buffs().is_active(Buff::Raktajino) {
        RAKTAJINO_PHASER_BONUS
    } else {
        1.0
    };
    let tactical = galaxy.crew().phaser_damage();
    let ship = galaxy.enterprise().sector();

    let mut destroyed = Vec::new();
    for i in 0..galaxy.sector_map().cardassians.len() {
        let jitter = 0.8 + galaxy.dice().roll() * 0.4;
        let target = &mut galaxy.sector_map_mut().cardassians[i];
        let falloff = phaser_falloff(ship.distance_to(target.sector));
        let damage = (share * falloff * jitter * bonus * tactical).floor() as i32;

        target.energy -= damage;
        CombatPresenter::show_cardassian_hit(target.sector, damage, target.energy, output);
        if !target.is_alive() {
            destroyed.push(target.sector);
        }
    }

    for sector in destroyed {
        galaxy.destroy_cardassian(sector);
    }
    output.writeln("");

    cardassians_attack(galaxy, output);
    galaxy.tick_buffs();
    TurnOutcome::Advanced
}
