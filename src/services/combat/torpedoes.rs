use crate::game_engine::TurnOutcome;
use crate::io::OutputWriter;
use crate::models::constants::{SectorContent, Subsystem, TORPEDO_BASE_ACCURACY};
use crate::models::galaxy::Galaxy;
use crate::models::position::SectorPosition;

use super::cardassian_attack::cardassians_attack;

/// Check preconditions for firing torpedoes.
fn check_torpedo_readiness(galaxy: &Galaxy, output: &mut dyn OutputWriter) -> bool {
    if galaxy.enterprise().is_damaged(Subsystem::PhotonTorpedoes) {
        output.writeln("");
        output.writeln("*** PHOTON TORPEDOES ARE DAMAGED ***");
        output.writeln("");
        return false;
    }

    if galaxy.enterprise().torpedoes <= 0 {
        report_empty_magazine(output);
        return false;
    }

    true
}

fn report_empty_magazine(output: &mut dyn OutputWriter) {
    output.writeln("");
    output.writeln("No torpedoes remaining. Dock at a starbase to resupply.");
    output.writeln("");
}

fn show_usage(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
    output.writeln("");
    output.writeln("TORPEDOES x, y - Fire a photon torpedo at sector coordinates");
    output.writeln("");
    output.writeln("Example: TORPEDOES 3, 5");
    output.writeln("");
    output.writeln(&format!("Torpedoes remaining: {}", galaxy.enterprise().torpedoes));
    output.writeln("Use SRSCAN to locate Cardassians (C).");
    output.writeln("");
}

/// Resolve what the torpedo does at `target`.
fn detonate(galaxy: &mut Galaxy, target: SectorPosition, output: &mut dyn OutputWriter) {
    match galaxy.sector_map().get(target) {
        SectorContent::Cardassian => {
            let hit_chance = TORPEDO_BASE_ACCURACY * galaxy.crew().torpedo_accuracy();
            if galaxy.dice().chance(hit_chance) {
                output.writeln("*** DIRECT HIT! CARDASSIAN DESTROYED! ***");
                galaxy.destroy_cardassian(target);
            } else {
                output.writeln("Torpedo veers off course, near miss!");
            }
        }
        SectorContent::Star => output.writeln("Torpedo impacts star - no effect."),
        SectorContent::Starbase => {
            output.writeln("");
            output.writeln("*** YOU DESTROYED A FEDERATION STARBASE! ***");
            output.writeln("You will be court-martialed for this!");
            output.writeln("");
            galaxy.destroy_starbase(target);
        }
        SectorContent::Enterprise => {
            output.writeln("You cannot fire at yourself!");
            galaxy.enterprise_mut().torpedoes += 1;
        }
        SectorContent::Empty | SectorContent::Wormhole => {
            output.writeln("Torpedo explodes in empty space.")
        }
    }
}

/// Fire one photon torpedo at the 1-based sector `target`.
pub fn fire_torpedoes(
    galaxy: &mut Galaxy,
    target: Option<(i32, i32)>,
    output: &mut dyn OutputWriter,
) -> TurnOutcome {
    if !check_torpedo_readiness(galaxy, output) {
        return TurnOutcome::Held;
    }

    let Some((x, y)) = target else {
        show_usage(galaxy, output);
        return TurnOutcome::Held;
    };

    let target = SectorPosition::new(x - 1, y - 1);
    if !target.in_bounds() {
        output.writeln("");
        output.writeln("Target out of range. Coordinates must be 1-8.");
        output.writeln("");
        return TurnOutcome::Held;
    }

    if let Err(err) = galaxy.enterprise_mut().consume_torpedo() {
        tracing::debug!(%err, "torpedo launch refused");
        report_empty_magazine(output);
        return TurnOutcome::Held;
    }
    output.writeln("");
    output.writeln("=== TORPEDO AWAY ===");
    output.writeln(&format!("Targeting sector {}", target));
    output.writeln(&format!("Torpedoes remaining: {}", galaxy.enterprise().torpedoes));
    output.writeln("");

    detonate(galaxy, target, output);
    output.writeln("");

    cardassians_attack(galaxy, output);
    galaxy.tick_buffs();
    TurnOutcome::Advanced
}
