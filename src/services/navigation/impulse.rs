use crate::game_engine::TurnOutcome;
use crate::io::OutputWriter;
use crate::models::constants::{SectorContent, IMPULSE_ENERGY_PER_SECTOR, IMPULSE_TIME_PER_SECTOR};
use crate::models::galaxy::Galaxy;
use crate::models::navigation_types::Delta;
use crate::services::combat::cardassians_attack;
use crate::services::damage::repair_systems;

use super::wormhole::enter_wormhole;
use super::{discounted, movement_cost};

fn show_usage(output: &mut dyn OutputWriter) {
    output.writeln("");
    output.writeln("IMPULSE x, y - Move within the current quadrant");
    output.writeln("");
    output.writeln("Example: IMPULSE 1, 2   (one sector right, two up)");
    output.writeln("Example: IMPULSE 0, -1  (one sector down)");
    output.writeln("");
    output.writeln("Positive X = right, Positive Y = up");
    output.writeln("");
}

/// Move `delta` sectors within the current quadrant. Blocked moves cost
/// nothing; flying into a wormhole pays for the attempt and starts a
/// transit instead.
pub fn impulse(galaxy: &mut Galaxy, delta: Option<Delta>, output: &mut dyn OutputWriter) -> TurnOutcome {
    let Some(delta) = delta else {
        show_usage(output);
        return TurnOutcome::Held;
    };

    if delta.is_zero() {
        output.writeln("You must specify a direction to move.");
        return TurnOutcome::Held;
    }

    let distance = delta.distance();
    let cost = movement_cost(distance, IMPULSE_ENERGY_PER_SECTOR, galaxy.crew().impulse_cost());
    let available = galaxy.enterprise().energy;
    if available < cost {
        output.writeln("Insufficient energy for impulse.");
        output.writeln(&format!("Required: {}  Available: {}", cost, available));
        return TurnOutcome::Held;
    }

    let (dx, dy) = delta.grid_offset();
    let target = galaxy.enterprise().sector().offset(dx, dy);
    if !target.in_bounds() {
        output.writeln("*** BLOCKED BY QUADRANT BOUNDARY ***");
        output.writeln("Use WARP to travel to adjacent quadrants.");
        return TurnOutcome::Held;
    }

    match galaxy.sector_map().get(target) {
        SectorContent::Star => {
            output.writeln("*** BLOCKED BY STAR ***");
            output.writeln("Navigation aborted - cannot fly through stars.");
            return TurnOutcome::Held;
        }
        SectorContent::Cardassian => {
            output.writeln("*** BLOCKED BY CARDASSIAN WARSHIP ***");
            output.writeln("Use phasers or torpedoes to clear the path.");
            return TurnOutcome::Held;
        }
        SectorContent::Starbase => {
            output.writeln("*** BLOCKED BY STARBASE ***");
            output.writeln("Move adjacent to starbase and use DOCK command.");
            return TurnOutcome::Held;
        }
        SectorContent::Wormhole => {
            let spent = discounted(cost, galaxy.buffs());
            galaxy.enterprise_mut().energy -= spent;
            return enter_wormhole(galaxy, output);
        }
        SectorContent::Empty | SectorContent::Enterprise => {}
    }

    galaxy.relocate_enterprise(target);
    let spent = discounted(cost, galaxy.buffs());
    galaxy.enterprise_mut().energy -= spent;
    let elapsed = f64::from(distance) * IMPULSE_TIME_PER_SECTOR;
    galaxy.advance_time(elapsed);
    galaxy.tick_buffs();
    galaxy.check_docking();

    output.writeln(&format!("Impulse complete. Energy used: {}", spent));
    output.writeln("");

    cardassians_attack(galaxy, output);
    repair_systems(galaxy, elapsed, output);
    TurnOutcome::Advanced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, SHIP_SECTOR};
    use crate::io::BufferedOutput;
    use crate::models::buffs::Buff;
    use crate::models::position::SectorPosition;

    fn assert_blocked(galaxy: &mut Galaxy, delta: Delta, message: &str) {
        let mut out = BufferedOutput::new();
        assert_eq!(impulse(galaxy, Some(delta), &mut out), TurnOutcome::Held);
        assert!(out.contains(message), "{:?}", out.lines);
        assert_eq!(galaxy.enterprise().sector(), SHIP_SECTOR);
        assert_eq!(galaxy.enterprise().energy, 3000);
        assert_eq!(galaxy.stardate(), 2000.0);
    }

    #[test]
    fn blocked_moves_cost_nothing() {
        let mut galaxy = fixtures::quiet_galaxy();
        fixtures::add_star(&mut galaxy, SHIP_SECTOR.offset(1, 0));
        fixtures::add_cardassian(&mut galaxy, SHIP_SECTOR.offset(-1, 0), 300);
        fixtures::add_starbase(&mut galaxy, SHIP_SECTOR.offset(0, 2));

        assert_blocked(&mut galaxy, Delta::new(5, 0), "*** BLOCKED BY QUADRANT BOUNDARY ***");
        assert_blocked(&mut galaxy, Delta::new(1, 0), "*** BLOCKED BY STAR ***");
        assert_blocked(&mut galaxy, Delta::new(-1, 0), "*** BLOCKED BY CARDASSIAN WARSHIP ***");
        // Positive y is up, so the starbase two rows down is at -2.
        assert_blocked(&mut galaxy, Delta::new(0, -2), "*** BLOCKED BY STARBASE ***");
    }

    #[test]
    fn zero_move_is_refused() {
        let mut galaxy = fixtures::quiet_galaxy();
        let mut out = BufferedOutput::new();
        assert_eq!(impulse(&mut galaxy, Some(Delta::new(0, 0)), &mut out), TurnOutcome::Held);
        assert!(out.contains("You must specify a direction to move."));
    }

    #[test]
    fn positive_y_decreases_the_row() {
        let mut galaxy = fixtures::quiet_galaxy();
        let mut out = BufferedOutput::new();

        assert_eq!(impulse(&mut galaxy, Some(Delta::new(2, 1)), &mut out), TurnOutcome::Advanced);

        let expected = SectorPosition::new(5, 2);
        assert_eq!(galaxy.enterprise().sector(), expected);
        assert_eq!(galaxy.sector_map().get(expected), SectorContent::Enterprise);
        assert_eq!(galaxy.sector_map().get(SHIP_SECTOR), SectorContent::Empty);
        assert_eq!(galaxy.enterprise().energy, 2970);
        assert!((galaxy.stardate() - 2000.3).abs() < 1e-9);
        assert!(out.contains("Impulse complete. Energy used: 30"));
    }

    #[test]
    fn arriving_next_to_a_starbase_docks() {
        let mut galaxy = fixtures::quiet_galaxy();
        fixtures::add_starbase(&mut galaxy, SectorPosition::new(6, 3));

        impulse(&mut galaxy, Some(Delta::new(2, 0)), &mut BufferedOutput::new());

        assert!(galaxy.enterprise().docked);
    }

    #[test]
    fn coffee_reports_discounted_cost() {
        let mut galaxy = fixtures::quiet_galaxy();
        galaxy.buffs_mut().activate(Buff::Coffee, 1);
        let mut out = BufferedOutput::new();

        impulse(&mut galaxy, Some(Delta::new(0, 3)), &mut out);

        assert!(out.contains("Impulse complete. Energy used: 21"));
        assert_eq!(galaxy.enterprise().energy, 2979);
        assert_eq!(galaxy.buffs().coffee, 0);
    }

    #[test]
    fn wormhole_cell_charges_the_attempt_and_transits() {
        let mut galaxy = fixtures::quiet_galaxy();
        let circuit = galaxy.wormholes().to_vec();
        galaxy.enterprise_mut().quadrant = circuit[0];
        galaxy.quadrant_mut(circuit[1]).cardassians = 0;
        fixtures::add_wormhole(&mut galaxy, SHIP_SECTOR.offset(2, 0));
        galaxy.buffs_mut().activate(Buff::Coffee, 1);
        let destination = galaxy.wormhole_destination();
        // No turbulence.
        galaxy.dice().script([0.9]);
        let mut out = BufferedOutput::new();

        assert_eq!(impulse(&mut galaxy, Some(Delta::new(2, 0)), &mut out), TurnOutcome::Advanced);

        assert!(out.contains("=== ENTERING WORMHOLE ==="));
        assert!(!out.contains("Impulse complete."));
        assert_eq!(Some(galaxy.enterprise().quadrant()), destination);
        // 20 for two sectors, 30% off with coffee.
        assert_eq!(galaxy.enterprise().energy, 2986);
        assert_eq!(galaxy.stardate(), 2000.5);
    }

    #[test]
    fn insufficient_energy_is_refused() {
        let mut galaxy = fixtures::quiet_galaxy();
        galaxy.enterprise_mut().energy = 15;
        let mut out = BufferedOutput::new();

        assert_eq!(impulse(&mut galaxy, Some(Delta::new(1, 1)), &mut out), TurnOutcome::Held);
        assert!(out.contains("Required: 20  Available: 15"));
    }
}
