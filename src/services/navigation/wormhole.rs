use crate::game_engine::TurnOutcome;
use crate::io::OutputWriter;
use crate::models::constants::{SectorContent, TURBULENCE_CHANCE, WORMHOLE_TRANSIT_TIME};
use crate::models::galaxy::Galaxy;
use crate::services::combat::cardassians_attack;
use crate::services::damage::{damage_random_subsystem, repair_systems};
use crate::ui::presenters::CombatPresenter;

/// Carry the ship to the next quadrant on the wormhole circuit.
///
/// Transit takes half a stardate and may shake loose a subsystem on the
/// way. If the current quadrant is not on the circuit nothing happens.
pub fn enter_wormhole(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) -> TurnOutcome {
    let Some(destination) = galaxy.wormhole_destination() else {
        output.writeln("The wormhole flickers and destabilizes. Nothing happens.");
        return TurnOutcome::Held;
    };

    output.writeln("");
    output.writeln("=== ENTERING WORMHOLE ===");
    output.writeln("");
    output.writeln("The ship shudders as it crosses the event horizon...");
    output.writeln("Subspace corridor detected - transit in progress...");

    let sector = galaxy.enterprise().sector();
    galaxy.sector_map_mut().set(sector, SectorContent::Empty);

    if galaxy.dice().chance(TURBULENCE_CHANCE) {
        output.writeln("");
        output.writeln("*** SUBSPACE TURBULENCE ***");
        match damage_random_subsystem(galaxy, 0.5, 1.5) {
            Some(subsystem) => {
                output.writeln(&format!("{} damaged by subspace distortion!", subsystem.name()))
            }
            None => output.writeln("The ship rattles but holds together."),
        }
    }

    galaxy.advance_time(WORMHOLE_TRANSIT_TIME);
    galaxy.tick_buffs();

    galaxy.enterprise_mut().quadrant = destination;
    output.writeln("");
    output.writeln(&format!("Emerging from wormhole in quadrant {}", destination));
    galaxy.enter_quadrant(Some(sector));
    tracing::debug!(quadrant = %destination, "wormhole transit");

    CombatPresenter::show_red_alert(galaxy.sector_map().cardassians.len(), output);
    output.writeln("");

    cardassians_attack(galaxy, output);
    repair_systems(galaxy, WORMHOLE_TRANSIT_TIME, output);
    TurnOutcome::Advanced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::io::BufferedOutput;
    use crate::models::constants::Subsystem;
    use crate::models::position::QuadrantPosition;

    /// Move the ship onto the first circuit member and clear its successor.
    fn at_first_wormhole() -> (Galaxy, QuadrantPosition) {
        let mut galaxy = fixtures::quiet_galaxy();
        let circuit = galaxy.wormholes().to_vec();
        galaxy.enterprise_mut().quadrant = circuit[0];
        galaxy.quadrant_mut(circuit[1]).cardassians = 0;
        (galaxy, circuit[1])
    }

    #[test]
    fn off_circuit_transit_does_nothing() {
        let mut galaxy = fixtures::quiet_galaxy();
        let off = (0..8)
            .flat_map(|y| (0..8).map(move |x| QuadrantPosition::new(x, y)))
            .find(|q| !galaxy.wormholes().contains(q))
            .unwrap();
        galaxy.enterprise_mut().quadrant = off;
        let mut out = BufferedOutput::new();

        assert_eq!(enter_wormhole(&mut galaxy, &mut out), TurnOutcome::Held);
        assert!(out.contains("The wormhole flickers and destabilizes. Nothing happens."));
        assert_eq!(galaxy.enterprise().quadrant(), off);
        assert_eq!(galaxy.stardate(), 2000.0);
    }

    #[test]
    fn transit_follows_the_circuit() {
        let (mut galaxy, next) = at_first_wormhole();
        galaxy.dice().script([0.9]);
        let mut out = BufferedOutput::new();

        assert_eq!(enter_wormhole(&mut galaxy, &mut out), TurnOutcome::Advanced);

        assert_eq!(galaxy.enterprise().quadrant(), next);
        assert_eq!(galaxy.stardate(), 2000.5);
        assert!(out.contains("=== ENTERING WORMHOLE ==="));
        assert!(out.contains(&format!("Emerging from wormhole in quadrant {}", next)));
        assert!(!out.contains("*** SUBSPACE TURBULENCE ***"));
        assert_eq!(galaxy.sector_map().count(SectorContent::Enterprise), 1);
    }

    #[test]
    fn turbulence_damages_a_system() {
        let (mut galaxy, _) = at_first_wormhole();
        // Turbulence, Warp Engines, 0.5 + 1.0 * 1.5 = 2.0 stardates.
        galaxy.dice().script([0.1, 0.0, 1.0]);
        let mut out = BufferedOutput::new();

        enter_wormhole(&mut galaxy, &mut out);

        assert!(out.contains("Warp Engines damaged by subspace distortion!"));
        // Half a stardate of transit repairs 0.25.
        assert_eq!(galaxy.enterprise().damage_of(Subsystem::WarpEngines), -1.75);
    }

    #[test]
    fn turbulence_never_improves_a_worse_system() {
        let (mut galaxy, _) = at_first_wormhole();
        galaxy.enterprise_mut().damage_subsystem(Subsystem::WarpEngines, 4.0);
        galaxy.dice().script([0.1, 0.0, 0.0]);
        let mut out = BufferedOutput::new();

        enter_wormhole(&mut galaxy, &mut out);

        assert!(out.contains("The ship rattles but holds together."));
        assert_eq!(galaxy.enterprise().damage_of(Subsystem::WarpEngines), -3.75);
    }

    #[test]
    fn last_wormhole_wraps_to_the_first() {
        let mut galaxy = fixtures::quiet_galaxy();
        let circuit = galaxy.wormholes().to_vec();
        let last = circuit[circuit.len() - 1];
        galaxy.enterprise_mut().quadrant = last;
        assert_eq!(galaxy.wormhole_destination(), Some(circuit[0]));
    }
}
