use crate::game_engine::TurnOutcome;
use crate::io::OutputWriter;
use crate::models::constants::INITIAL_TORPEDOES;
use crate::models::galaxy::Galaxy;

/// Dock at an adjacent starbase: full resupply to the crew-modified
/// capacity and every subsystem repaired. Takes no time.
pub fn dock(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) -> TurnOutcome {
    if !galaxy.check_docking() {
        output.writeln("");
        output.writeln("*** CANNOT DOCK ***");
        output.writeln("You must be adjacent to a starbase to dock.");
        output.writeln("Use SRSCAN to locate the nearest starbase (B).");
        output.writeln("");
        return TurnOutcome::Held;
    }

    output.writeln("");
    output.writeln("=== DOCKING COMPLETE ===");
    output.writeln("");
    if let Some(commander) = &galaxy.current_quadrant().commander {
        output.writeln(&format!("{}: \"Welcome to Starbase, Captain.", commander));
        output.writeln("We'll have you resupplied shortly.\"");
        output.writeln("");
    }

    let energy = galaxy.energy_capacity();
    let shields = galaxy.shield_capacity();
    let ship = galaxy.enterprise_mut();
    let before = (ship.energy, ship.shields, ship.torpedoes);
    ship.resupply(energy, shields);
    let repaired = ship.repair_all();

    output.writeln(&format!("Energy restored: +{} (now {})", energy - before.0, energy));
    output.writeln(&format!("Shields restored: +{} (now {})", shields - before.1, shields));
    output.writeln(&format!(
        "Torpedoes restored: +{} (now {})",
        INITIAL_TORPEDOES - before.2,
        INITIAL_TORPEDOES
    ));
    if repaired > 0 {
        output.writeln(&format!("Systems repaired: {}", repaired));
    }
    output.writeln("");
    output.writeln("Enterprise fully resupplied and repaired.");
    output.writeln("");
    tracing::debug!(quadrant = %galaxy.enterprise().quadrant(), repaired, "docked");
    TurnOutcome::Held
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, SHIP_SECTOR};
    use crate::io::BufferedOutput;
    use crate::models::constants::Subsystem;
    use crate::models::crew::CrewId;

    #[test]
    fn not_adjacent_cannot_dock() {
        let mut galaxy = fixtures::quiet_galaxy();
        fixtures::add_starbase(&mut galaxy, SHIP_SECTOR.offset(2, 0));
        galaxy.enterprise_mut().energy = 100;
        let mut out = BufferedOutput::new();

        assert_eq!(dock(&mut galaxy, &mut out), TurnOutcome::Held);
        assert!(out.contains("*** CANNOT DOCK ***"));
        assert_eq!(galaxy.enterprise().energy, 100);
    }

    #[test]
    fn docking_restores_everything() {
        let mut galaxy = fixtures::quiet_galaxy();
        fixtures::add_starbase(&mut galaxy, SHIP_SECTOR.offset(-1, -1));
        let here = galaxy.enterprise().quadrant();
        galaxy.quadrant_mut(here).commander = Some("Commander Sato".to_string());
        let ship = galaxy.enterprise_mut();
        ship.energy = 1200;
        ship.shields = 300;
        ship.torpedoes = 4;
        ship.damage_subsystem(Subsystem::Phasers, 2.0);
        ship.damage_subsystem(Subsystem::WarpEngines, 1.0);
        let mut out = BufferedOutput::new();

        dock(&mut galaxy, &mut out);

        assert!(out.contains("Commander Sato: \"Welcome to Starbase, Captain."));
        assert!(out.contains("Energy restored: +1800 (now 3000)"));
        assert!(out.contains("Shields restored: +700 (now 1000)"));
        assert!(out.contains("Torpedoes restored: +6 (now 10)"));
        assert!(out.contains("Systems repaired: 2"));
        let ship = galaxy.enterprise();
        assert!(ship.docked);
        assert_eq!((ship.energy, ship.shields, ship.torpedoes), (3000, 1000, 10));
        assert!(Subsystem::ALL.iter().all(|&s| !ship.is_damaged(s)));
        assert_eq!(galaxy.stardate(), 2000.0);
    }

    #[test]
    fn communications_officer_raises_capacity() {
        let mut galaxy = fixtures::quiet_galaxy();
        fixtures::add_starbase(&mut galaxy, SHIP_SECTOR.offset(0, 1));
        galaxy.crew_mut().assign(CrewId::find("comm2").unwrap());

        dock(&mut galaxy, &mut BufferedOutput::new());

        assert_eq!(galaxy.enterprise().energy, 3600);
        assert_eq!(galaxy.enterprise().shields, 1200);
    }
}
