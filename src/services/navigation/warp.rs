use crate::game_engine::TurnOutcome;
use crate::io::OutputWriter;
use crate::models::constants::{
    Subsystem, GALAXY_SIZE, WARP_ENERGY_PER_QUADRANT, WARP_TIME_PER_QUADRANT,
};
use crate::models::galaxy::Galaxy;
use crate::models::navigation_types::Delta;
use crate::models::position::QuadrantPosition;
use crate::services::combat::cardassians_attack;
use crate::services::damage::repair_systems;
use crate::ui::presenters::CombatPresenter;

use super::{discounted, movement_cost};

fn show_usage(output: &mut dyn OutputWriter) {
    output.writeln("");
    output.writeln("WARP x, y - Move between quadrants");
    output.writeln("");
    output.writeln("Example: WARP 1, 1   (one quadrant right, one up)");
    output.writeln("Example: WARP 0, -1  (one quadrant down)");
    output.writeln("");
    output.writeln("Positive X = right, Positive Y = up");
    output.writeln("");
}

/// Clamp a target quadrant to the galaxy. Returns the clamped position
/// and whether the edge was hit.
fn clamp_to_galaxy(target: QuadrantPosition) -> (QuadrantPosition, bool) {
    let max = GALAXY_SIZE as i32 - 1;
    let clamped = QuadrantPosition::new(target.x.clamp(0, max), target.y.clamp(0, max));
    (clamped, clamped != target)
}

/// Warp `delta` quadrants. The base cost gates the move; the coffee
/// discount only applies to what is actually deducted.
pub fn warp(galaxy: &mut Galaxy, delta: Option<Delta>, output: &mut dyn OutputWriter) -> TurnOutcome {
    if galaxy.enterprise().is_damaged(Subsystem::WarpEngines) {
        output.writeln("*** WARP ENGINES ARE DAMAGED ***");
        output.writeln("Use IMPULSE for emergency movement within this quadrant.");
        output.writeln("");
        return TurnOutcome::Held;
    }

    let Some(delta) = delta else {
        show_usage(output);
        return TurnOutcome::Held;
    };

    if delta.is_zero() {
        output.writeln("Already here! Use IMPULSE to move within the quadrant.");
        return TurnOutcome::Held;
    }

    let distance = delta.distance();
    let cost = movement_cost(distance, WARP_ENERGY_PER_QUADRANT, galaxy.crew().warp_cost());
    let available = galaxy.enterprise().energy;
    if available < cost {
        output.writeln("Insufficient energy for warp.");
        output.writeln(&format!("Required: {}  Available: {}", cost, available));
        return TurnOutcome::Held;
    }

    let (dx, dy) = delta.grid_offset();
    let here = galaxy.enterprise().quadrant();
    let (destination, blocked) = clamp_to_galaxy(QuadrantPosition::new(here.x + dx, here.y + dy));
    if blocked {
        output.writeln("*** BLOCKED BY EDGE OF GALAXY ***");
        output.writeln("Navigation computer adjusted course.");
    }

    let spent = discounted(cost, galaxy.buffs());
    galaxy.enterprise_mut().energy -= spent;
    let elapsed = f64::from(distance) * WARP_TIME_PER_QUADRANT;
    galaxy.advance_time(elapsed);
    galaxy.tick_buffs();

    let sector = galaxy.enterprise().sector();
    galaxy.enterprise_mut().quadrant = destination;
    output.writeln("");
    output.writeln(&format!("Entering quadrant {}", destination));
    galaxy.enter_quadrant(Some(sector));

    CombatPresenter::show_red_alert(galaxy.sector_map().cardassians.len(), output);
    output.writeln(&format!("Warp complete. Energy used: {}", spent));
    output.writeln("");

    cardassians_attack(galaxy, output);
    repair_systems(galaxy, elapsed, output);
    TurnOutcome::Advanced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::io::BufferedOutput;
    use crate::models::buffs::Buff;

    /// Park the ship in `quadrant` and clear `destination` of enemies.
    fn staged(quadrant: QuadrantPosition, destination: QuadrantPosition) -> Galaxy {
        let mut galaxy = fixtures::quiet_galaxy();
        galaxy.enterprise_mut().quadrant = quadrant;
        galaxy.quadrant_mut(destination).cardassians = 0;
        galaxy
    }

    #[test]
    fn damaged_engines_refuse() {
        let mut galaxy = fixtures::quiet_galaxy();
        galaxy.enterprise_mut().damage_subsystem(Subsystem::WarpEngines, 1.0);
        let mut out = BufferedOutput::new();

        assert_eq!(warp(&mut galaxy, Some(Delta::new(1, 0)), &mut out), TurnOutcome::Held);
        assert!(out.contains("*** WARP ENGINES ARE DAMAGED ***"));
    }

    #[test]
    fn missing_or_zero_delta_is_refused() {
        let mut galaxy = fixtures::quiet_galaxy();
        let mut out = BufferedOutput::new();

        assert_eq!(warp(&mut galaxy, None, &mut out), TurnOutcome::Held);
        assert!(out.contains("WARP x, y - Move between quadrants"));
        assert_eq!(warp(&mut galaxy, Some(Delta::new(0, 0)), &mut out), TurnOutcome::Held);
        assert!(out.contains("Already here! Use IMPULSE to move within the quadrant."));
        assert_eq!(galaxy.stardate(), 2000.0);
    }

    #[test]
    fn base_cost_gates_even_with_coffee() {
        let mut galaxy = fixtures::quiet_galaxy();
        galaxy.enterprise_mut().energy = 149;
        galaxy.buffs_mut().activate(Buff::Coffee, 5);
        let mut out = BufferedOutput::new();

        assert_eq!(warp(&mut galaxy, Some(Delta::new(3, 0)), &mut out), TurnOutcome::Held);
        assert!(out.contains("Required: 150  Available: 149"));
        assert_eq!(galaxy.enterprise().energy, 149);
        assert_eq!(galaxy.buffs().coffee, 5);
    }

    #[test]
    fn coffee_discounts_the_deduction() {
        let from = QuadrantPosition::new(2, 4);
        let to = QuadrantPosition::new(5, 4);
        let mut galaxy = staged(from, to);
        galaxy.enterprise_mut().energy = 150;
        galaxy.buffs_mut().activate(Buff::Coffee, 5);
        let mut out = BufferedOutput::new();

        assert_eq!(warp(&mut galaxy, Some(Delta::new(3, 0)), &mut out), TurnOutcome::Advanced);

        assert_eq!(galaxy.enterprise().energy, 45);
        assert!(out.contains("Warp complete. Energy used: 105"));
        assert_eq!(galaxy.buffs().coffee, 4);
        assert_eq!(galaxy.stardate(), 2001.5);
    }

    #[test]
    fn positive_y_moves_up_the_map() {
        let from = QuadrantPosition::new(3, 3);
        let to = QuadrantPosition::new(4, 2);
        let mut galaxy = staged(from, to);
        let mut out = BufferedOutput::new();

        warp(&mut galaxy, Some(Delta::new(1, 1)), &mut out);

        assert_eq!(galaxy.enterprise().quadrant(), to);
        assert!(out.contains("Entering quadrant [5, 3]"));
        assert!(galaxy.current_quadrant().explored);
    }

    #[test]
    fn galaxy_edge_clamps_but_still_spends() {
        let from = QuadrantPosition::new(6, 0);
        let to = QuadrantPosition::new(7, 0);
        let mut galaxy = staged(from, to);
        let mut out = BufferedOutput::new();

        assert_eq!(warp(&mut galaxy, Some(Delta::new(2, 1)), &mut out), TurnOutcome::Advanced);

        assert!(out.contains("*** BLOCKED BY EDGE OF GALAXY ***"));
        assert_eq!(galaxy.enterprise().quadrant(), to);
        assert_eq!(galaxy.enterprise().energy, 2850);
        assert_eq!(galaxy.stardate(), 2001.5);
    }

    #[test]
    fn travel_time_repairs_damage() {
        let from = QuadrantPosition::new(0, 0);
        let to = QuadrantPosition::new(0, 2);
        let mut galaxy = staged(from, to);
        galaxy.enterprise_mut().damage_subsystem(Subsystem::Computer, 0.5);
        let mut out = BufferedOutput::new();

        warp(&mut galaxy, Some(Delta::new(0, -2)), &mut out);

        assert_eq!(galaxy.enterprise().damage_of(Subsystem::Computer), 0.0);
        assert!(out.contains("Computer repair complete."));
    }
}
