use crate::io::OutputWriter;
use crate::models::buffs::Buff;
use crate::models::constants::Subsystem;
use crate::models::galaxy::Galaxy;

/// Passive repair after `elapsed` stardates. Tea doubles the base rate,
/// the chief engineer scales it.
pub fn repair_systems(galaxy: &mut Galaxy, elapsed: f64, output: &mut dyn OutputWriter) {
    let base = if galaxy.buffs().is_active(Buff::Tea) { 1.0 } else { 0.5 };
    let rate = base * galaxy.crew().repair_speed();

    let ship = galaxy.enterprise_mut();
    for subsystem in Subsystem::ALL {
        let slot = &mut ship.damage[subsystem as usize];
        if *slot < 0.0 {
            *slot += elapsed * rate;
            if *slot >= 0.0 {
                *slot = 0.0;
                output.writeln(&format!("{} repair complete.", subsystem.name()));
            }
        }
    }
}

/// Pick one subsystem uniformly and damage it by `min + roll * spread`
/// stardates, unless it is already worse off. Returns the subsystem when
/// the damage was applied.
pub fn damage_random_subsystem(galaxy: &mut Galaxy, min: f64, spread: f64) -> Option<Subsystem> {
    let subsystem = Subsystem::ALL[galaxy.dice().below(Subsystem::ALL.len())];
    let amount = min + galaxy.dice().roll() * spread;
    galaxy
        .enterprise_mut()
        .damage_subsystem(subsystem, amount)
        .then_some(subsystem)
}
