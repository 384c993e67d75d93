use crate::game_engine::TurnOutcome;
use crate::io::OutputWriter;
use crate::models::constants::{Subsystem, GALAXY_SIZE, SECTOR_SIZE};
use crate::models::galaxy::Galaxy;
use crate::models::position::QuadrantPosition;

/// Short Range Sensor Scan of the current quadrant.
///
/// A science officer with scan detail keeps the scan working while the
/// sensors are less than two stardates from repair.
pub fn short_range_scan(galaxy: &Galaxy, output: &mut dyn OutputWriter) -> TurnOutcome {
    let damage = galaxy.enterprise().damage_of(Subsystem::ShortRangeSensors);
    if damage < 0.0 {
        if galaxy.crew().scan_detail() && damage > -2.0 {
            output.writeln("*** SHORT RANGE SENSORS DAMAGED, science officer compensating ***");
        } else {
            output.writeln("*** SHORT RANGE SENSORS ARE DAMAGED ***");
            output.writeln("");
            return TurnOutcome::Held;
        }
    }

    let border = "  +-----------------+";
    output.writeln("");
    output.writeln("    1 2 3 4 5 6 7 8");
    output.writeln(border);
    for y in 0..SECTOR_SIZE {
        output.writeln(&format!("{} | {} |", y + 1, galaxy.sector_map().render_row(y)));
    }
    output.writeln(border);
    output.writeln("");

    let ship = galaxy.enterprise();
    let here = &galaxy.sector_map().cardassians;
    output.writeln(&format!("Condition:  {}", galaxy.evaluate_condition().label()));
    output.writeln(&format!("Quadrant:   {}", ship.quadrant()));
    output.writeln(&format!("Sector:     {}", ship.sector()));
    output.writeln(&format!("Energy:     {}", ship.energy));
    output.writeln(&format!("Shields:    {}", ship.shields));
    output.writeln(&format!("Torpedoes:  {}", ship.torpedoes));
    output.writeln(&format!(
        "Cardassians: {} total, {} here",
        galaxy.remaining_cardassians(),
        here.len()
    ));
    output.writeln(&format!("Stardates:  {:.1} remaining", galaxy.stardates_remaining()));

    if !here.is_empty() {
        output.writeln("");
        output.writeln("Cardassian positions:");
        for cardassian in here {
            output.writeln(&format!("  {} - energy: {}", cardassian.sector, cardassian.energy));
        }
    }
    output.writeln("");
    TurnOutcome::Held
}

/// Long Range Sensor Scan around the current quadrant. Every scanned
/// quadrant becomes explored.
pub fn long_range_scan(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) -> TurnOutcome {
    if galaxy.enterprise().is_damaged(Subsystem::LongRangeSensors) {
        output.writeln("*** LONG RANGE SENSORS ARE DAMAGED ***");
        output.writeln("");
        return TurnOutcome::Held;
    }

    let here = galaxy.enterprise().quadrant();
    let range = galaxy.crew().lrs_range();
    let in_galaxy = |v: i32| (0..GALAXY_SIZE as i32).contains(&v);

    output.writeln("");
    output.writeln(&format!("Long Range Scan for Quadrant {}", here));
    if range > 1 {
        output.writeln("(Enhanced range from science officer)");
    }
    output.writeln("");

    let header: String = (here.x - range..=here.x + range)
        .map(|x| if in_galaxy(x) { format!(" {}  ", x + 1) } else { "    ".to_string() })
        .collect();
    let separator = format!("  +{}", "---+".repeat((range * 2 + 1) as usize));
    output.writeln(&format!("    {}", header));
    output.writeln(&separator);

    for y in here.y - range..=here.y + range {
        let mut line = if in_galaxy(y) { format!("{} |", y + 1) } else { "  |".to_string() };
        for x in here.x - range..=here.x + range {
            let pos = QuadrantPosition::new(x, y);
            if pos.in_bounds() {
                let quadrant = galaxy.quadrant_mut(pos);
                quadrant.explored = true;
                line.push_str(&quadrant.scan_code());
                line.push('|');
            } else {
                line.push_str("***|");
            }
        }
        output.writeln(&line);
        output.writeln(&separator);
    }

    output.writeln("");
    output.writeln("(Format: Cardassians/Starbases/Stars)");
    output.writeln("");
    TurnOutcome::Held
}

fn circuit_label(galaxy: &Galaxy, pos: QuadrantPosition) -> String {
    if galaxy.quadrant(pos).explored {
        format!("[{},{}]", pos.x + 1, pos.y + 1)
    } else {
        "[???]".to_string()
    }
}

/// Cumulative map of every quadrant, with unexplored ones masked.
pub fn star_map(galaxy: &Galaxy, output: &mut dyn OutputWriter) -> TurnOutcome {
    let here = galaxy.enterprise().quadrant();
    let separator = format!("    +{}", "----+".repeat(GALAXY_SIZE));

    output.writeln("");
    output.writeln("=== GALACTIC STAR MAP ===");
    output.writeln("");
    let header: String = (1..=GALAXY_SIZE).map(|x| format!("  {}  ", x)).collect();
    output.writeln(&format!("     {}", header));
    output.writeln(&separator);

    for (y, row) in galaxy.quadrants().iter().enumerate() {
        let mut line = format!(" {}  |", y + 1);
        for (x, quadrant) in row.iter().enumerate() {
            let is_here = here == QuadrantPosition::new(x as i32, y as i32);
            let cell = match (quadrant.explored, is_here) {
                (true, true) => format!(">{}<|", quadrant.scan_code()),
                (true, false) if quadrant.wormhole => format!("~{}~|", quadrant.scan_code()),
                (true, false) if quadrant.starbases > 0 => format!("*{}*|", quadrant.scan_code()),
                (true, false) => format!(" {} |", quadrant.scan_code()),
                (false, true) => ">???<|".to_string(),
                (false, false) => " ??? |".to_string(),
            };
            line.push_str(&cell);
        }
        output.writeln(&line);
        output.writeln(&separator);
    }

    const LEGEND: &[&str] = &[
        "",
        "Format: Cardassians/Starbases/Stars",
        ">###< = Enterprise location",
        "~###~ = Wormhole",
        "*###* = Starbase present",
        " ???  = Unexplored",
        "",
    ];
    for line in LEGEND {
        output.writeln(line);
    }
    output.writeln(&format!("Enterprise at quadrant {}", here));
    output.writeln(&format!("Cardassians remaining: {}", galaxy.remaining_cardassians()));
    output.writeln(&format!("Starbases: {}", galaxy.total_starbases()));

    let circuit = galaxy.wormholes();
    if circuit.iter().any(|&w| galaxy.quadrant(w).explored) {
        let mut labels: Vec<String> = circuit.iter().map(|&w| circuit_label(galaxy, w)).collect();
        labels.push(circuit_label(galaxy, circuit[0]));
        output.writeln("");
        output.writeln("Wormhole circuit (one-way):");
        output.writeln(&format!("  {}", labels.join(" -> ")));
    }

    output.writeln("");
    TurnOutcome::Held
}
