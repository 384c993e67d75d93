use crate::game_engine::{Confirmation, DefeatReason, GameEngine, GameState, TurnOutcome};
use crate::io::OutputWriter;
use crate::models::position::QuadrantPosition;
use crate::services::scan::short_range_scan;

/// Arm the self-destruct. The next line of input answers the question.
pub fn request_self_destruct(engine: &mut GameEngine, output: &mut dyn OutputWriter) -> TurnOutcome {
    output.writeln("");
    output.writeln("=== SELF-DESTRUCT SEQUENCE ===");
    output.writeln("");
    output.writeln("Are you sure, Captain? This will destroy the Enterprise. (Y/N)");
    output.writeln("");
    engine.await_confirmation(Confirmation::SelfDestruct);
    TurnOutcome::Held
}

/// Carry out (or abort) an armed self-destruct.
///
/// The blast takes every Cardassian in the quadrant with it. If that was
/// the last of them the game is won. Otherwise the crew escapes to the
/// nearest starbase and takes command of a replacement ship, or is
/// captured when no starbase is left. Terminal outcomes are set on the
/// engine directly.
pub fn confirm_self_destruct(engine: &mut GameEngine, answer: &str, output: &mut dyn OutputWriter) -> TurnOutcome {
    let answer = answer.trim().to_uppercase();
    if answer != "Y" && answer != "YES" {
        output.writeln("Self-destruct aborted.");
        output.writeln("");
        return TurnOutcome::Held;
    }

    const COUNTDOWN: &[&str] = &[
        "Captain's authorization confirmed.",
        "Self-destruct sequence activated.",
        "",
        "5...",
        "4...",
        "3...",
        "2...",
        "1...",
        "",
        "*** USS ENTERPRISE - DESTROYED ***",
        "",
    ];
    for line in COUNTDOWN {
        output.writeln(line);
    }

    let galaxy = engine.galaxy_mut();
    let destroyed = galaxy.destroy_all_cardassians_here();
    if destroyed > 0 {
        output.writeln(&format!(
            "The explosion engulfs {} Cardassian warship{}.",
            destroyed,
            if destroyed > 1 { "s" } else { "" }
        ));
    } else {
        output.writeln("The explosion tears through empty space.");
    }
    output.writeln("");
    tracing::info!(destroyed, remaining = galaxy.remaining_cardassians(), "self-destruct");

    if galaxy.all_cardassians_destroyed() {
        output.writeln("*** CONGRATULATIONS! ***");
        output.writeln("That was the last of the Cardassian fleet!");
        output.writeln("The Federation is saved, though the Enterprise is lost.");
        output.writeln("");
        let rating = galaxy.efficiency_rating();
        engine.finish(GameState::Victory { rating });
        return TurnOutcome::Held;
    }

    output.writeln("Emergency escape pods launched...");
    output.writeln("");

    let refuge = match galaxy.total_starbases() {
        0 => None,
        _ => galaxy.nearest_starbase(),
    };
    match refuge {
        Some(base) => commission_ghost_ship(engine, base, output),
        None => {
            const CAPTURED: &[&str] = &[
                "Your pod drifts through the debris field.",
                "",
                "A shadow falls across the viewport.",
                "A Cardassian Galor-class warship decloaks above you.",
                "",
                "\"Federation captain... you are now a prisoner",
                "of the Cardassian Union.\"",
                "",
                "=== TO BE CONTINUED... ===",
                "",
            ];
            for line in CAPTURED {
                output.writeln(line);
            }
            engine.finish(GameState::Defeat {
                reason: DefeatReason::Captured,
            });
        }
    }
    TurnOutcome::Held
}

/// Refit the ship and park it next to the starbase at `base`.
fn commission_ghost_ship(engine: &mut GameEngine, base: QuadrantPosition, output: &mut dyn OutputWriter) {
    let galaxy = engine.galaxy_mut();
    let commander = galaxy
        .quadrant(base)
        .commander
        .clone()
        .unwrap_or_else(|| "The starbase commander".to_string());

    output.writeln(&format!("Escape pod reaches Starbase at quadrant {}.", base));
    output.writeln("");
    output.writeln(&format!("{} meets you in the docking bay.", commander));
    const SPEECH: &[&str] = &[
        "",
        "\"Captain, we have a ship for you. She was found drifting",
        "near the Badlands two weeks ago. No crew, no logs, no",
        "indication of what happened. Not a soul on board.",
        "",
        "Our repair crews have searched her stem to stern and",
        "declared her good as new. With the war effort, we need",
        "every ship we can get.",
        "",
        "She's yours now, Captain. Try not to blow this one up.\"",
        "",
        "=== USS ENTERPRISE-A COMMISSIONED ===",
        "",
    ];
    for line in SPEECH {
        output.writeln(line);
    }

    let ship = galaxy.enterprise_mut();
    ship.refit();
    ship.quadrant = base;
    galaxy.enter_quadrant(None);

    galaxy.berth_at_starbase();
    tracing::info!(quadrant = %base, docked = galaxy.enterprise().docked, "ghost ship commissioned");

    engine.set_ghost_ship(true);
    short_range_scan(engine.galaxy(), output);
}
