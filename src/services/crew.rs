use crate::game_engine::TurnOutcome;
use crate::io::OutputWriter;
use crate::models::crew::{CrewId, Role};
use crate::models::galaxy::Galaxy;
use crate::ui::presenters::CrewPresenter;

/// `CREW` shows the bridge roster, plus the starbase pool when docked.
/// `CREW SWAP <role> <n>` brings the n-th pooled officer of that role
/// onto the bridge.
pub fn manage_crew(galaxy: &mut Galaxy, args: &[String], output: &mut dyn OutputWriter) -> TurnOutcome {
    match args {
        [keyword, role, pick, ..] if keyword.eq_ignore_ascii_case("SWAP") => {
            swap_crew(galaxy, role, pick, output);
        }
        _ => {
            CrewPresenter::show_roster(galaxy.crew(), output);
            if galaxy.enterprise().docked {
                CrewPresenter::show_starbase_pool(&galaxy.current_quadrant().available_crew, output);
            }
        }
    }
    TurnOutcome::Held
}

fn swap_crew(galaxy: &mut Galaxy, role_name: &str, pick: &str, output: &mut dyn OutputWriter) {
    if !galaxy.enterprise().docked {
        output.writeln("");
        output.writeln("You must be docked at a starbase to swap crew.");
        output.writeln("");
        return;
    }

    let Some(role) = Role::parse(role_name) else {
        let roles: Vec<&str> = Role::ALL.iter().map(|r| r.label()).collect();
        output.writeln("");
        output.writeln(&format!("Unknown role: {}", role_name));
        output.writeln(&format!("Roles: {}", roles.join(", ")));
        output.writeln("");
        return;
    };

    let candidates: Vec<CrewId> = galaxy
        .current_quadrant()
        .available_crew
        .iter()
        .copied()
        .filter(|id| id.role() == role)
        .collect();

    if candidates.is_empty() {
        output.writeln("");
        output.writeln(&format!("No {} crew available at this starbase.", role.label()));
        output.writeln("");
        return;
    }

    let chosen = match pick.parse::<usize>() {
        Ok(n) if (1..=candidates.len()).contains(&n) => candidates[n - 1],
        _ => {
            output.writeln("");
            output.writeln(&format!("Invalid selection. Choose 1-{}.", candidates.len()));
            output.writeln("");
            return;
        }
    };

    let previous = galaxy.crew_mut().assign(chosen);
    let here = galaxy.enterprise().quadrant();
    let pool = &mut galaxy.quadrant_mut(here).available_crew;
    pool.retain(|&id| id != chosen);
    if let Some(old) = previous {
        pool.push(old);
    }

    let member = chosen.member();
    output.writeln("");
    output.writeln(&format!("{} reports for duty as {}.", member.name, role.label()));
    if let Some(old) = previous {
        output.writeln(&format!("{} transfers to starbase personnel.", old));
    }
    output.writeln("");
    output.writeln(&format!("{}: \"{}\"", member.name, member.description));
    output.writeln("");
    tracing::debug!(role = role.label(), officer = member.id, "crew swapped");
}
