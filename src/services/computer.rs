use crate::game_engine::TurnOutcome;
use crate::io::OutputWriter;
use crate::models::buffs::Buff;
use crate::models::constants::BASE_BUFF_DURATION;
use crate::models::galaxy::Galaxy;
use crate::ui::presenters::EnterprisePresenter;

/// Match a free-text order to a drink. First rule wins, so "raktajino"
/// never counts as coffee.
pub fn match_order(order: &str) -> Option<Buff> {
    let order = order.to_lowercase();
    if order.contains("coffee") && !order.contains("raktajino") {
        Some(Buff::Coffee)
    } else if order.contains("tea") || order.contains("earl grey") {
        Some(Buff::Tea)
    } else if order.contains("raktajino") {
        Some(Buff::Raktajino)
    } else if order.contains("prune") || order.contains("juice") {
        Some(Buff::PruneJuice)
    } else {
        None
    }
}

fn show_menu(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
    const MENU: &[&str] = &[
        "",
        "=== REPLICATOR MENU ===",
        "",
        "1. COMPUTER COFFEE       - \"Coffee, black\"",
        "   Improves engine efficiency (reduced energy costs)",
        "",
        "2. COMPUTER TEA          - \"Tea, Earl Grey, hot\"",
        "   Calms the crew (faster system repairs)",
        "",
        "3. COMPUTER RAKTAJINO    - \"Raktajino\"",
        "   Klingon coffee (boosted phaser damage)",
        "",
        "4. COMPUTER PRUNE JUICE  - \"Prune juice\"",
        "   A warrior's drink (shield regeneration)",
        "",
        "Active buffs last for 5 moves.",
        "",
    ];
    for line in MENU {
        output.writeln(line);
    }
    EnterprisePresenter::show_active_buffs(galaxy.buffs(), output);
}

fn serve(buff: Buff, turns: u32, output: &mut dyn OutputWriter) {
    let (request, served, effect) = match buff {
        Buff::Coffee => (
            "\"Coffee, black.\"",
            "The replicator hums and produces a steaming cup of black coffee.",
            format!("You feel more alert. Engine efficiency improved for {} moves.", turns),
        ),
        Buff::Tea => (
            "\"Tea, Earl Grey, hot.\"",
            "The replicator produces a perfect cup of Earl Grey tea.",
            format!(
                "A sense of calm focus settles over the bridge. Repairs will be faster for {} moves.",
                turns
            ),
        ),
        Buff::Raktajino => (
            "\"Raktajino.\"",
            "The replicator produces the strong Klingon coffee.",
            format!(
                "The crew feels energized and aggressive. Phaser damage boosted for {} moves.",
                turns
            ),
        ),
        Buff::PruneJuice => (
            "\"Prune juice. A warrior's drink.\"",
            "The replicator produces a glass of prune juice.",
            format!(
                "You feel the vigor of a Klingon warrior. Shields regenerating for {} moves.",
                turns
            ),
        ),
    };
    output.writeln("");
    output.writeln(request);
    output.writeln("");
    output.writeln(served);
    output.writeln(&effect);
    output.writeln("");
}

/// The replicator (`COMPUTER`). An empty order shows the menu. Orders do
/// not advance time.
pub fn replicator(galaxy: &mut Galaxy, order: &str, output: &mut dyn OutputWriter) -> TurnOutcome {
    if order.trim().is_empty() {
        show_menu(galaxy, output);
        return TurnOutcome::Held;
    }

    let Some(buff) = match_order(order) else {
        output.writeln("");
        output.writeln("The replicator does not recognize that order.");
        output.writeln("Try: COFFEE, TEA, RAKTAJINO, or PRUNE JUICE");
        output.writeln("");
        return TurnOutcome::Held;
    };

    let turns = (BASE_BUFF_DURATION * galaxy.crew().buff_duration()).round() as u32;
    serve(buff, turns, output);
    galaxy.buffs_mut().activate(buff, turns);
    TurnOutcome::Held
}
