use crate::game_engine::TurnOutcome;
use crate::io::OutputWriter;
use crate::models::galaxy::Galaxy;
use crate::ui::presenters::EnterprisePresenter;

/// Shields are automatic; the command only reports their level against
/// the crew-modified capacity.
pub fn shield_status(galaxy: &Galaxy, output: &mut dyn OutputWriter) -> TurnOutcome {
    EnterprisePresenter::show_shield_status(galaxy, output);
    TurnOutcome::Held
}
