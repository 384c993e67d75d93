//! Command interpreter and session lifecycle
//!
//! [`Game`] owns one [`GameEngine`] plus the collaborators around it: the
//! save store and an optional captain's log editor. Each call to
//! [`Game::process`] handles exactly one line of input.

use crate::config::GameOptions;
use crate::game_engine::{Command, Confirmation, GameEngine, GameState, TurnOutcome};
use crate::io::{InputReader, LogEditor, OutputWriter, SaveStore};
use crate::models::constants::SAVE_KEY;
use crate::models::errors::{GameError, GameResult};
use crate::services::{combat, computer, crew, dock, navigation, scan, self_destruct};
use crate::ui::presenters::{CombatPresenter, CrewPresenter, EnterprisePresenter, HelpPresenter};

pub struct Game<S: SaveStore> {
    engine: GameEngine,
    store: S,
    options: GameOptions,
    log_editor: Option<Box<dyn LogEditor>>,
}

impl<S: SaveStore> Game<S> {
    /// A game seeded from `options`. Nothing is printed until
    /// [`Game::start`].
    pub fn new(options: GameOptions, store: S) -> Self {
        Game {
            engine: GameEngine::new(&options),
            store,
            options,
            log_editor: None,
        }
    }

    pub fn with_log_editor(mut self, editor: impl LogEditor + 'static) -> Self {
        self.log_editor = Some(Box::new(editor));
        self
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Offer to resume a saved game, or begin a new one.
    pub fn start(&mut self, output: &mut dyn OutputWriter) {
        if !self.store.contains(SAVE_KEY) {
            self.start_new_game(output);
            return;
        }

        output.writeln("");
        output.writeln("                      SUPER STAR TREK");
        output.writeln("");
        output.writeln("");
        output.writeln("Saved game detected.");
        output.writeln("");
        output.writeln("Resume saved game? (Y/N)");
        output.writeln("");
        self.engine.await_confirmation(Confirmation::ResumeSavedGame);
    }

    /// Throw away the current session and generate a fresh galaxy. The
    /// first game uses the configured seed, later ones draw a seed from
    /// the outgoing game.
    pub fn start_new_game(&mut self, output: &mut dyn OutputWriter) {
        let options = self.options.clone();
        self.options.seed = self.engine.galaxy_mut().dice().next_seed();
        self.engine = GameEngine::new(&options);

        output.writeln("");
        output.writeln("");
        output.writeln("                      SUPER STAR TREK");
        output.writeln("");
        output.writeln("");

        let galaxy = self.engine.galaxy();
        output.writeln(&format!(
            "Your mission: Destroy {} Cardassian warships in {:.0} stardates.",
            galaxy.remaining_cardassians(),
            galaxy.ending_stardate() - galaxy.starting_stardate()
        ));
        output.writeln("");
        output.writeln("The galaxy is divided into an 8x8 grid of quadrants.");
        output.writeln("Each quadrant contains an 8x8 grid of sectors.");
        output.writeln("");
        output.writeln(&format!(
            "There are {} starbases in the galaxy for resupply.",
            galaxy.total_starbases()
        ));
        output.writeln(&format!(
            "Subspace anomalies detected - {} wormholes reported.",
            galaxy.wormholes().len()
        ));
        CrewPresenter::show_roster(galaxy.crew(), output);
        output.writeln("Type HELP for commands, or SRSCAN for a Short Range Scan.");
        output.writeln("");

        scan::short_range_scan(galaxy, output);
    }

    /// Handle one line of player input.
    pub fn process(&mut self, line: &str, output: &mut dyn OutputWriter) {
        if let Some(confirmation) = self.engine.take_pending() {
            match confirmation {
                Confirmation::SelfDestruct => {
                    self_destruct::confirm_self_destruct(&mut self.engine, line, output);
                    if self.engine.is_over() {
                        self.clear_save();
                    }
                }
                Confirmation::ResumeSavedGame => self.answer_resume(line, output),
            }
            return;
        }

        let command = Command::parse(line);
        if self.engine.is_over() && command != Command::New {
            output.writeln("Game over. Type NEW to start a new game.");
            return;
        }

        let outcome = match command {
            Command::ShortRangeScan => scan::short_range_scan(self.engine.galaxy(), output),
            Command::LongRangeScan => scan::long_range_scan(self.engine.galaxy_mut(), output),
            Command::StarMap => scan::star_map(self.engine.galaxy(), output),
            Command::DamageReport => {
                EnterprisePresenter::show_damage_report(self.engine.galaxy().enterprise(), output);
                TurnOutcome::Held
            }
            Command::StatusReport => {
                EnterprisePresenter::show_status_report(
                    self.engine.galaxy(),
                    self.engine.is_ghost_ship(),
                    output,
                );
                TurnOutcome::Held
            }
            Command::Warp(delta) => navigation::warp(self.engine.galaxy_mut(), delta, output),
            Command::Impulse(delta) => navigation::impulse(self.engine.galaxy_mut(), delta, output),
            Command::Phasers(energy) => combat::fire_phasers(self.engine.galaxy_mut(), energy, output),
            Command::Torpedoes(target) => {
                combat::fire_torpedoes(self.engine.galaxy_mut(), target, output)
            }
            Command::Shields => combat::shield_status(self.engine.galaxy(), output),
            Command::Computer(order) => computer::replicator(self.engine.galaxy_mut(), &order, output),
            Command::Dock => dock::dock(self.engine.galaxy_mut(), output),
            Command::Crew(args) => crew::manage_crew(self.engine.galaxy_mut(), &args, output),
            Command::SelfDestruct => self_destruct::request_self_destruct(&mut self.engine, output),
            Command::Save => {
                self.save(output);
                TurnOutcome::Held
            }
            Command::Log => {
                self.open_log(output);
                TurnOutcome::Held
            }
            Command::New => {
                self.start_new_game(output);
                TurnOutcome::Held
            }
            Command::Help => {
                HelpPresenter::show_help(output);
                TurnOutcome::Held
            }
            Command::Empty => TurnOutcome::Held,
            Command::Unknown(word) => {
                tracing::debug!(command = %word, "unknown command");
                output.writeln(&format!("Unknown command: {}", word));
                output.writeln("Type HELP for a list of commands.");
                TurnOutcome::Held
            }
        };

        if outcome == TurnOutcome::Advanced {
            self.end_turn(output);
        }
    }

    /// Read and process lines until the input runs out.
    pub fn run(&mut self, input: &mut dyn InputReader, output: &mut dyn OutputWriter) -> GameResult<()> {
        self.start(output);
        loop {
            let prompt = if self.engine.pending().is_some() { "?" } else { "COMMAND" };
            let Some(line) = input.read_line(prompt)? else {
                break;
            };
            self.process(&line, output);
        }
        Ok(())
    }

    fn end_turn(&mut self, output: &mut dyn OutputWriter) {
        match self.engine.check_game_over() {
            Some(GameState::Victory { rating }) => CombatPresenter::show_victory(rating, output),
            Some(GameState::Defeat { reason }) => CombatPresenter::show_defeat(reason, output),
            Some(GameState::Playing) => {}
            None => {
                scan::short_range_scan(self.engine.galaxy(), output);
            }
        }
    }

    fn answer_resume(&mut self, answer: &str, output: &mut dyn OutputWriter) {
        let answer = answer.trim().to_uppercase();
        if answer != "Y" && answer != "YES" {
            output.writeln("");
            self.start_new_game(output);
            return;
        }

        match self.load() {
            Ok(engine) => {
                self.engine = engine;
                tracing::info!(stardate = self.engine.galaxy().stardate(), "game resumed");
                output.writeln("");
                output.writeln("=== GAME RESUMED ===");
                output.writeln("");
                let log = self.engine.captains_log();
                if !log.trim().is_empty() {
                    output.writeln("Captain's Log:");
                    output.writeln("---");
                    output.writeln(log);
                    output.writeln("---");
                    output.writeln("");
                }
                scan::short_range_scan(self.engine.galaxy(), output);
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding saved game");
                output.writeln("Save data corrupted. Starting new game.");
                output.writeln("");
                self.clear_save();
                self.start_new_game(output);
            }
        }
    }

    fn load(&self) -> GameResult<GameEngine> {
        let blob = self
            .store
            .load(SAVE_KEY)?
            .ok_or_else(|| GameError::CorruptSave("save vanished".into()))?;
        GameEngine::from_json(&blob)
    }

    fn save(&mut self, output: &mut dyn OutputWriter) {
        let result = self
            .engine
            .to_json()
            .and_then(|blob| self.store.store(SAVE_KEY, &blob));
        match result {
            Ok(()) => {
                tracing::info!(stardate = self.engine.galaxy().stardate(), "game saved");
                output.writeln("");
                output.writeln("=== GAME SAVED ===");
                output.writeln("");
                output.writeln("Your progress has been saved.");
                output.writeln("Your game will be here when you return.");
                output.writeln("");
            }
            Err(err) => {
                tracing::warn!(error = %err, "save failed");
                output.writeln("");
                output.writeln("*** SAVE FAILED ***");
                output.writeln("Unable to save game data.");
                output.writeln("");
            }
        }
    }

    fn clear_save(&mut self) {
        if let Err(err) = self.store.remove(SAVE_KEY) {
            tracing::warn!(error = %err, "could not clear saved game");
        }
    }

    fn open_log(&mut self, output: &mut dyn OutputWriter) {
        let Some(editor) = self.log_editor.as_mut() else {
            output.writeln("");
            output.writeln("Log editor not available.");
            output.writeln("");
            return;
        };

        if let Some(log) = editor.edit(self.engine.captains_log()) {
            self.engine.set_captains_log(log);
            output.writeln("");
            output.writeln("Captain's log updated.");
            output.writeln("Don't forget to SAVE to preserve your log.");
            output.writeln("");
        }
    }
}
