//! Game state machine
//!
//! Manages the overall game state, checking for victory and defeat conditions.
//! The GameEngine owns the Galaxy plus the session data around it: the
//! terminal state, a pending yes/no confirmation, the captain's log and
//! whether the ship is a ghost-ship replacement.

mod command;
mod snapshot;

pub use command::Command;
pub use snapshot::{GameSnapshot, SNAPSHOT_VERSION};

use serde::{Deserialize, Serialize};

use crate::config::GameOptions;
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;

/// Core game engine that manages game state and victory/defeat conditions
#[derive(Debug, Clone)]
pub struct GameEngine {
    galaxy: Galaxy,
    state: GameState,
    pending: Option<Confirmation>,
    captains_log: String,
    ghost_ship: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Victory { rating: i32 },
    Defeat { reason: DefeatReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefeatReason {
    /// Energy reached zero.
    ShipDestroyed,
    TimeExpired,
    /// Self-destruct with no starbase left to flee to.
    Captured,
}

/// A yes/no question waiting for the next line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    SelfDestruct,
    ResumeSavedGame,
}

/// Whether a command moved the game forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing changed that needs a turn-end check.
    Held,
    /// Time or combat advanced; check for the end of the game.
    Advanced,
}

impl GameEngine {
    /// Creates a new game engine with a procedurally generated galaxy
    pub fn new(options: &GameOptions) -> Self {
        Self::from_galaxy(Galaxy::new(options))
    }

    pub fn from_galaxy(galaxy: Galaxy) -> Self {
        Self {
            galaxy,
            state: GameState::Playing,
            pending: None,
            captains_log: String::new(),
            ghost_ship: false,
        }
    }

    /// Returns an immutable reference to the galaxy
    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    /// Returns a mutable reference to the galaxy
    pub fn galaxy_mut(&mut self) -> &mut Galaxy {
        &mut self.galaxy
    }

    /// Returns the current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    pub fn has_won(&self) -> bool {
        matches!(self.state, GameState::Victory { .. })
    }

    /// End the game with `state`.
    pub fn finish(&mut self, state: GameState) {
        self.pending = None;
        self.state = state;
    }

    /// Checks for game over conditions and updates the game state
    ///
    /// # Returns
    ///
    /// * `Some(GameState)` if the game has ended (Victory or Defeat)
    /// * `None` if the game is still in progress
    ///
    /// Victory is checked first, then energy, then time. This deliberately
    /// reverses the classic energy, time, victory order: destroying the
    /// last Cardassian wins even if the same turn drained the ship's energy.
    pub fn check_game_over(&mut self) -> Option<GameState> {
        if self.is_over() {
            return Some(self.state.clone());
        }

        if self.galaxy.all_cardassians_destroyed() {
            let rating = self.galaxy.efficiency_rating();
            self.finish(GameState::Victory { rating });
            return Some(self.state.clone());
        }

        if self.galaxy.enterprise().energy <= 0 {
            self.finish(GameState::Defeat {
                reason: DefeatReason::ShipDestroyed,
            });
            return Some(self.state.clone());
        }

        if self.galaxy.is_time_expired() {
            self.finish(GameState::Defeat {
                reason: DefeatReason::TimeExpired,
            });
            return Some(self.state.clone());
        }

        None
    }

    pub fn pending(&self) -> Option<Confirmation> {
        self.pending
    }

    pub fn await_confirmation(&mut self, confirmation: Confirmation) {
        self.pending = Some(confirmation);
    }

    pub fn take_pending(&mut self) -> Option<Confirmation> {
        self.pending.take()
    }

    pub fn captains_log(&self) -> &str {
        &self.captains_log
    }

    pub fn set_captains_log(&mut self, log: String) {
        self.captains_log = log;
    }

    pub fn is_ghost_ship(&self) -> bool {
        self.ghost_ship
    }

    pub fn set_ghost_ship(&mut self, ghost: bool) {
        self.ghost_ship = ghost;
    }

    /// Everything needed to resume this session.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            version: SNAPSHOT_VERSION,
            galaxy: self.galaxy.clone(),
            state: self.state.clone(),
            captains_log: self.captains_log.clone(),
            ghost_ship: self.ghost_ship,
        }
    }

    pub fn from_snapshot(snapshot: GameSnapshot) -> GameResult<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(GameError::CorruptSave(format!(
                "unsupported snapshot version {}",
                snapshot.version
            )));
        }
        snapshot.galaxy.validate().map_err(GameError::CorruptSave)?;
        Ok(Self {
            galaxy: snapshot.galaxy,
            state: snapshot.state,
            pending: None,
            captains_log: snapshot.captains_log,
            ghost_ship: snapshot.ghost_ship,
        })
    }

    pub fn to_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    pub fn from_json(blob: &str) -> GameResult<Self> {
        let snapshot: GameSnapshot = serde_json::from_str(blob)?;
        Self::from_snapshot(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn engine() -> GameEngine {
        GameEngine::from_galaxy(fixtures::quiet_galaxy())
    }

    // ========== Terminal state tests ==========

    #[test]
    fn playing_until_something_ends_it() {
        let mut e = engine();
        assert_eq!(e.check_game_over(), None);
        assert!(!e.is_over());
    }

    #[test]
    fn victory_when_no_cardassians_remain() {
        let mut e = engine();
        e.galaxy_mut().set_remaining_cardassians(0);
        assert!(matches!(e.check_game_over(), Some(GameState::Victory { .. })));
        assert!(e.has_won());
    }

    #[test]
    fn victory_beats_destruction_on_the_same_turn() {
        let mut e = engine();
        e.galaxy_mut().set_remaining_cardassians(0);
        e.galaxy_mut().enterprise_mut().energy = 0;
        assert!(e.check_game_over().is_some());
        assert!(e.has_won());
    }

    #[test]
    fn ship_destroyed_at_zero_energy() {
        let mut e = engine();
        e.galaxy_mut().enterprise_mut().energy = 0;
        assert_eq!(
            e.check_game_over(),
            Some(GameState::Defeat {
                reason: DefeatReason::ShipDestroyed
            })
        );
        assert!(!e.has_won());
    }

    #[test]
    fn time_expired_defeat() {
        let mut e = engine();
        let end = e.galaxy().ending_stardate();
        e.galaxy_mut().set_stardate(end);
        assert_eq!(
            e.check_game_over(),
            Some(GameState::Defeat {
                reason: DefeatReason::TimeExpired
            })
        );
    }

    #[test]
    fn terminal_state_is_sticky() {
        let mut e = engine();
        e.galaxy_mut().enterprise_mut().energy = 0;
        e.check_game_over();
        e.galaxy_mut().enterprise_mut().energy = 3000;
        e.galaxy_mut().set_remaining_cardassians(0);
        assert_eq!(
            e.check_game_over(),
            Some(GameState::Defeat {
                reason: DefeatReason::ShipDestroyed
            })
        );
    }

    // ========== Confirmation tests ==========

    #[test]
    fn pending_confirmation_is_taken_once() {
        let mut e = engine();
        e.await_confirmation(Confirmation::SelfDestruct);
        assert_eq!(e.pending(), Some(Confirmation::SelfDestruct));
        assert_eq!(e.take_pending(), Some(Confirmation::SelfDestruct));
        assert_eq!(e.take_pending(), None);
    }

    // ========== Snapshot tests ==========

    #[test]
    fn json_round_trip_preserves_session() {
        let mut e = engine();
        e.set_captains_log("Stardate 2000. All quiet.".to_string());
        e.set_ghost_ship(true);
        e.galaxy_mut().advance_time(1.5);

        let blob = e.to_json().unwrap();
        let mut restored = GameEngine::from_json(&blob).unwrap();

        assert_eq!(restored.captains_log(), "Stardate 2000. All quiet.");
        assert!(restored.is_ghost_ship());
        assert_eq!(restored.galaxy().stardate(), e.galaxy().stardate());
        assert_eq!(restored.galaxy().quadrants(), e.galaxy().quadrants());
        assert_eq!(restored.galaxy().enterprise(), e.galaxy().enterprise());
        assert_eq!(restored.galaxy().sector_map(), e.galaxy().sector_map());
        assert_eq!(restored.galaxy().crew(), e.galaxy().crew());
        for _ in 0..10 {
            assert_eq!(restored.galaxy_mut().dice().roll(), e.galaxy_mut().dice().roll());
        }
    }

    #[test]
    fn garbage_is_a_serialization_error() {
        assert!(matches!(
            GameEngine::from_json("not json"),
            Err(GameError::Serialization(_))
        ));
    }

    #[test]
    fn wrong_version_is_corrupt() {
        let mut snapshot = engine().snapshot();
        snapshot.version = 99;
        assert!(matches!(
            GameEngine::from_snapshot(snapshot),
            Err(GameError::CorruptSave(_))
        ));
    }

    #[test]
    fn out_of_bounds_ship_is_corrupt() {
        let mut snapshot = engine().snapshot();
        snapshot.galaxy.enterprise_mut().quadrant.x = 12;
        assert!(matches!(
            GameEngine::from_snapshot(snapshot),
            Err(GameError::CorruptSave(_))
        ));
    }
}
