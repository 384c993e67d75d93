use serde::{Deserialize, Serialize};

use crate::models::galaxy::Galaxy;

use super::GameState;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized form of a whole session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u32,
    pub galaxy: Galaxy,
    pub state: GameState,
    #[serde(default)]
    pub captains_log: String,
    #[serde(default)]
    pub ghost_ship: bool,
}
