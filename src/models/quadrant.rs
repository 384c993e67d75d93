use serde::{Deserialize, Serialize};

use super::crew::CrewId;

/// Persistent data about a single quadrant in the galaxy.
/// Stores only counts; sector positions are not preserved between visits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuadrantData {
    pub cardassians: i32,
    pub starbases: i32,
    pub stars: i32,
    pub explored: bool,
    pub wormhole: bool,
    /// Starbase commander, if this quadrant ever had a starbase.
    pub commander: Option<String>,
    /// Officers waiting at this quadrant's starbase.
    pub available_crew: Vec<CrewId>,
}

impl QuadrantData {
    /// The 3-digit scan code: cardassians*100 + starbases*10 + stars.
    pub fn encoded(&self) -> i32 {
        self.cardassians * 100 + self.starbases * 10 + self.stars
    }

    pub fn scan_code(&self) -> String {
        format!("{:03}", self.encoded())
    }
}
