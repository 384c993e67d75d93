use serde::{Deserialize, Serialize};

use super::position::SectorPosition;

/// A Cardassian warship within the current quadrant's sector grid.
/// Up to 3 per quadrant. Exists only while its quadrant is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cardassian {
    pub sector: SectorPosition,
    pub energy: i32,
}

impl Cardassian {
    pub fn new(sector: SectorPosition, energy: i32) -> Self {
        Cardassian { sector, energy }
    }

    pub fn is_alive(&self) -> bool {
        self.energy > 0
    }
}
