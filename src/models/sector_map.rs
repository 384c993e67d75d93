use serde::{Deserialize, Serialize};

use super::cardassian::Cardassian;
use super::constants::{SectorContent, MAX_CARDASSIANS_PER_QUADRANT, PLACEMENT_ATTEMPTS, SECTOR_SIZE};
use super::dice::Dice;
use super::position::SectorPosition;

/// The 8x8 sector grid for the current quadrant.
/// Regenerated every time the Enterprise enters a quadrant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorMap {
    /// 8x8 grid of sector contents. Indexed grid[y][x].
    grid: [[SectorContent; SECTOR_SIZE]; SECTOR_SIZE],
    /// Live Cardassians in this quadrant (up to 3).
    pub cardassians: Vec<Cardassian>,
}

impl Default for SectorMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SectorMap {
    pub fn new() -> Self {
        SectorMap {
            grid: [[SectorContent::Empty; SECTOR_SIZE]; SECTOR_SIZE],
            cardassians: Vec::with_capacity(MAX_CARDASSIANS_PER_QUADRANT as usize),
        }
    }

    /// Content at an in-bounds position.
    pub fn get(&self, pos: SectorPosition) -> SectorContent {
        self.grid[pos.y as usize][pos.x as usize]
    }

    pub fn set(&mut self, pos: SectorPosition, content: SectorContent) {
        self.grid[pos.y as usize][pos.x as usize] = content;
    }

    pub fn is_empty(&self, pos: SectorPosition) -> bool {
        self.get(pos) == SectorContent::Empty
    }

    pub fn count(&self, content: SectorContent) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == content)
            .count()
    }

    /// Replace every cell with `content` by empty space.
    pub fn clear_all(&mut self, content: SectorContent) {
        for cell in self.grid.iter_mut().flat_map(|row| row.iter_mut()) {
            if *cell == content {
                *cell = SectorContent::Empty;
            }
        }
    }

    /// Render one row as space-separated symbols, e.g. `". E * . . . . ."`.
    pub fn render_row(&self, y: usize) -> String {
        self.grid[y]
            .iter()
            .map(|c| c.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether any of the 8 neighbouring cells holds `content`.
    pub fn has_adjacent(&self, pos: SectorPosition, content: SectorContent) -> bool {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| pos.offset(dx, dy))
            .any(|p| p.in_bounds() && self.get(p) == content)
    }

    /// Random empty cell: up to 100 random probes, then the first empty
    /// cell in row-major order. `None` only when the grid is full.
    pub fn find_empty_spot(&self, dice: &mut Dice) -> Option<SectorPosition> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let x = dice.below(SECTOR_SIZE) as i32;
            let y = dice.below(SECTOR_SIZE) as i32;
            let pos = SectorPosition::new(x, y);
            if self.is_empty(pos) {
                return Some(pos);
            }
        }
        self.first_empty()
    }

    fn first_empty(&self) -> Option<SectorPosition> {
        self.find(SectorContent::Empty)
    }

    /// First cell holding `content`, in row-major order.
    pub fn find(&self, content: SectorContent) -> Option<SectorPosition> {
        (0..SECTOR_SIZE as i32)
            .flat_map(|y| (0..SECTOR_SIZE as i32).map(move |x| SectorPosition::new(x, y)))
            .find(|&p| self.get(p) == content)
    }

    /// Empty cell in growing rings (radius 1 to 3) around `center`,
    /// falling back to [`SectorMap::find_empty_spot`].
    pub fn find_nearby_empty(&self, center: SectorPosition, dice: &mut Dice) -> Option<SectorPosition> {
        for r in 1..=3 {
            for dy in -r..=r {
                for dx in -r..=r {
                    let p = center.offset(dx, dy);
                    if p.in_bounds() && self.is_empty(p) {
                        return Some(p);
                    }
                }
            }
        }
        self.find_empty_spot(dice)
    }

    /// Place `count` copies of `content` at random empty cells.
    pub fn place_randomly(&mut self, content: SectorContent, count: usize, dice: &mut Dice) {
        for _ in 0..count {
            if let Some(pos) = self.find_empty_spot(dice) {
                self.set(pos, content);
            }
        }
    }

    pub fn cardassian_at(&self, pos: SectorPosition) -> Option<&Cardassian> {
        self.cardassians.iter().find(|c| c.sector == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_includes_diagonals() {
        let mut map = SectorMap::new();
        map.set(SectorPosition::new(4, 4), SectorContent::Starbase);
        assert!(map.has_adjacent(SectorPosition::new(3, 3), SectorContent::Starbase));
        assert!(map.has_adjacent(SectorPosition::new(5, 4), SectorContent::Starbase));
        assert!(!map.has_adjacent(SectorPosition::new(4, 4), SectorContent::Starbase));
        assert!(!map.has_adjacent(SectorPosition::new(1, 1), SectorContent::Starbase));
    }

    #[test]
    fn adjacency_at_grid_corner() {
        let mut map = SectorMap::new();
        map.set(SectorPosition::new(1, 1), SectorContent::Starbase);
        assert!(map.has_adjacent(SectorPosition::new(0, 0), SectorContent::Starbase));
    }

    #[test]
    fn empty_spot_falls_back_to_row_major_scan() {
        let mut map = SectorMap::new();
        for y in 0..SECTOR_SIZE as i32 {
            for x in 0..SECTOR_SIZE as i32 {
                map.set(SectorPosition::new(x, y), SectorContent::Star);
            }
        }
        map.set(SectorPosition::new(6, 2), SectorContent::Empty);
        map.set(SectorPosition::new(1, 5), SectorContent::Empty);

        // Every probe lands on (0, 0), which is occupied.
        let mut dice = Dice::new(0);
        dice.script(std::iter::repeat(0.0).take(2 * PLACEMENT_ATTEMPTS));
        assert_eq!(map.find_empty_spot(&mut dice), Some(SectorPosition::new(6, 2)));
    }

    #[test]
    fn full_grid_has_no_empty_spot() {
        let mut map = SectorMap::new();
        for y in 0..SECTOR_SIZE as i32 {
            for x in 0..SECTOR_SIZE as i32 {
                map.set(SectorPosition::new(x, y), SectorContent::Star);
            }
        }
        let mut dice = Dice::new(1);
        assert_eq!(map.find_empty_spot(&mut dice), None);
    }

    #[test]
    fn nearby_empty_prefers_the_closest_ring() {
        let mut map = SectorMap::new();
        map.set(SectorPosition::new(3, 3), SectorContent::Starbase);
        map.set(SectorPosition::new(2, 2), SectorContent::Star);
        let mut dice = Dice::new(2);
        assert_eq!(
            map.find_nearby_empty(SectorPosition::new(3, 3), &mut dice),
            Some(SectorPosition::new(3, 2))
        );
    }

    #[test]
    fn render_row_uses_symbols() {
        let mut map = SectorMap::new();
        map.set(SectorPosition::new(0, 0), SectorContent::Enterprise);
        map.set(SectorPosition::new(2, 0), SectorContent::Wormhole);
        assert_eq!(map.render_row(0), "E . @ . . . . .");
    }
}
