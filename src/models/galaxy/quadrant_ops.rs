use crate::models::cardassian::Cardassian;
use crate::models::constants::{CARDASSIAN_BASE_ENERGY, CARDASSIAN_ENERGY_SPREAD, SectorContent};
use crate::models::dice::Dice;
use crate::models::enterprise::Enterprise;
use crate::models::position::SectorPosition;
use crate::models::quadrant::QuadrantData;
use crate::models::sector_map::SectorMap;

/// Rebuild the sector grid for the Enterprise's current quadrant.
///
/// Placement order is stars, Cardassians, starbase, wormhole, then the
/// ship. The ship keeps `preferred` when that cell is inside the grid and
/// still empty; otherwise it gets a random empty cell.
pub fn enter_quadrant(
    sector_map: &mut SectorMap,
    enterprise: &mut Enterprise,
    quadrant: &mut QuadrantData,
    preferred: Option<SectorPosition>,
    dice: &mut Dice,
) {
    *sector_map = SectorMap::new();
    quadrant.explored = true;

    sector_map.place_randomly(SectorContent::Star, quadrant.stars.max(0) as usize, dice);

    for _ in 0..quadrant.cardassians {
        if let Some(pos) = sector_map.find_empty_spot(dice) {
            sector_map.set(pos, SectorContent::Cardassian);
            let energy = CARDASSIAN_BASE_ENERGY + dice.below(CARDASSIAN_ENERGY_SPREAD) as i32;
            sector_map.cardassians.push(Cardassian::new(pos, energy));
        }
    }

    if quadrant.starbases > 0 {
        sector_map.place_randomly(SectorContent::Starbase, 1, dice);
    }
    if quadrant.wormhole {
        sector_map.place_randomly(SectorContent::Wormhole, 1, dice);
    }

    let reusable = preferred.filter(|p| p.in_bounds() && sector_map.is_empty(*p));
    if let Some(pos) = reusable.or_else(|| sector_map.find_empty_spot(dice)) {
        enterprise.sector = pos;
    }
    sector_map.set(enterprise.sector, SectorContent::Enterprise);
    enterprise.docked = sector_map.has_adjacent(enterprise.sector, SectorContent::Starbase);

    tracing::debug!(
        quadrant = %enterprise.quadrant,
        sector = %enterprise.sector,
        cardassians = sector_map.cardassians.len(),
        docked = enterprise.docked,
        "entered quadrant"
    );
}
