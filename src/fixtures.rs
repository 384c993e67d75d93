//! Shared scenario setup for unit tests.

use crate::config::GameOptions;
use crate::models::buffs::Buffs;
use crate::models::cardassian::Cardassian;
use crate::models::constants::SectorContent;
use crate::models::crew::BridgeCrew;
use crate::models::galaxy::Galaxy;
use crate::models::position::SectorPosition;
use crate::models::sector_map::SectorMap;

/// Where [`quiet_galaxy`] parks the ship, shown to the player as [4, 4].
pub const SHIP_SECTOR: SectorPosition = SectorPosition { x: 3, y: 3 };

pub fn options() -> GameOptions {
    GameOptions::new(42)
        .with_starting_stardate(2000.0)
        .with_mission_length(30.0)
        .with_cardassians(20)
}

/// A fresh galaxy whose current quadrant has been emptied: no stars,
/// enemies, starbase or wormhole cell, the ship at [`SHIP_SECTOR`], a
/// vacant bridge and no buffs. Galaxy totals are adjusted to match.
pub fn quiet_galaxy() -> Galaxy {
    let mut galaxy = Galaxy::new(&options());
    let here = galaxy.enterprise().quadrant;

    let removed = galaxy.current_quadrant().cardassians;
    let had_base = galaxy.current_quadrant().starbases;
    galaxy.set_remaining_cardassians(galaxy.remaining_cardassians() - removed);
    galaxy.set_total_starbases(galaxy.total_starbases() - had_base);
    let q = galaxy.quadrant_mut(here);
    q.cardassians = 0;
    q.starbases = 0;
    q.stars = 0;

    *galaxy.sector_map_mut() = SectorMap::new();
    galaxy.sector_map_mut().set(SHIP_SECTOR, SectorContent::Enterprise);
    let ship = galaxy.enterprise_mut();
    ship.sector = SHIP_SECTOR;
    ship.docked = false;
    ship.repair_all();
    *galaxy.crew_mut() = BridgeCrew::default();
    *galaxy.buffs_mut() = Buffs::default();
    galaxy
}

pub fn add_cardassian(galaxy: &mut Galaxy, pos: SectorPosition, energy: i32) {
    galaxy.sector_map_mut().set(pos, SectorContent::Cardassian);
    galaxy.sector_map_mut().cardassians.push(Cardassian::new(pos, energy));
    let here = galaxy.enterprise().quadrant;
    galaxy.quadrant_mut(here).cardassians += 1;
    galaxy.set_remaining_cardassians(galaxy.remaining_cardassians() + 1);
}

pub fn add_starbase(galaxy: &mut Galaxy, pos: SectorPosition) {
    galaxy.sector_map_mut().set(pos, SectorContent::Starbase);
    let here = galaxy.enterprise().quadrant;
    if galaxy.quadrant(here).starbases == 0 {
        galaxy.quadrant_mut(here).starbases = 1;
        galaxy.set_total_starbases(galaxy.total_starbases() + 1);
    }
}

pub fn add_star(galaxy: &mut Galaxy, pos: SectorPosition) {
    galaxy.sector_map_mut().set(pos, SectorContent::Star);
    let here = galaxy.enterprise().quadrant;
    galaxy.quadrant_mut(here).stars += 1;
}

pub fn add_wormhole(galaxy: &mut Galaxy, pos: SectorPosition) {
    galaxy.sector_map_mut().set(pos, SectorContent::Wormhole);
}

/// Make the current quadrant's Cardassians the last ones in the galaxy.
pub fn leave_only_local_cardassians(galaxy: &mut Galaxy) {
    let here = galaxy.sector_map().cardassians.len() as i32;
    galaxy.set_remaining_cardassians(here);
}
