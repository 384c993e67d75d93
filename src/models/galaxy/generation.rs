use crate::models::constants::{
    GALAXY_SIZE, MAX_CARDASSIANS, MAX_CARDASSIANS_PER_QUADRANT, MAX_STARBASES,
    MAX_STARS_PER_QUADRANT, MIN_CARDASSIANS, MIN_STARBASES, STARBASE_COMMANDERS,
};
use crate::models::crew::CrewId;
use crate::models::dice::Dice;
use crate::models::position::QuadrantPosition;
use crate::models::quadrant::QuadrantData;

pub type QuadrantGrid = [[QuadrantData; GALAXY_SIZE]; GALAXY_SIZE];

/// Output of [`generate_galaxy`].
pub struct GeneratedGalaxy {
    pub quadrants: QuadrantGrid,
    pub wormholes: Vec<QuadrantPosition>,
    pub total_cardassians: i32,
    pub total_starbases: i32,
}

/// Build the 8x8 quadrant summaries.
///
/// Stars are drawn row-major, then the Cardassian total (unless forced),
/// their placement, the starbases with their commanders, and finally the
/// wormhole circuit. Every feature is placed by rejection sampling over
/// random quadrant coordinates.
pub fn generate_galaxy(dice: &mut Dice, forced_cardassians: Option<i32>) -> GeneratedGalaxy {
    let mut quadrants = QuadrantGrid::default();

    for row in quadrants.iter_mut() {
        for q in row.iter_mut() {
            q.stars = dice.below(MAX_STARS_PER_QUADRANT) as i32 + 1;
        }
    }

    let capacity = MAX_CARDASSIANS_PER_QUADRANT * (GALAXY_SIZE * GALAXY_SIZE) as i32;
    let total_cardassians = match forced_cardassians {
        Some(n) => n.clamp(0, capacity),
        None => MIN_CARDASSIANS + dice.below((MAX_CARDASSIANS - MIN_CARDASSIANS + 1) as usize) as i32,
    };
    let mut placed = 0;
    while placed < total_cardassians {
        let q = random_quadrant(&mut quadrants, dice);
        if q.cardassians < MAX_CARDASSIANS_PER_QUADRANT {
            q.cardassians += 1;
            placed += 1;
        }
    }

    let total_starbases =
        MIN_STARBASES + dice.below((MAX_STARBASES - MIN_STARBASES + 1) as usize) as i32;
    let mut commanders = STARBASE_COMMANDERS;
    dice.shuffle(&mut commanders);
    let mut placed = 0;
    while placed < total_starbases {
        let q = random_quadrant(&mut quadrants, dice);
        if q.starbases == 0 {
            q.starbases = 1;
            q.commander = Some(commanders[placed as usize].to_string());
            placed += 1;
        }
    }

    let wormhole_count = if dice.chance(0.5) { 3 } else { 4 };
    let mut wormholes = Vec::with_capacity(wormhole_count);
    while wormholes.len() < wormhole_count {
        let x = dice.below(GALAXY_SIZE);
        let y = dice.below(GALAXY_SIZE);
        let q = &mut quadrants[y][x];
        if !q.wormhole {
            q.wormhole = true;
            wormholes.push(QuadrantPosition::new(x as i32, y as i32));
        }
    }

    GeneratedGalaxy {
        quadrants,
        wormholes,
        total_cardassians,
        total_starbases,
    }
}

fn random_quadrant<'a>(quadrants: &'a mut QuadrantGrid, dice: &mut Dice) -> &'a mut QuadrantData {
    let x = dice.below(GALAXY_SIZE);
    let y = dice.below(GALAXY_SIZE);
    &mut quadrants[y][x]
}

/// Deal reserve officers round-robin to the starbases in row-major order.
pub fn station_reserves(quadrants: &mut QuadrantGrid, reserves: Vec<CrewId>) {
    let mut bases: Vec<&mut QuadrantData> = quadrants
        .iter_mut()
        .flat_map(|row| row.iter_mut())
        .filter(|q| q.starbases > 0)
        .collect();
    if bases.is_empty() {
        return;
    }
    let count = bases.len();
    for (i, id) in reserves.into_iter().enumerate() {
        bases[i % count].available_crew.push(id);
    }
}
