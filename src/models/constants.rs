use serde::{Deserialize, Serialize};

pub const GALAXY_SIZE: usize = 8;
pub const SECTOR_SIZE: usize = 8;

pub const MAX_CARDASSIANS_PER_QUADRANT: i32 = 3;
pub const MIN_CARDASSIANS: i32 = 15;
pub const MAX_CARDASSIANS: i32 = 25;
pub const MIN_STARBASES: i32 = 2;
pub const MAX_STARBASES: i32 = 4;
pub const MAX_STARS_PER_QUADRANT: usize = 8;

pub const INITIAL_ENERGY: i32 = 3000;
pub const INITIAL_SHIELDS: i32 = 1000;
pub const INITIAL_TORPEDOES: i32 = 10;
pub const LOW_ENERGY_THRESHOLD: i32 = 300;

/// Cardassian energy is drawn from `BASE .. BASE + SPREAD`.
pub const CARDASSIAN_BASE_ENERGY: i32 = 300;
pub const CARDASSIAN_ENERGY_SPREAD: usize = 200;

pub const MIN_MISSION_LENGTH: f64 = 25.0;

/// Random probes before the sector scan fallback kicks in.
pub const PLACEMENT_ATTEMPTS: usize = 100;

pub const WARP_ENERGY_PER_QUADRANT: f64 = 50.0;
pub const IMPULSE_ENERGY_PER_SECTOR: f64 = 10.0;
pub const WARP_TIME_PER_QUADRANT: f64 = 0.5;
pub const IMPULSE_TIME_PER_SECTOR: f64 = 0.1;
pub const WORMHOLE_TRANSIT_TIME: f64 = 0.5;
pub const COFFEE_COST_FACTOR: f64 = 0.7;

pub const BASE_BUFF_DURATION: f64 = 5.0;
pub const RAKTAJINO_PHASER_BONUS: f64 = 1.5;

pub const TORPEDO_BASE_ACCURACY: f64 = 0.85;
pub const TURBULENCE_CHANCE: f64 = 0.2;
pub const HULL_SYSTEM_DAMAGE_CHANCE: f64 = 0.3;

pub const SAVE_KEY: &str = "sst-save";

pub const STARBASE_COMMANDERS: [&str; 12] = [
    "Commander Chen",
    "Commander T'Prela",
    "Commander Okafor",
    "Commander Vasquez",
    "Commander zh'Raal",
    "Commander Dubois",
    "Commander Krishnamurthy",
    "Commander Sato",
    "Commander O'Brien",
    "Commander Tarkiv",
    "Commander Mbeki",
    "Commander Johansson",
];

pub const NUM_SUBSYSTEMS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subsystem {
    WarpEngines = 0,
    ShortRangeSensors = 1,
    LongRangeSensors = 2,
    Phasers = 3,
    PhotonTorpedoes = 4,
    Shields = 5,
    Computer = 6,
    SubspaceRadio = 7,
}

impl Subsystem {
    pub fn name(&self) -> &'static str {
        match self {
            Subsystem::WarpEngines => "Warp Engines",
            Subsystem::ShortRangeSensors => "Short Range Sensors",
            Subsystem::LongRangeSensors => "Long Range Sensors",
            Subsystem::Phasers => "Phasers",
            Subsystem::PhotonTorpedoes => "Photon Torpedoes",
            Subsystem::Shields => "Shields",
            Subsystem::Computer => "Computer",
            Subsystem::SubspaceRadio => "Subspace Radio",
        }
    }

    pub const ALL: [Subsystem; NUM_SUBSYSTEMS] = [
        Subsystem::WarpEngines,
        Subsystem::ShortRangeSensors,
        Subsystem::LongRangeSensors,
        Subsystem::Phasers,
        Subsystem::PhotonTorpedoes,
        Subsystem::Shields,
        Subsystem::Computer,
        Subsystem::SubspaceRadio,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectorContent {
    #[default]
    Empty,
    Enterprise,
    Cardassian,
    Starbase,
    Star,
    Wormhole,
}

impl SectorContent {
    pub fn symbol(&self) -> char {
        match self {
            SectorContent::Empty => '.',
            SectorContent::Enterprise => 'E',
            SectorContent::Cardassian => 'C',
            SectorContent::Starbase => 'B',
            SectorContent::Star => '*',
            SectorContent::Wormhole => '@',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Green,
    Yellow,
    Red,
    Docked,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Green => "GREEN",
            Condition::Yellow => "YELLOW",
            Condition::Red => "RED",
            Condition::Docked => "DOCKED",
        }
    }
}
