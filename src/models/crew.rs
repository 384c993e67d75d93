//! Bridge crew
//!
//! A fixed roster of twenty officers, four per bridge role. Each officer
//! carries multipliers for the part of the ship they run. The bridge holds
//! at most one officer per role; the rest wait at starbases.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::dice::Dice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Helm,
    Tactical,
    Engineering,
    Science,
    Communications,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Helm,
        Role::Tactical,
        Role::Engineering,
        Role::Science,
        Role::Communications,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Helm => "Helm",
            Role::Tactical => "Tactical",
            Role::Engineering => "Engineering",
            Role::Science => "Science",
            Role::Communications => "Communications",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn parse(text: &str) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(text))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrewStats {
    /// Lower is better for both.
    Helm { warp_cost: f64, impulse_cost: f64 },
    Tactical { phaser_damage: f64, torpedo_accuracy: f64 },
    Engineering { repair_speed: f64, shield_efficiency: f64 },
    Science { scan_detail: bool, lrs_range: i32 },
    Communications { buff_duration: f64, dock_efficiency: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrewMember {
    pub id: &'static str,
    pub role: Role,
    pub name: &'static str,
    pub description: &'static str,
    pub stats: CrewStats,
}

const fn officer(
    id: &'static str,
    role: Role,
    name: &'static str,
    description: &'static str,
    stats: CrewStats,
) -> CrewMember {
    CrewMember {
        id,
        role,
        name,
        description,
        stats,
    }
}

pub static ROSTER: [CrewMember; 20] = [
    officer(
        "helm1",
        Role::Helm,
        "Lt. Kowalski",
        "Runs the engines hot, great at warp but rough on short hops",
        CrewStats::Helm { warp_cost: 0.75, impulse_cost: 1.20 },
    ),
    officer(
        "helm2",
        Role::Helm,
        "Ensign Ro",
        "Smooth on the stick, takes her time between stars",
        CrewStats::Helm { warp_cost: 1.15, impulse_cost: 0.75 },
    ),
    officer(
        "helm3",
        Role::Helm,
        "Lt. Cmdr. Park",
        "By-the-book navigator, steady and efficient",
        CrewStats::Helm { warp_cost: 0.90, impulse_cost: 0.90 },
    ),
    officer(
        "helm4",
        Role::Helm,
        "Lt. DeSoto",
        "Gets the job done, nothing fancy",
        CrewStats::Helm { warp_cost: 1.0, impulse_cost: 1.0 },
    ),
    officer(
        "tac1",
        Role::Tactical,
        "Lt. Worf",
        "Dead-eye with phasers, not such a hot shot on the torpedo controls",
        CrewStats::Tactical { phaser_damage: 1.30, torpedo_accuracy: 0.70 },
    ),
    officer(
        "tac2",
        Role::Tactical,
        "Ensign Tala",
        "Careful aim with torpedoes, conservative on the trigger",
        CrewStats::Tactical { phaser_damage: 0.85, torpedo_accuracy: 1.10 },
    ),
    officer(
        "tac3",
        Role::Tactical,
        "Lt. Ch'Taran",
        "Aggressive on all fronts, no finesse",
        CrewStats::Tactical { phaser_damage: 1.15, torpedo_accuracy: 0.90 },
    ),
    officer(
        "tac4",
        Role::Tactical,
        "Lt. Cmdr. Ayala",
        "Solid all around, keeps a cool head",
        CrewStats::Tactical { phaser_damage: 1.05, torpedo_accuracy: 1.0 },
    ),
    officer(
        "eng1",
        Role::Engineering,
        "Chief Rawlings",
        "Keeps shields humming, repairs take a backseat",
        CrewStats::Engineering { repair_speed: 0.80, shield_efficiency: 1.25 },
    ),
    officer(
        "eng2",
        Role::Engineering,
        "Lt. Barclay",
        "Brilliant at fixing things, forgets to check the shields",
        CrewStats::Engineering { repair_speed: 1.30, shield_efficiency: 0.80 },
    ),
    officer(
        "eng3",
        Role::Engineering,
        "Lt. Cmdr. Singh",
        "Methodical, everything runs a little better",
        CrewStats::Engineering { repair_speed: 1.10, shield_efficiency: 1.10 },
    ),
    officer(
        "eng4",
        Role::Engineering,
        "Ensign Vorik",
        "Competent, by Vulcan standards that's high praise",
        CrewStats::Engineering { repair_speed: 1.0, shield_efficiency: 1.0 },
    ),
    officer(
        "sci1",
        Role::Science,
        "Lt. Cmdr. Velix",
        "Reads long-range like a book, misses what's under her nose",
        CrewStats::Science { scan_detail: false, lrs_range: 2 },
    ),
    officer(
        "sci2",
        Role::Science,
        "Lt. Duval",
        "Sharp eye up close, struggles at range",
        CrewStats::Science { scan_detail: true, lrs_range: 1 },
    ),
    officer(
        "sci3",
        Role::Science,
        "Ensign T'Lora",
        "Thorough analyst, takes nothing for granted",
        CrewStats::Science { scan_detail: true, lrs_range: 2 },
    ),
    officer(
        "sci4",
        Role::Science,
        "Ensign Brooks",
        "Still calibrating, gives you the basics",
        CrewStats::Science { scan_detail: false, lrs_range: 1 },
    ),
    officer(
        "comm1",
        Role::Communications,
        "Lt. Palmer",
        "Keeps morale sky-high, never heard of energy rationing",
        CrewStats::Communications { buff_duration: 1.5, dock_efficiency: 0.85 },
    ),
    officer(
        "comm2",
        Role::Communications,
        "Ensign Patel",
        "Efficient communicator, no time for small talk",
        CrewStats::Communications { buff_duration: 0.80, dock_efficiency: 1.20 },
    ),
    officer(
        "comm3",
        Role::Communications,
        "Lt. Cmdr. Hoshi",
        "The crew hangs on every word, starbases love her",
        CrewStats::Communications { buff_duration: 1.20, dock_efficiency: 1.15 },
    ),
    officer(
        "comm4",
        Role::Communications,
        "Ensign Zheng",
        "Gets the message across, nothing more",
        CrewStats::Communications { buff_duration: 1.0, dock_efficiency: 1.0 },
    ),
];

/// Index into [`ROSTER`]. Serialized as the officer's id string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CrewId(usize);

impl CrewId {
    pub fn find(id: &str) -> Option<CrewId> {
        ROSTER.iter().position(|m| m.id == id).map(CrewId)
    }

    pub fn member(&self) -> &'static CrewMember {
        &ROSTER[self.0]
    }

    pub fn role(&self) -> Role {
        self.member().role
    }

    /// Every officer of `role`, in roster order.
    pub fn of_role(role: Role) -> impl Iterator<Item = CrewId> {
        (0..ROSTER.len())
            .filter(move |&i| ROSTER[i].role == role)
            .map(CrewId)
    }
}

impl TryFrom<String> for CrewId {
    type Error = String;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        CrewId::find(&id).ok_or_else(|| format!("unknown crew id '{}'", id))
    }
}

impl From<CrewId> for String {
    fn from(id: CrewId) -> Self {
        id.member().id.to_string()
    }
}

impl fmt::Display for CrewId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.member().name)
    }
}

/// One seat per role. A vacant seat contributes neutral modifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgeCrew {
    pub helm: Option<CrewId>,
    pub tactical: Option<CrewId>,
    pub engineering: Option<CrewId>,
    pub science: Option<CrewId>,
    pub communications: Option<CrewId>,
}

impl BridgeCrew {
    pub fn get(&self, role: Role) -> Option<CrewId> {
        match role {
            Role::Helm => self.helm,
            Role::Tactical => self.tactical,
            Role::Engineering => self.engineering,
            Role::Science => self.science,
            Role::Communications => self.communications,
        }
    }

    /// Seat an officer in their role, returning whoever held it.
    pub fn assign(&mut self, id: CrewId) -> Option<CrewId> {
        let seat = match id.role() {
            Role::Helm => &mut self.helm,
            Role::Tactical => &mut self.tactical,
            Role::Engineering => &mut self.engineering,
            Role::Science => &mut self.science,
            Role::Communications => &mut self.communications,
        };
        seat.replace(id)
    }

    fn stats(&self, role: Role) -> Option<CrewStats> {
        self.get(role).map(|id| id.member().stats)
    }

    pub fn warp_cost(&self) -> f64 {
        match self.stats(Role::Helm) {
            Some(CrewStats::Helm { warp_cost, .. }) => warp_cost,
            _ => 1.0,
        }
    }

    pub fn impulse_cost(&self) -> f64 {
        match self.stats(Role::Helm) {
            Some(CrewStats::Helm { impulse_cost, .. }) => impulse_cost,
            _ => 1.0,
        }
    }

    pub fn phaser_damage(&self) -> f64 {
        match self.stats(Role::Tactical) {
            Some(CrewStats::Tactical { phaser_damage, .. }) => phaser_damage,
            _ => 1.0,
        }
    }

    pub fn torpedo_accuracy(&self) -> f64 {
        match self.stats(Role::Tactical) {
            Some(CrewStats::Tactical { torpedo_accuracy, .. }) => torpedo_accuracy,
            _ => 1.0,
        }
    }

    pub fn repair_speed(&self) -> f64 {
        match self.stats(Role::Engineering) {
            Some(CrewStats::Engineering { repair_speed, .. }) => repair_speed,
            _ => 1.0,
        }
    }

    pub fn shield_efficiency(&self) -> f64 {
        match self.stats(Role::Engineering) {
            Some(CrewStats::Engineering { shield_efficiency, .. }) => shield_efficiency,
            _ => 1.0,
        }
    }

    pub fn scan_detail(&self) -> bool {
        matches!(
            self.stats(Role::Science),
            Some(CrewStats::Science { scan_detail: true, .. })
        )
    }

    pub fn lrs_range(&self) -> i32 {
        match self.stats(Role::Science) {
            Some(CrewStats::Science { lrs_range, .. }) => lrs_range,
            _ => 1,
        }
    }

    pub fn buff_duration(&self) -> f64 {
        match self.stats(Role::Communications) {
            Some(CrewStats::Communications { buff_duration, .. }) => buff_duration,
            _ => 1.0,
        }
    }

    pub fn dock_efficiency(&self) -> f64 {
        match self.stats(Role::Communications) {
            Some(CrewStats::Communications { dock_efficiency, .. }) => dock_efficiency,
            _ => 1.0,
        }
    }
}

/// Pick one officer per role at random and return the bridge together
/// with the remaining officers in shuffled order.
pub fn draft(dice: &mut Dice) -> (BridgeCrew, Vec<CrewId>) {
    let mut bridge = BridgeCrew::default();
    let mut reserves = Vec::with_capacity(ROSTER.len() - Role::ALL.len());

    for role in Role::ALL {
        let mut candidates: Vec<CrewId> = CrewId::of_role(role).collect();
        dice.shuffle(&mut candidates);
        if let Some((&first, rest)) = candidates.split_first() {
            bridge.assign(first);
            reserves.extend_from_slice(rest);
        }
    }

    // Reserves are reshuffled in roster order, independent of the draft order.
    reserves.sort_by_key(|id| id.0);
    dice.shuffle(&mut reserves);
    (bridge, reserves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_four_officers_per_role() {
        for role in Role::ALL {
            assert_eq!(CrewId::of_role(role).count(), 4, "{}", role.label());
        }
    }

    #[test]
    fn vacant_bridge_is_neutral() {
        let crew = BridgeCrew::default();
        assert_eq!(crew.warp_cost(), 1.0);
        assert_eq!(crew.impulse_cost(), 1.0);
        assert_eq!(crew.phaser_damage(), 1.0);
        assert_eq!(crew.torpedo_accuracy(), 1.0);
        assert_eq!(crew.repair_speed(), 1.0);
        assert_eq!(crew.shield_efficiency(), 1.0);
        assert!(!crew.scan_detail());
        assert_eq!(crew.lrs_range(), 1);
        assert_eq!(crew.buff_duration(), 1.0);
        assert_eq!(crew.dock_efficiency(), 1.0);
    }

    #[test]
    fn assign_returns_previous_officer() {
        let mut crew = BridgeCrew::default();
        let worf = CrewId::find("tac1").unwrap();
        let tala = CrewId::find("tac2").unwrap();
        assert_eq!(crew.assign(worf), None);
        assert_eq!(crew.phaser_damage(), 1.30);
        assert_eq!(crew.assign(tala), Some(worf));
        assert_eq!(crew.torpedo_accuracy(), 1.10);
    }

    #[test]
    fn draft_fills_every_seat_and_keeps_fifteen_reserves() {
        let mut dice = Dice::new(42);
        let (bridge, reserves) = draft(&mut dice);
        for role in Role::ALL {
            let id = bridge.get(role).expect("seat filled");
            assert_eq!(id.role(), role);
            assert!(!reserves.contains(&id));
        }
        assert_eq!(reserves.len(), 15);
    }

    #[test]
    fn crew_id_serializes_as_roster_id() {
        let id = CrewId::find("sci3").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"sci3\"");
        let back: CrewId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<CrewId>("\"nobody\"").is_err());
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("TACTICAL"), Some(Role::Tactical));
        assert_eq!(Role::parse("comms"), None);
    }
}
