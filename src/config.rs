//! New-game options
//!
//! Everything a new galaxy depends on besides the random draws. Unset
//! fields fall back to the randomized defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub seed: u64,
    /// Force the total number of Cardassians.
    pub cardassians: Option<i32>,
    /// Force the starting stardate.
    pub starting_stardate: Option<f64>,
    /// Force the mission length in stardates.
    pub mission_length: Option<f64>,
}

impl GameOptions {
    pub fn new(seed: u64) -> Self {
        GameOptions {
            seed,
            ..Default::default()
        }
    }

    pub fn with_cardassians(mut self, count: i32) -> Self {
        self.cardassians = Some(count);
        self
    }

    pub fn with_starting_stardate(mut self, stardate: f64) -> Self {
        self.starting_stardate = Some(stardate);
        self
    }

    pub fn with_mission_length(mut self, length: f64) -> Self {
        self.mission_length = Some(length);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let opts: GameOptions = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(opts, GameOptions::new(9));
    }

    #[test]
    fn builders_set_overrides() {
        let opts = GameOptions::new(1)
            .with_cardassians(20)
            .with_starting_stardate(2000.0)
            .with_mission_length(30.0);
        assert_eq!(opts.cardassians, Some(20));
        assert_eq!(opts.starting_stardate, Some(2000.0));
        assert_eq!(opts.mission_length, Some(30.0));
    }
}
