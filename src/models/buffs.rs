//! Replicator buffs
//!
//! Four independent countdowns measured in turn-advancing actions.
//! Zero means inactive.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buff {
    /// Movement energy discount
    Coffee,
    /// Faster passive repairs
    Tea,
    /// Phaser damage bonus
    Raktajino,
    /// Shield regeneration each tick
    PruneJuice,
}

impl Buff {
    pub const ALL: [Buff; 4] = [Buff::Coffee, Buff::Tea, Buff::Raktajino, Buff::PruneJuice];

    pub fn name(&self) -> &'static str {
        match self {
            Buff::Coffee => "Coffee",
            Buff::Tea => "Tea",
            Buff::Raktajino => "Raktajino",
            Buff::PruneJuice => "Prune Juice",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buffs {
    pub coffee: u32,
    pub tea: u32,
    pub raktajino: u32,
    pub prune_juice: u32,
}

impl Buffs {
    pub fn remaining(&self, buff: Buff) -> u32 {
        match buff {
            Buff::Coffee => self.coffee,
            Buff::Tea => self.tea,
            Buff::Raktajino => self.raktajino,
            Buff::PruneJuice => self.prune_juice,
        }
    }

    pub fn is_active(&self, buff: Buff) -> bool {
        self.remaining(buff) > 0
    }

    pub fn activate(&mut self, buff: Buff, turns: u32) {
        let slot = match buff {
            Buff::Coffee => &mut self.coffee,
            Buff::Tea => &mut self.tea,
            Buff::Raktajino => &mut self.raktajino,
            Buff::PruneJuice => &mut self.prune_juice,
        };
        *slot = turns;
    }

    /// Count every active buff down by one.
    /// Returns whether prune juice was active for this tick.
    pub fn tick(&mut self) -> bool {
        let prune_active = self.prune_juice > 0;
        for slot in [
            &mut self.coffee,
            &mut self.tea,
            &mut self.raktajino,
            &mut self.prune_juice,
        ] {
            *slot = slot.saturating_sub(1);
        }
        prune_active
    }

    /// Active buffs with their remaining turns.
    pub fn active(&self) -> impl Iterator<Item = (Buff, u32)> + '_ {
        Buff::ALL
            .into_iter()
            .map(|b| (b, self.remaining(b)))
            .filter(|&(_, turns)| turns > 0)
    }
}
