use crate::game_engine::DefeatReason;
use crate::io::OutputWriter;
use crate::models::buffs::Buffs;
use crate::models::constants::Subsystem;
use crate::models::crew::{BridgeCrew, CrewId, Role};
use crate::models::enterprise::Enterprise;
use crate::models::galaxy::Galaxy;
use crate::models::position::SectorPosition;

pub struct EnterprisePresenter;

impl EnterprisePresenter {
    pub fn show_damage_report(enterprise: &Enterprise, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("DAMAGE REPORT:");
        output.writeln("");
        for subsystem in Subsystem::ALL {
            let damage = enterprise.damage_of(subsystem);
            if damage >= 0.0 {
                output.writeln(&format!("{:<20} Operational", subsystem.name()));
            } else {
                output.writeln(&format!(
                    "{:<20} DAMAGED - {:.1} stardates to repair",
                    subsystem.name(),
                    damage.abs()
                ));
            }
        }
        output.writeln("");
    }

    pub fn show_status_report(galaxy: &Galaxy, ghost_ship: bool, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("STATUS REPORT:");
        output.writeln("");
        let ship = if ghost_ship { "USS Enterprise-A" } else { "USS Enterprise" };
        output.writeln(&format!("Ship:               {}", ship));
        output.writeln(&format!("Stardate:           {:.1}", galaxy.stardate()));
        output.writeln(&format!(
            "Time Remaining:     {:.1} stardates",
            galaxy.stardates_remaining()
        ));
        output.writeln(&format!(
            "Cardassians Remaining: {}",
            galaxy.remaining_cardassians()
        ));
        output.writeln(&format!("Starbases:          {}", galaxy.total_starbases()));
        output.writeln("");
        Self::show_active_buffs(galaxy.buffs(), output);
    }

    pub fn show_active_buffs(buffs: &Buffs, output: &mut dyn OutputWriter) {
        let active: Vec<String> = buffs
            .active()
            .map(|(buff, turns)| format!("{} ({} moves)", buff.name(), turns))
            .collect();
        if !active.is_empty() {
            output.writeln(&format!("Active buffs: {}", active.join(", ")));
            output.writeln("");
        }
    }

    pub fn show_shield_status(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!(
            "Shield status: {} / {}",
            galaxy.enterprise().shields,
            galaxy.shield_capacity()
        ));
        output.writeln("Shields are automatic - they absorb damage from attacks.");
        output.writeln("Dock at a starbase to restore shields.");
        output.writeln("");
    }
}

pub struct CombatPresenter;

impl CombatPresenter {
    pub fn show_red_alert(count: usize, output: &mut dyn OutputWriter) {
        if count == 0 {
            return;
        }
        output.writeln("");
        output.writeln(&format!(
            "*** RED ALERT! {} Cardassian{} detected! ***",
            count,
            if count > 1 { "s" } else { "" }
        ));
    }

    pub fn show_cardassian_hit(
        pos: SectorPosition,
        damage: i32,
        remaining: i32,
        output: &mut dyn OutputWriter,
    ) {
        output.writeln(&format!(
            "Cardassian at [{},{}] hit for {} damage.",
            pos.x + 1,
            pos.y + 1,
            damage
        ));
        if remaining <= 0 {
            output.writeln("  *** CARDASSIAN DESTROYED! ***");
        } else {
            output.writeln(&format!("  Cardassian energy remaining: {}", remaining));
        }
    }

    pub fn show_victory(rating: i32, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("*** CONGRATULATIONS! ***");
        output.writeln("You have destroyed all Cardassian warships!");
        output.writeln("The Federation is saved!");
        output.writeln("");
        output.writeln(&format!("Your efficiency rating: {}", rating));
        output.writeln("");
    }

    pub fn show_defeat(reason: DefeatReason, output: &mut dyn OutputWriter) {
        output.writeln("");
        match reason {
            DefeatReason::ShipDestroyed => {
                output.writeln("*** ENTERPRISE DESTROYED ***");
                output.writeln("Your ship has run out of energy and life support has failed.");
            }
            DefeatReason::TimeExpired => {
                output.writeln("*** TIME HAS RUN OUT ***");
                output.writeln("The Federation has fallen to the Cardassian invasion.");
            }
            DefeatReason::Captured => {
                output.writeln("=== TO BE CONTINUED... ===");
            }
        }
        output.writeln("");
    }
}

pub struct CrewPresenter;

impl CrewPresenter {
    pub fn show_roster(crew: &BridgeCrew, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("=== BRIDGE CREW ===");
        output.writeln("");
        for role in Role::ALL {
            let label = format!("{}:", role.label());
            match crew.get(role) {
                Some(id) => {
                    let member = id.member();
                    output.writeln(&format!("{:<16}{}", label, member.name));
                    output.writeln(&format!("{:16}{}", "", member.description));
                }
                None => output.writeln(&format!("{:<16}(vacant)", label)),
            }
        }
        output.writeln("");
    }

    /// Officers waiting at a starbase, numbered overall and per role.
    pub fn show_starbase_pool(pool: &[CrewId], output: &mut dyn OutputWriter) {
        if pool.is_empty() {
            output.writeln("No crew available for transfer at this starbase.");
            output.writeln("");
            return;
        }

        output.writeln("=== AVAILABLE CREW AT THIS STARBASE ===");
        output.writeln("");
        for (i, id) in pool.iter().enumerate() {
            let member = id.member();
            output.writeln(&format!("{}. {} ({})", i + 1, member.name, member.role.label()));
            output.writeln(&format!("   {}", member.description));
        }
        output.writeln("");
        output.writeln("CREW SWAP [role] [number] to swap");
        output.writeln("Example: CREW SWAP TACTICAL 1");
        output.writeln("");

        for role in Role::ALL {
            let names: Vec<String> = pool
                .iter()
                .filter(|id| id.role() == role)
                .enumerate()
                .map(|(i, id)| format!("{}. {}", i + 1, id.member().name))
                .collect();
            if !names.is_empty() {
                output.writeln(&format!("{}: {}", role.label(), names.join(", ")));
            }
        }
        output.writeln("");
    }
}

pub struct HelpPresenter;

impl HelpPresenter {
    pub fn show_help(output: &mut dyn OutputWriter) {
        const LINES: &[&str] = &[
            "",
            "=== SUPER STAR TREK COMMANDS ===",
            "",
            "WARP x, y      - Warp to another quadrant",
            "IMPULSE x, y   - Move within current quadrant",
            "SRSCAN         - Short Range Scan (view quadrant)",
            "LRSCAN         - Long Range Scan (view nearby quadrants)",
            "STARMAP        - View entire galaxy map",
            "PHASERS n      - Fire phasers using n energy",
            "TORPEDOES x, y - Fire torpedo at sector x, y",
            "SHIELDS        - View shield status (automatic)",
            "DAMAGE         - Damage Report",
            "STATUS         - Status Report",
            "COMPUTER       - Replicator (crew buffs)",
            "DOCK           - Dock at Starbase (must be adjacent)",
            "CREW           - View bridge crew (swap at starbase)",
            "SELFDESTRUCT   - Self-destruct (last resort!)",
            "SAVE           - Save game",
            "LOG            - Captain's log (personal notes)",
            "NEW            - Start New Game",
            "HELP           - Show this help",
            "",
            "=== NAVIGATION ===",
            "",
            "Coordinates: x, y where positive X = right, positive Y = up",
            "",
            "WARP 1, 0    - Warp one quadrant right",
            "WARP 0, -1   - Warp one quadrant down",
            "IMPULSE 2, 1 - Move 2 sectors right, 1 up",
            "",
            "=== COMBAT ===",
            "",
            "PHASERS 500    - Fire phasers with 500 energy (hits all Cardassians)",
            "TORPEDOES 3, 5 - Fire torpedo at sector [3, 5]",
            "",
            "=== MISSION ===",
            "",
            "Destroy all Cardassians before time runs out!",
            "Dock at starbases to repair and resupply.",
            "",
            "=== SYMBOLS ===",
            "",
            "E = Enterprise (you)",
            "C = Cardassian warship",
            "B = Starbase",
            "@ = Wormhole (one-way, fly into it with IMPULSE)",
            "* = Star",
            ". = Empty space",
            "",
        ];
        for line in LINES {
            output.writeln(line);
        }
    }
}
