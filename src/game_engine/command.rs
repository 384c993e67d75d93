use crate::models::navigation_types::{parse_pair, Delta};

/// A parsed player command. Arguments that fail to parse become `None`
/// so the handler can print its usage text.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ShortRangeScan,
    LongRangeScan,
    StarMap,
    DamageReport,
    StatusReport,
    Warp(Option<Delta>),
    Impulse(Option<Delta>),
    Phasers(Option<i32>),
    /// 1-based target sector.
    Torpedoes(Option<(i32, i32)>),
    Shields,
    /// Free-text replicator order, possibly empty.
    Computer(String),
    Dock,
    Crew(Vec<String>),
    SelfDestruct,
    Save,
    Log,
    New,
    Help,
    Empty,
    Unknown(String),
}

impl Command {
    /// Parse one line. Keywords are case-insensitive and arguments may be
    /// separated by spaces or commas.
    pub fn parse(line: &str) -> Command {
        let line = line.trim().to_uppercase();
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Command::Empty;
        };
        let args: Vec<&str> = parts.collect();
        let rest = args.join(" ");

        match keyword {
            "SRSCAN" => Command::ShortRangeScan,
            "LRSCAN" => Command::LongRangeScan,
            "STARMAP" => Command::StarMap,
            "DAMAGE" => Command::DamageReport,
            "STATUS" => Command::StatusReport,
            "WARP" => Command::Warp(parse_delta(&rest)),
            "IMPULSE" => Command::Impulse(parse_delta(&rest)),
            "PHASERS" => Command::Phasers(args.first().and_then(|a| a.parse().ok())),
            "TORPEDOES" => Command::Torpedoes(parse_pair(&rest).ok()),
            "SHIELDS" => Command::Shields,
            "COMPUTER" => Command::Computer(rest),
            "DOCK" => Command::Dock,
            "CREW" => Command::Crew(args.iter().map(|a| a.to_string()).collect()),
            "SELFDESTRUCT" => Command::SelfDestruct,
            "SAVE" => Command::Save,
            "LOG" => Command::Log,
            "NEW" => Command::New,
            "HELP" => Command::Help,
            other => Command::Unknown(other.to_string()),
        }
    }
}

fn parse_delta(text: &str) -> Option<Delta> {
    parse_pair(text).ok().map(|(dx, dy)| Delta::new(dx, dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(Command::parse("srscan"), Command::ShortRangeScan);
        assert_eq!(Command::parse("  Status "), Command::StatusReport);
        assert_eq!(Command::parse("selfdestruct"), Command::SelfDestruct);
    }

    #[test]
    fn movement_arguments() {
        assert_eq!(Command::parse("warp 1, -2"), Command::Warp(Some(Delta::new(1, -2))));
        assert_eq!(Command::parse("IMPULSE 0 1"), Command::Impulse(Some(Delta::new(0, 1))));
        assert_eq!(Command::parse("WARP"), Command::Warp(None));
        assert_eq!(Command::parse("WARP up"), Command::Warp(None));
        assert_eq!(Command::parse("WARP 2000000000,2000000000"), Command::Warp(None));
        assert_eq!(Command::parse("IMPULSE -2147483648,0"), Command::Impulse(None));
    }

    #[test]
    fn combat_arguments() {
        assert_eq!(Command::parse("phasers 500"), Command::Phasers(Some(500)));
        assert_eq!(Command::parse("PHASERS lots"), Command::Phasers(None));
        assert_eq!(Command::parse("torpedoes 3,5"), Command::Torpedoes(Some((3, 5))));
        assert_eq!(Command::parse("TORPEDOES"), Command::Torpedoes(None));
        assert_eq!(Command::parse("TORPEDOES -2147483648,1"), Command::Torpedoes(None));
    }

    #[test]
    fn free_text_arguments() {
        assert_eq!(
            Command::parse("computer Tea, Earl Grey, hot"),
            Command::Computer("TEA, EARL GREY, HOT".to_string())
        );
        assert_eq!(Command::parse("COMPUTER"), Command::Computer(String::new()));
        assert_eq!(
            Command::parse("crew swap tactical 1"),
            Command::Crew(vec!["SWAP".into(), "TACTICAL".into(), "1".into()])
        );
    }

    #[test]
    fn empty_and_unknown() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("xyzzy now"), Command::Unknown("XYZZY".to_string()));
    }
}
